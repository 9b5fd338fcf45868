//! Room API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/rooms | GET | all rooms |
//! | /api/rooms/{zone} | GET | rooms of one zone |
//! | /api/rooms/{zone}/{id} | GET | room detail with gallery (`?image=`) |

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/rooms", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{zone}", get(handler::list_zone))
        .route("/{zone}/{id}", get(handler::get_detail))
}
