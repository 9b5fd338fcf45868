//! Content page API

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/pages/{page}", get(handler::get_page))
}
