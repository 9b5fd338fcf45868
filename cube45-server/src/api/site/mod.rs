//! Site structure API: navigation trees, map location and contact details

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/site", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/navigation", get(handler::navigation))
        .route("/admin-navigation", get(handler::admin_navigation))
        .route("/location", get(handler::location))
        .route("/contact", get(handler::contact))
}
