//! Reservation confirmation API
//!
//! Both routes take `{ "name": ..., "phone": ... }` and are rate limited per
//! client IP.

mod handler;

use axum::{Router, middleware, routing::post};

use crate::middleware::reservation_rate_limit;
use crate::state::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    Router::new().nest("/api/reservations", routes(state))
}

fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/lookup", post(handler::lookup))
        .route("/cancel", post(handler::cancel))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            reservation_rate_limit,
        ))
}
