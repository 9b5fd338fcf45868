//! Site handlers

use axum::{Json, extract::State};
use shared::site::{self, ContactInfo, MapLocation, NavItem};

use crate::state::AppState;

/// GET /api/site/navigation
pub async fn navigation() -> Json<Vec<NavItem>> {
    Json(site::public_navigation())
}

/// GET /api/site/admin-navigation
pub async fn admin_navigation() -> Json<Vec<NavItem>> {
    Json(site::admin_navigation())
}

/// GET /api/site/location
pub async fn location(State(state): State<AppState>) -> Json<MapLocation> {
    Json(state.site.map.clone())
}

/// GET /api/site/contact
pub async fn contact(State(state): State<AppState>) -> Json<ContactInfo> {
    Json(state.site.contact.clone())
}
