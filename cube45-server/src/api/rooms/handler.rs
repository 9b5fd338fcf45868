//! Room handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Room, Zone};

use crate::api::extract::ApiQuery;
use crate::error::ServiceResult;
use crate::services::pages;
use crate::services::room_detail::{self, RoomDetail};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    /// Carousel position, wrapped into the gallery length
    #[serde(default)]
    pub image: usize,
}

fn parse_zone(zone: &str) -> Result<Zone, AppError> {
    Zone::parse(zone)
        .ok_or_else(|| AppError::new(ErrorCode::ZoneNotFound).with_detail("zone", zone))
}

/// GET /api/rooms
pub async fn list(State(state): State<AppState>) -> Json<Vec<Room>> {
    Json(pages::list_rooms(state.rooms.as_ref(), None).await)
}

/// GET /api/rooms/{zone}
pub async fn list_zone(
    State(state): State<AppState>,
    Path(zone): Path<String>,
) -> AppResult<Json<Vec<Room>>> {
    let zone = parse_zone(&zone)?;
    Ok(Json(pages::list_rooms(state.rooms.as_ref(), Some(zone)).await))
}

/// GET /api/rooms/{zone}/{id}
pub async fn get_detail(
    State(state): State<AppState>,
    Path((zone, id)): Path<(String, String)>,
    ApiQuery(query): ApiQuery<DetailQuery>,
) -> ServiceResult<Json<RoomDetail>> {
    let zone = parse_zone(&zone)?;
    let detail = room_detail::resolve(&state, zone, &id, query.image).await?;
    Ok(Json(detail))
}
