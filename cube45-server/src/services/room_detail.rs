//! Room detail resolution
//!
//! A room page combines the room row, the room's own content sections and the
//! defaults of its zone. Content reads degrade to empty lists; only the room
//! row itself is required.

use serde::Serialize;
use shared::content::{Carousel, CarouselView, gallery_images, merge_room_contents};
use shared::error::{AppError, ErrorCode};
use shared::models::{Room, RoomContent, Zone};
use shared::site::room_detail_path;

use crate::error::ServiceResult;
use crate::state::AppState;

/// View model of `/room/<zone>/<id>`
#[derive(Debug, Clone, Serialize)]
pub struct RoomDetail {
    pub room: Room,
    pub zone: Zone,
    pub path: String,
    pub sections: Vec<RoomContent>,
    pub gallery: Vec<String>,
    pub carousel: CarouselView,
}

/// Resolve a room page. `zone` is the zone named in the route; it must agree
/// with the zone encoded in `room_id`.
pub async fn resolve(
    state: &AppState,
    zone: Zone,
    room_id: &str,
    image: usize,
) -> ServiceResult<RoomDetail> {
    let room_id = room_id.trim();
    let room_zone = Zone::of_room(room_id).ok_or_else(|| {
        AppError::new(ErrorCode::InvalidRoomId).with_detail("room_id", room_id)
    })?;
    if room_zone != zone {
        return Err(AppError::new(ErrorCode::RoomNotFound)
            .with_detail("room_id", room_id)
            .with_detail("zone", zone.as_str())
            .into());
    }

    let room = state
        .rooms
        .find_room(room_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::RoomNotFound).with_detail("room_id", room_id))?;

    let sections = load_sections(state, room_zone, room_id).await;
    let gallery = gallery_images(&sections, &state.site.default_room_image);
    let carousel = Carousel::at(gallery.len(), image).view();

    Ok(RoomDetail {
        path: room_detail_path(room_zone, &room.id),
        room,
        zone: room_zone,
        sections,
        gallery,
        carousel,
    })
}

/// Room rows over zone defaults; either read failing leaves that side empty
pub async fn load_sections(state: &AppState, zone: Zone, room_id: &str) -> Vec<RoomContent> {
    let (room_rows, zone_rows) = tokio::join!(
        state.room_contents.list_room_rows(room_id),
        state.room_contents.list_zone_defaults(zone),
    );

    let room_rows = room_rows.unwrap_or_else(|e| {
        tracing::warn!(room_id = %room_id, error = %e, "Failed to load room contents");
        Vec::new()
    });
    let zone_rows = zone_rows.unwrap_or_else(|e| {
        tracing::warn!(zone = %zone, error = %e, "Failed to load zone default contents");
        Vec::new()
    });

    merge_room_contents(room_rows, zone_rows)
}
