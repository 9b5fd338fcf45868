//! Room detail content model (`cube45_room_contents`)

use serde::{Deserialize, Serialize};

/// `page_type` of rows authored for one specific room
pub const ROOM_PAGE_TYPE: &str = "room";

/// Room detail section row
///
/// Rows with `page_type = "room"` belong to `room_id`; rows with
/// `page_type = "zone_default_<zone>"` apply to every room of that zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RoomContent {
    pub id: i64,
    pub page_type: String,
    pub room_id: Option<String>,
    pub section_name: String,
    pub content: String,
    pub image_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
}

impl RoomContent {
    pub fn is_room_specific(&self) -> bool {
        self.page_type == ROOM_PAGE_TYPE
    }
}
