//! Database access layer
//!
//! One repository trait per site table. Handlers only see the traits; the
//! Postgres implementations live in the submodules.

pub mod contents;
pub mod reservations;
pub mod room_contents;
pub mod rooms;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use shared::models::{Reservation, Room, RoomContent, VariousContent, Zone};

pub use contents::PgContentRepository;
pub use reservations::PgReservationRepository;
pub use room_contents::PgRoomContentRepository;
pub use rooms::PgRoomRepository;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// `cube45_rooms`
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// All rooms, or the rooms of one zone
    async fn list_rooms(&self, zone: Option<Zone>) -> Result<Vec<Room>, BoxError>;
    async fn find_room(&self, room_id: &str) -> Result<Option<Room>, BoxError>;
}

/// `cube45_various_contents`
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Active rows of one page, ascending `display_order`
    async fn list_page_contents(&self, page_name: &str) -> Result<Vec<VariousContent>, BoxError>;
}

/// `cube45_room_contents`
#[async_trait]
pub trait RoomContentRepository: Send + Sync {
    /// Active rows authored for this room, ascending `display_order`
    async fn list_room_rows(&self, room_id: &str) -> Result<Vec<RoomContent>, BoxError>;
    /// Active zone-default rows, ascending `display_order`
    async fn list_zone_defaults(&self, zone: Zone) -> Result<Vec<RoomContent>, BoxError>;
}

/// `cube45_reservations`
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Confirmed reservations booked under this name and phone
    async fn find_confirmed(&self, name: &str, phone: &str) -> Result<Vec<Reservation>, BoxError>;
    /// Flip every confirmed match to cancelled and return the updated rows
    async fn cancel_confirmed(&self, name: &str, phone: &str)
    -> Result<Vec<Reservation>, BoxError>;
}
