//! In-memory repositories for handler tests

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use shared::models::{
    ROOM_PAGE_TYPE, Reservation, ReservationStatus, Room, RoomContent, VariousContent, Zone,
};

use super::{
    BoxError, ContentRepository, ReservationRepository, RoomContentRepository, RoomRepository,
};

/// All four site tables held in memory, with a switch that makes every call fail
#[derive(Default)]
pub struct MemoryStore {
    pub rooms: Mutex<Vec<Room>>,
    pub contents: Mutex<Vec<VariousContent>>,
    pub room_contents: Mutex<Vec<RoomContent>>,
    pub reservations: Mutex<Vec<Reservation>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), BoxError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err("backend unavailable".into());
        }
        Ok(())
    }
}

fn by_order<T>(mut rows: Vec<T>, key: impl Fn(&T) -> i32) -> Vec<T> {
    rows.sort_by_key(|r| key(r));
    rows
}

#[async_trait]
impl RoomRepository for MemoryStore {
    async fn list_rooms(&self, zone: Option<Zone>) -> Result<Vec<Room>, BoxError> {
        self.check()?;
        let rooms = self.rooms.lock().unwrap();
        Ok(rooms
            .iter()
            .filter(|r| zone.is_none_or(|z| r.zone == z.as_str()))
            .cloned()
            .collect())
    }

    async fn find_room(&self, room_id: &str) -> Result<Option<Room>, BoxError> {
        self.check()?;
        let rooms = self.rooms.lock().unwrap();
        Ok(rooms.iter().find(|r| r.id == room_id).cloned())
    }
}

#[async_trait]
impl ContentRepository for MemoryStore {
    async fn list_page_contents(&self, page_name: &str) -> Result<Vec<VariousContent>, BoxError> {
        self.check()?;
        let rows = self
            .contents
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.page_name == page_name && c.is_active)
            .cloned()
            .collect();
        Ok(by_order(rows, |c: &VariousContent| c.display_order))
    }
}

#[async_trait]
impl RoomContentRepository for MemoryStore {
    async fn list_room_rows(&self, room_id: &str) -> Result<Vec<RoomContent>, BoxError> {
        self.check()?;
        let rows = self
            .room_contents
            .lock()
            .unwrap()
            .iter()
            .filter(|c| {
                c.page_type == ROOM_PAGE_TYPE
                    && c.room_id.as_deref() == Some(room_id)
                    && c.is_active
            })
            .cloned()
            .collect();
        Ok(by_order(rows, |c: &RoomContent| c.display_order))
    }

    async fn list_zone_defaults(&self, zone: Zone) -> Result<Vec<RoomContent>, BoxError> {
        self.check()?;
        let page_type = zone.default_page_type();
        let rows = self
            .room_contents
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.page_type == page_type && c.is_active)
            .cloned()
            .collect();
        Ok(by_order(rows, |c: &RoomContent| c.display_order))
    }
}

#[async_trait]
impl ReservationRepository for MemoryStore {
    async fn find_confirmed(&self, name: &str, phone: &str) -> Result<Vec<Reservation>, BoxError> {
        self.check()?;
        let rows = self.reservations.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|r| r.matches_confirmed(name, phone))
            .cloned()
            .collect())
    }

    async fn cancel_confirmed(
        &self,
        name: &str,
        phone: &str,
    ) -> Result<Vec<Reservation>, BoxError> {
        self.check()?;
        let mut rows = self.reservations.lock().unwrap();
        let mut updated = Vec::new();
        for r in rows.iter_mut().filter(|r| r.matches_confirmed(name, phone)) {
            r.status = ReservationStatus::Cancelled.as_str().to_string();
            updated.push(r.clone());
        }
        Ok(updated)
    }
}
