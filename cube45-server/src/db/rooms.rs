//! Room listing queries

use async_trait::async_trait;
use shared::models::{Room, Zone};
use sqlx::PgPool;

use super::{BoxError, RoomRepository};

const ROOM_COLUMNS: &str = r#"
    id, name, zone, room_type, pool_type, room_count, bathroom_count,
    standard_occupancy, max_occupancy, area, pet_friendly, has_fireplace, price
"#;

#[derive(Clone)]
pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PgRoomRepository {
    async fn list_rooms(&self, zone: Option<Zone>) -> Result<Vec<Room>, BoxError> {
        let rows: Vec<Room> = match zone {
            Some(zone) => {
                sqlx::query_as(&format!(
                    "SELECT {ROOM_COLUMNS} FROM cube45_rooms WHERE zone = $1 ORDER BY id"
                ))
                .bind(zone.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as(&format!("SELECT {ROOM_COLUMNS} FROM cube45_rooms ORDER BY id"))
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(rows)
    }

    async fn find_room(&self, room_id: &str) -> Result<Option<Room>, BoxError> {
        let row: Option<Room> =
            sqlx::query_as(&format!("SELECT {ROOM_COLUMNS} FROM cube45_rooms WHERE id = $1"))
                .bind(room_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row)
    }
}
