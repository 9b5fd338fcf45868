//! Room detail content queries

use async_trait::async_trait;
use shared::models::{ROOM_PAGE_TYPE, RoomContent, Zone};
use sqlx::PgPool;

use super::{BoxError, RoomContentRepository};

#[derive(Clone)]
pub struct PgRoomContentRepository {
    pool: PgPool,
}

impl PgRoomContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomContentRepository for PgRoomContentRepository {
    async fn list_room_rows(&self, room_id: &str) -> Result<Vec<RoomContent>, BoxError> {
        let rows: Vec<RoomContent> = sqlx::query_as(
            r#"
            SELECT id, page_type, room_id, section_name, content, image_url,
                   display_order, is_active
            FROM cube45_room_contents
            WHERE page_type = $1 AND room_id = $2 AND is_active = TRUE
            ORDER BY display_order ASC
            "#,
        )
        .bind(ROOM_PAGE_TYPE)
        .bind(room_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_zone_defaults(&self, zone: Zone) -> Result<Vec<RoomContent>, BoxError> {
        let rows: Vec<RoomContent> = sqlx::query_as(
            r#"
            SELECT id, page_type, room_id, section_name, content, image_url,
                   display_order, is_active
            FROM cube45_room_contents
            WHERE page_type = $1 AND is_active = TRUE
            ORDER BY display_order ASC
            "#,
        )
        .bind(zone.default_page_type())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
