//! Page content queries

use async_trait::async_trait;
use shared::models::VariousContent;
use sqlx::PgPool;

use super::{BoxError, ContentRepository};

#[derive(Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentRepository for PgContentRepository {
    async fn list_page_contents(&self, page_name: &str) -> Result<Vec<VariousContent>, BoxError> {
        let rows: Vec<VariousContent> = sqlx::query_as(
            r#"
            SELECT id, page_name, section_name, content_type, title, subtitle,
                   description, image_url, display_order, is_active, extra_attributes
            FROM cube45_various_contents
            WHERE page_name = $1 AND is_active = TRUE
            ORDER BY display_order ASC
            "#,
        )
        .bind(page_name)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
