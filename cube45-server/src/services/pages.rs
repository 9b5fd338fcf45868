//! Content page and room listing reads
//!
//! Both degrade to an empty view when the store cannot be read.

use shared::content::PageContent;
use shared::models::{Room, Zone};
use shared::site::SitePage;

use crate::db::{ContentRepository, RoomRepository};

pub async fn load_page(repo: &dyn ContentRepository, page: SitePage) -> PageContent {
    match repo.list_page_contents(page.page_name()).await {
        Ok(rows) => PageContent::build(page.page_name(), rows),
        Err(e) => {
            tracing::warn!(page = page.page_name(), error = %e, "Failed to load page contents");
            PageContent::empty(page.page_name())
        }
    }
}

pub async fn list_rooms(repo: &dyn RoomRepository, zone: Option<Zone>) -> Vec<Room> {
    repo.list_rooms(zone).await.unwrap_or_else(|e| {
        tracing::warn!(zone = ?zone, error = %e, "Failed to load rooms");
        Vec::new()
    })
}
