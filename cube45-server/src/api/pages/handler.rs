//! Content page handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::content::PageContent;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::site::SitePage;

use crate::services::pages;
use crate::state::AppState;

/// GET /api/pages/{page} - sections and cards of one content page
pub async fn get_page(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> AppResult<Json<PageContent>> {
    let page = SitePage::parse(&page)
        .ok_or_else(|| AppError::new(ErrorCode::PageNotFound).with_detail("page", page))?;
    Ok(Json(pages::load_page(state.contents.as_ref(), page).await))
}
