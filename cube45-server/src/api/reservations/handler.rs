//! Reservation handlers

use axum::extract::State;
use shared::error::{ApiResponse, AppResult, ErrorCode};
use shared::models::{Reservation, ReservationLookup};

use crate::api::extract::ApiJson;
use crate::services::reservations::{self, Booker};
use crate::state::AppState;

/// POST /api/reservations/lookup - confirmed reservations of a booker
pub async fn lookup(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ReservationLookup>,
) -> AppResult<ApiResponse<Vec<Reservation>>> {
    let booker = Booker::try_from(payload)?;
    let rows = reservations::find(state.reservations.as_ref(), &booker)
        .await
        .map_err(|e| e.into_app_error(ErrorCode::ReservationLookupFailed))?;
    Ok(ApiResponse::success(rows))
}

/// POST /api/reservations/cancel - cancel every confirmed reservation of a booker
pub async fn cancel(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ReservationLookup>,
) -> AppResult<ApiResponse<Vec<Reservation>>> {
    let booker = Booker::try_from(payload)?;
    let rows = reservations::cancel(state.reservations.as_ref(), &booker)
        .await
        .map_err(|e| e.into_app_error(ErrorCode::ReservationCancelFailed))?;
    let message = format!("{} reservation(s) cancelled", rows.len());
    Ok(ApiResponse::success_with_message(message, rows))
}
