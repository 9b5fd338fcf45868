//! Reservation confirmation: find and cancel by booker name and phone

use shared::error::AppError;
use shared::models::{Reservation, ReservationLookup};

use crate::db::ReservationRepository;
use crate::error::ServiceResult;
use crate::util::{MAX_NAME_LEN, MAX_PHONE_LEN, validate_required_text};

/// Trimmed and validated (name, phone) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booker {
    pub name: String,
    pub phone: String,
}

impl TryFrom<ReservationLookup> for Booker {
    type Error = AppError;

    fn try_from(lookup: ReservationLookup) -> Result<Self, Self::Error> {
        let name = lookup.name.trim().to_string();
        let phone = lookup.phone.trim().to_string();
        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        validate_required_text(&phone, "phone", MAX_PHONE_LEN)?;
        Ok(Self { name, phone })
    }
}

/// Confirmed reservations of this booker (zero, one or many)
pub async fn find(
    repo: &dyn ReservationRepository,
    booker: &Booker,
) -> ServiceResult<Vec<Reservation>> {
    let rows = repo.find_confirmed(&booker.name, &booker.phone).await?;
    tracing::debug!(count = rows.len(), "Reservation lookup");
    Ok(rows)
}

/// Cancel every confirmed reservation of this booker and return the updated
/// rows. Repeating the call matches nothing and returns an empty list.
pub async fn cancel(
    repo: &dyn ReservationRepository,
    booker: &Booker,
) -> ServiceResult<Vec<Reservation>> {
    let rows = repo.cancel_confirmed(&booker.name, &booker.phone).await?;
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    tracing::info!(count = rows.len(), ids = ?ids, "Reservations cancelled");
    Ok(rows)
}
