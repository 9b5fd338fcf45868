//! Reservation confirmation queries
//!
//! (name, phone, status = confirmed) is not a key: both operations may touch
//! any number of rows.

use async_trait::async_trait;
use shared::models::{Reservation, ReservationStatus};
use sqlx::PgPool;

use super::{BoxError, ReservationRepository};

#[derive(Clone)]
pub struct PgReservationRepository {
    pool: PgPool,
}

impl PgReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    async fn find_confirmed(&self, name: &str, phone: &str) -> Result<Vec<Reservation>, BoxError> {
        let rows: Vec<Reservation> = sqlx::query_as(
            r#"
            SELECT id, booker_name, booker_phone, status, room_id, check_in_date,
                   check_out_date, guest_count, total_price, created_at
            FROM cube45_reservations
            WHERE booker_name = $1 AND booker_phone = $2 AND status = $3
            ORDER BY check_in_date ASC NULLS LAST, id ASC
            "#,
        )
        .bind(name)
        .bind(phone)
        .bind(ReservationStatus::Confirmed.as_str())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn cancel_confirmed(
        &self,
        name: &str,
        phone: &str,
    ) -> Result<Vec<Reservation>, BoxError> {
        let rows: Vec<Reservation> = sqlx::query_as(
            r#"
            UPDATE cube45_reservations
            SET status = $4
            WHERE booker_name = $1 AND booker_phone = $2 AND status = $3
            RETURNING id, booker_name, booker_phone, status, room_id, check_in_date,
                      check_out_date, guest_count, total_price, created_at
            "#,
        )
        .bind(name)
        .bind(phone)
        .bind(ReservationStatus::Confirmed.as_str())
        .bind(ReservationStatus::Cancelled.as_str())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
