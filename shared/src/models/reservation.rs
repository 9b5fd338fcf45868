//! Reservation Model (`cube45_reservations`)
//!
//! Reservations are created elsewhere; the site only looks them up and cancels
//! them by booker name and phone.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reservation status column values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "confirmed" => Some(ReservationStatus::Confirmed),
            "cancelled" => Some(ReservationStatus::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reservation row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reservation {
    pub id: i64,
    pub booker_name: String,
    pub booker_phone: String,
    pub status: String,
    pub room_id: Option<String>,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub guest_count: Option<i32>,
    pub total_price: Option<Decimal>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Reservation {
    pub fn status(&self) -> Option<ReservationStatus> {
        ReservationStatus::parse(&self.status)
    }

    /// Whether this row is selected by a (name, phone) confirmation lookup
    pub fn matches_confirmed(&self, name: &str, phone: &str) -> bool {
        self.booker_name == name
            && self.booker_phone == phone
            && self.status() == Some(ReservationStatus::Confirmed)
    }
}

/// Lookup/cancel request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationLookup {
    pub name: String,
    pub phone: String,
}
