//! Room Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Room listing row (`cube45_rooms`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Room {
    /// Room identifier, zone letter first (e.g. `A3`)
    pub id: String,
    pub name: String,
    /// Zone label as authored in the admin tooling
    pub zone: String,
    pub room_type: String,
    pub pool_type: Option<String>,
    pub room_count: i32,
    pub bathroom_count: i32,
    pub standard_occupancy: i32,
    pub max_occupancy: i32,
    /// Floor area in square meters
    pub area: f64,
    pub pet_friendly: bool,
    pub has_fireplace: bool,
    /// Nightly price
    pub price: Decimal,
}
