//! Unified error codes for the Cube45 site
//!
//! Error codes are shared between the server and the site front-end and are
//! organized by category:
//! - 0xxx: General errors
//! - 4xxx: Reservation errors
//! - 6xxx: Content and room errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as a bare `u16` so the front-end can switch on it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Body or query string could not be decoded
    InvalidRequest = 5,
    /// Too many requests from the same client
    TooManyRequests = 9,

    // ==================== 4xxx: Reservation ====================
    /// Reservation lookup could not be completed
    ReservationLookupFailed = 4001,
    /// Reservation cancellation could not be completed
    ReservationCancelFailed = 4002,

    // ==================== 6xxx: Content ====================
    /// Page is not part of the site
    PageNotFound = 6001,
    /// Room not found
    RoomNotFound = 6101,
    /// Zone not found
    ZoneNotFound = 6102,
    /// Room identifier is malformed
    InvalidRoomId = 6103,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::TooManyRequests => "Too many requests, try again later",

            // Reservation
            ErrorCode::ReservationLookupFailed => "Reservation lookup failed",
            ErrorCode::ReservationCancelFailed => "Reservation cancellation failed",

            // Content
            ErrorCode::PageNotFound => "Page not found",
            ErrorCode::RoomNotFound => "Room not found",
            ErrorCode::ZoneNotFound => "Zone not found",
            ErrorCode::InvalidRoomId => "Invalid room identifier",

            // System
            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Returned when a `u16` does not name a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),
            9 => Ok(ErrorCode::TooManyRequests),

            // Reservation
            4001 => Ok(ErrorCode::ReservationLookupFailed),
            4002 => Ok(ErrorCode::ReservationCancelFailed),

            // Content
            6001 => Ok(ErrorCode::PageNotFound),
            6101 => Ok(ErrorCode::RoomNotFound),
            6102 => Ok(ErrorCode::ZoneNotFound),
            6103 => Ok(ErrorCode::InvalidRoomId),

            // System
            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
