//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::PageNotFound | Self::RoomNotFound | Self::ZoneNotFound => StatusCode::NOT_FOUND,

            // 429 Too Many Requests
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,

            // 500 Internal Server Error
            Self::ReservationLookupFailed
            | Self::ReservationCancelFailed
            | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation and malformed input)
            Self::ValidationFailed | Self::InvalidRequest | Self::InvalidRoomId => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}
