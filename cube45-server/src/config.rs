//! Site server configuration

use shared::site::{ContactInfo, MapLocation};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Site server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Image shown when a room has no gallery sections
    pub default_room_image: String,
    /// Map widget position and label for the location page
    pub map: MapLocation,
    /// Contact page details
    pub contact: ContactInfo,
    /// Reservation lookup/cancel requests allowed per minute per client IP
    pub lookup_rate_limit: u32,
    /// Key the rate limiter on `X-Forwarded-For`; only when behind a proxy
    /// that overwrites the header
    pub trust_proxy: bool,
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            http_port: env_parse("HTTP_PORT", 8080),
            environment: env_or("ENVIRONMENT", "development"),
            default_room_image: env_or("DEFAULT_ROOM_IMAGE", "/images/room-default.jpg"),
            map: MapLocation {
                latitude: env_parse("MAP_LATITUDE", 37.758_412),
                longitude: env_parse("MAP_LONGITUDE", 128.897_634),
                zoom: env_parse("MAP_ZOOM", 16),
                label: env_or("MAP_LABEL", "Cube45"),
            },
            contact: ContactInfo {
                name: env_or("CONTACT_NAME", "Cube45"),
                phone: env_or("CONTACT_PHONE", ""),
                email: env_or("CONTACT_EMAIL", ""),
                address: env_or("CONTACT_ADDRESS", ""),
            },
            lookup_rate_limit: env_parse("LOOKUP_RATE_LIMIT", 10),
            trust_proxy: env_parse("TRUST_PROXY", false),
        })
    }
}
