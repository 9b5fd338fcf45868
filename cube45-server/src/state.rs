//! Application state

use std::sync::Arc;

use shared::site::{ContactInfo, MapLocation};
use sqlx::PgPool;

use crate::config::Config;
use crate::db::{
    BoxError, ContentRepository, PgContentRepository, PgReservationRepository,
    PgRoomContentRepository, PgRoomRepository, ReservationRepository, RoomContentRepository,
    RoomRepository,
};
use crate::middleware::rate_limit::RateLimiter;

/// Static site settings served alongside the table content
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub default_room_image: String,
    pub map: MapLocation,
    pub contact: ContactInfo,
}

impl From<&Config> for SiteSettings {
    fn from(config: &Config) -> Self {
        Self {
            default_room_image: config.default_room_image.clone(),
            map: config.map.clone(),
            contact: config.contact.clone(),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub rooms: Arc<dyn RoomRepository>,
    pub contents: Arc<dyn ContentRepository>,
    pub room_contents: Arc<dyn RoomContentRepository>,
    pub reservations: Arc<dyn ReservationRepository>,
    pub site: Arc<SiteSettings>,
    /// Per-IP limiter for the reservation confirmation routes
    pub rate_limiter: RateLimiter,
    /// Client IP taken from `X-Forwarded-For` instead of the peer address
    pub trust_proxy: bool,
}

impl AppState {
    /// Connect to Postgres, run migrations and wire the Postgres repositories
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database ready");

        Ok(Self {
            rooms: Arc::new(PgRoomRepository::new(pool.clone())),
            contents: Arc::new(PgContentRepository::new(pool.clone())),
            room_contents: Arc::new(PgRoomContentRepository::new(pool.clone())),
            reservations: Arc::new(PgReservationRepository::new(pool)),
            site: Arc::new(SiteSettings::from(config)),
            rate_limiter: RateLimiter::per_minute(config.lookup_rate_limit),
            trust_proxy: config.trust_proxy,
        })
    }

    /// State over a single in-memory store
    #[cfg(test)]
    pub fn in_memory(store: Arc<crate::db::memory::MemoryStore>) -> Self {
        Self {
            rooms: store.clone(),
            contents: store.clone(),
            room_contents: store.clone(),
            reservations: store,
            site: Arc::new(SiteSettings {
                default_room_image: "/images/room-default.jpg".into(),
                map: MapLocation {
                    latitude: 37.75,
                    longitude: 128.89,
                    zoom: 16,
                    label: "Cube45".into(),
                },
                contact: ContactInfo {
                    name: "Cube45".into(),
                    phone: "033-000-0000".into(),
                    email: "stay@cube45.example".into(),
                    address: "Gangneung".into(),
                },
            }),
            rate_limiter: RateLimiter::per_minute(100),
            trust_proxy: false,
        }
    }
}
