//! cube45-server: JSON API of the Cube45 stay site
//!
//! - Content pages grouped into sections and cards
//! - Room listing and room detail (zone defaults, gallery, carousel)
//! - Reservation lookup and cancellation by booker name and phone
//! - Navigation, location and contact data for the front-end

mod api;
mod config;
mod db;
mod error;
mod middleware;
mod services;
mod state;
mod util;

use std::net::SocketAddr;

use config::Config;
use db::BoxError;
use state::AppState;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cube45_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting cube45-server (env: {})", config.environment);

    let state = AppState::new(&config).await?;

    // Periodic rate limiter cleanup (every 5 minutes)
    let rate_limiter = state.rate_limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(300));
        loop {
            interval.tick().await;
            rate_limiter.cleanup().await;
        }
    });

    let app = api::build_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("cube45-server HTTP listening on {addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
