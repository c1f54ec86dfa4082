use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use booking_client::config::AppConfig;
use booking_client::handlers;
use booking_client::services::api::http::HttpBookingApi;
use booking_client::state::AppState;
use booking_client::templates;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let api = HttpBookingApi::new(config.api_url.clone());
    tracing::info!("using bookings backend at {}", api.base_url());

    let state = Arc::new(AppState {
        api: Box::new(api),
        templates: templates::load()?,
    });

    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting booking client on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
