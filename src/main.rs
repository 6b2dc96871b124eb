use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mhs_activities_api::app::{create_router, AppState};
use mhs_activities_api::config;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mhs_activities_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Teacher credentials are required; the server cannot start without them
    let credentials = match config::load_credentials_with_fallback() {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::error!("Failed to load teacher credentials: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::new(credentials);
    let app = create_router(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("Starting Mergington High School activities API on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
