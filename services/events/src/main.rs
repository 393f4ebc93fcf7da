use std::sync::Arc;

use sea_orm::Database;
use tracing::info;

use events_core::config::Config;
use events_core::tracing::init_tracing;
use events_service::config::EventsConfig;
use events_service::router::build_router;
use events_service::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = EventsConfig::from_env().expect("failed to load config from environment");

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState { db: Arc::new(db) };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.events_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("events service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
