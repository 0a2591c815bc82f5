use std::sync::{Arc, Mutex};

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use barbershop::config::AppConfig;
use barbershop::db;
use barbershop::handlers;
use barbershop::services::clock::SystemClock;
use barbershop::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;

    let state = Arc::new(AppState::new(
        Arc::new(Mutex::new(conn)),
        config.clone(),
        Arc::new(SystemClock),
    ));

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/slots", get(handlers::slots::get_slots))
        .route("/api/bookings", get(handlers::bookings::list_bookings))
        .route("/api/bookings", post(handlers::bookings::create_booking))
        .route(
            "/api/bookings/:id/cancel",
            post(handlers::bookings::cancel_booking),
        )
        .route("/api/admin/bookings", get(handlers::admin::get_bookings))
        .route(
            "/api/admin/bookings",
            post(handlers::admin::create_manual_booking),
        )
        .route(
            "/api/admin/bookings/:id/toggle-paid",
            post(handlers::admin::toggle_paid),
        )
        .route("/api/admin/finance", get(handlers::admin::get_finance))
        .route("/api/admin/blocks", get(handlers::admin::get_blocks))
        .route("/api/admin/blocks", post(handlers::admin::add_block))
        .route(
            "/api/admin/blocks/:index",
            delete(handlers::admin::remove_block),
        )
        .route("/api/admin/staff", get(handlers::admin::get_staff))
        .route("/api/admin/staff", post(handlers::admin::add_staff))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
