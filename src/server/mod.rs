//! JSON HTTP boundary over the record store.

mod error;
pub mod routes;

use crate::config::Config;
use crate::db::RecordStore;
use crate::errors::{AppError, AppResult};
use axum::Router;
use axum::routing::{delete, get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

pub fn router(store: Arc<dyn RecordStore>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route(
            "/api/volunteers",
            get(routes::list_volunteers).post(routes::create_volunteer),
        )
        .route("/api/volunteers/names", get(routes::volunteer_names))
        .route(
            "/api/guests",
            get(routes::list_guests).post(routes::create_guest),
        )
        .route(
            "/api/staff",
            get(routes::list_staff).post(routes::create_staff),
        )
        .route("/api/staff/names", get(routes::staff_names))
        .route("/api/people", get(routes::list_people))
        .route("/api/people/:kind/:id", delete(routes::delete_person))
        .route("/api/stats", get(routes::stats))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { store })
}

/// Bind `cfg.bind` and serve until Ctrl-C.
pub async fn serve(cfg: &Config, store: Arc<dyn RecordStore>) -> AppResult<()> {
    let listener = tokio::net::TcpListener::bind(&cfg.bind)
        .await
        .map_err(|e| AppError::Config(format!("cannot bind {}: {}", cfg.bind, e)))?;

    let addr = listener.local_addr()?;
    tracing::info!(%addr, backend = ?cfg.backend, "frontdesk listening");

    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
