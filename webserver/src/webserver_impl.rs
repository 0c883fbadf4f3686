//! Main webserver implementation
//!
//! Builds the axum router over any persistence gateway and runs it until
//! Ctrl+C.

use std::path::Path;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use scheduler::{OfficeHours, PersistenceGateway};
use shared::{component_info, logging, ComponentId};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;
use crate::web::handlers::api;

/// Build the router with all API routes and, optionally, the dashboard files
pub fn build_router<G>(state: Arc<AppState<G>>, static_dir: Option<&Path>) -> Router
where
    G: PersistenceGateway + 'static,
{
    let router = Router::new()
        .route("/health", get(api::health))
        .route("/api/assign", get(api::assign_defaults::<G>).post(api::assign::<G>))
        .route("/api/history", get(api::history::<G>))
        .route("/api/frequency", get(api::frequency::<G>))
        .route("/api/roster", get(api::roster::<G>).put(api::save_roster::<G>))
        .route("/api/reload", post(api::reload::<G>))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .into_inner(),
        )
        .with_state(state);

    match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    }
}

/// Load the office hours data through `gateway` and serve until shutdown
pub async fn run<G>(gateway: G, config: &Config) -> WebServerResult<()>
where
    G: PersistenceGateway + 'static,
{
    let bind_address = config.bind_address()?;

    let office_hours = OfficeHours::load(gateway)
        .await?
        .with_recency_window(config.recency_window);
    let state = Arc::new(AppState::new(office_hours));
    let router = build_router(state, Some(config.static_dir.as_path()));

    let listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {}: {}", bind_address, e)))?;

    component_info!(ComponentId::WebServer, "🌐 Web server listening on http://{}", bind_address);
    component_info!(ComponentId::WebServer, "📊 Dashboard available at http://{}/", bind_address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(ComponentId::WebServer, "Received Ctrl+C signal"),
        Err(err) => logging::log_error(ComponentId::WebServer, "Signal handling", &err),
    }
}
