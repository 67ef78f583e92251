use super::handlers;
use super::state::AppState;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    let public = state.public_dir.clone();

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Caption protocol transport
        .route("/ws", get(handlers::ws_handler))
        // Fixed display pages
        .route_service("/", ServeFile::new(public.join("index.html")))
        .route_service("/control", ServeFile::new(public.join("control.html")))
        .route_service("/captions", ServeFile::new(public.join("captions.html")))
        .route_service(
            "/interim-captions",
            ServeFile::new(public.join("interim-captions.html")),
        )
        // Remaining assets (stylesheets, scripts)
        .fallback_service(ServeDir::new(&public))
        // Browsers load the pages from arbitrary LAN origins
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
