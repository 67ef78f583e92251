//! HTTP server for browser clients (control panel and display views)
//!
//! This module provides the transport surface:
//! - GET /ws - WebSocket endpoint carrying the caption protocol
//! - GET /, /control, /captions, /interim-captions - fixed display pages
//! - GET /health - Health check
//! - Everything else falls back to static files from the public directory

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
