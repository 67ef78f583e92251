// Integration tests for the HTTP surface (fixed pages + health check)
//
// The WebSocket endpoint itself is covered through the relay and session
// tests; here we pin the route wiring.

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use caption_relay::{create_router, AppState, CaptionRelay, SessionManager};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

const PAGES: [&str; 4] = [
    "index.html",
    "control.html",
    "captions.html",
    "interim-captions.html",
];

fn test_state(temp_dir: &TempDir) -> Result<AppState> {
    let public_dir = temp_dir.path().join("public");
    fs::create_dir_all(&public_dir)?;
    for page in PAGES {
        fs::write(public_dir.join(page), format!("<html>{}</html>", page))?;
    }

    let sessions = Arc::new(SessionManager::new(temp_dir.path().join("sessions")));
    let relay = Arc::new(CaptionRelay::default());
    Ok(AppState::new(sessions, relay, public_dir))
}

async fn get(state: AppState, uri: &str) -> Result<axum::response::Response> {
    let response = create_router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;
    Ok(response)
}

#[tokio::test]
async fn health_check_returns_ok() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let state = test_state(&temp_dir)?;

    let response = get(state, "/health").await?;

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn fixed_routes_serve_their_pages() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let state = test_state(&temp_dir)?;

    for uri in ["/", "/control", "/captions", "/interim-captions"] {
        let response = get(state.clone(), uri).await?;
        assert_eq!(response.status(), StatusCode::OK, "GET {}", uri);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/html"), "GET {}", uri);
    }

    Ok(())
}

#[tokio::test]
async fn unknown_path_is_not_found() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let state = test_state(&temp_dir)?;

    let response = get(state, "/no-such-page").await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn websocket_route_rejects_plain_get() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let state = test_state(&temp_dir)?;

    // No upgrade headers: the handshake must be refused, not crash
    let response = get(state, "/ws").await?;

    assert_ne!(response.status(), StatusCode::OK);

    Ok(())
}
