use crate::relay::CaptionRelay;
use crate::session::SessionManager;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Session lifecycle and log-file bookkeeping
    pub sessions: Arc<SessionManager>,

    /// Fan-out hub reaching every connected client
    pub relay: Arc<CaptionRelay>,

    /// Directory holding the control panel and display pages
    pub public_dir: PathBuf,
}

impl AppState {
    pub fn new(
        sessions: Arc<SessionManager>,
        relay: Arc<CaptionRelay>,
        public_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            sessions,
            relay,
            public_dir: public_dir.into(),
        }
    }
}
