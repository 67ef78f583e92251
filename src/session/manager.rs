use crate::relay::CaptionEvent;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{error, info};

const SEPARATOR: &str = "=====================================";

/// The currently open session log
struct ActiveSession {
    path: PathBuf,
    filename: String,
    started_at: DateTime<Local>,
}

/// Manages the caption session lifecycle and its append-only log file.
///
/// At most one session is open at a time; the `Option` behind the mutex is
/// the whole of the session state, so check-then-act on start/stop is atomic.
pub struct SessionManager {
    sessions_dir: PathBuf,
    active: Mutex<Option<ActiveSession>>,
}

impl SessionManager {
    pub fn new(sessions_dir: impl Into<PathBuf>) -> Self {
        Self {
            sessions_dir: sessions_dir.into(),
            active: Mutex::new(None),
        }
    }

    /// Start a new session, creating its log file with a header.
    ///
    /// If a session is already open this returns the existing filename
    /// without touching the filesystem. Propagates an error only when the
    /// log file cannot be created.
    pub async fn start(&self) -> Result<String> {
        let mut active = self.active.lock().await;

        if let Some(session) = active.as_ref() {
            info!("Session already active: {}", session.filename);
            return Ok(session.filename.clone());
        }

        let started_at = Local::now();
        let filename = format!(
            "caption-session-{}.txt",
            started_at.format("%Y-%m-%d-%H-%M-%S")
        );
        let path = self.sessions_dir.join(&filename);

        fs::create_dir_all(&self.sessions_dir)
            .await
            .with_context(|| {
                format!(
                    "Failed to create sessions directory {}",
                    self.sessions_dir.display()
                )
            })?;

        let header = format!(
            "Live Captions Session Log\nStarted: {}\n{}\n\n",
            started_at.format("%Y-%m-%d %H:%M:%S"),
            SEPARATOR
        );
        fs::write(&path, header)
            .await
            .with_context(|| format!("Failed to create session file {}", path.display()))?;

        info!("Session started: {}", filename);

        *active = Some(ActiveSession {
            path,
            filename: filename.clone(),
            started_at,
        });

        Ok(filename)
    }

    /// Stop the open session, appending a footer with the end time and
    /// duration. No-op when no session is open; footer write failures are
    /// logged and swallowed.
    pub async fn stop(&self) {
        let mut active = self.active.lock().await;

        let Some(session) = active.take() else {
            info!("No active session");
            return;
        };

        let ended_at = Local::now();
        let secs = (ended_at - session.started_at).num_seconds().max(0);
        let footer = format!(
            "\n{}\nSession ended: {}\nDuration: {}m {}s\n",
            SEPARATOR,
            ended_at.format("%Y-%m-%d %H:%M:%S"),
            secs / 60,
            secs % 60
        );

        if let Err(e) = append(&session.path, &footer).await {
            error!("Failed to write session footer: {}", e);
        }

        info!("Session ended: {}", session.filename);
    }

    /// Append one timestamped line for a finalized caption. No-op unless a
    /// session is open and the event is final; append failures are logged
    /// and swallowed so the relay keeps running.
    pub async fn log_final(&self, event: &CaptionEvent) {
        if !event.is_final {
            return;
        }

        let active = self.active.lock().await;

        let Some(session) = active.as_ref() else {
            return;
        };

        let time = event.timestamp.with_timezone(&Local).format("%H:%M:%S");
        let line = format!("[{}] {}\n", time, event.text);

        if let Err(e) = append(&session.path, &line).await {
            error!("Failed to log caption: {}", e);
        }
    }

    pub async fn is_active(&self) -> bool {
        self.active.lock().await.is_some()
    }

    /// Filename of the open session log, if any
    pub async fn current_filename(&self) -> Option<String> {
        self.active
            .lock()
            .await
            .as_ref()
            .map(|s| s.filename.clone())
    }
}

async fn append(path: &Path, text: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().append(true).open(path).await?;
    file.write_all(text.as_bytes()).await?;
    file.flush().await
}
