use anyhow::Result;
use caption_relay::{create_router, AppState, CaptionRelay, Config, SessionManager};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "caption-relay", about = "Live captions relay server")]
struct Cli {
    /// Path to the config file (extension optional)
    #[arg(long, default_value = "config/caption-relay")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    let sessions = Arc::new(SessionManager::new(&cfg.sessions.path));
    let relay = Arc::new(CaptionRelay::default());
    let state = AppState::new(sessions, relay, &cfg.service.public_dir);

    let app = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Listening on http://{}", addr);
    info!("Control panel: http://{}/control", addr);
    info!("Captions display: http://{}/captions", addr);
    info!("Interim captions: http://{}/interim-captions", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
