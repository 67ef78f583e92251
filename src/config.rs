use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub sessions: SessionsConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
    /// Directory holding the control panel and display pages
    pub public_dir: String,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct SessionsConfig {
    /// Directory where per-session caption logs are written
    pub path: String,
}

impl Config {
    /// Load configuration: built-in defaults, overlaid by an optional config
    /// file, overlaid by `CAPTION_RELAY__*` environment variables
    /// (e.g. `CAPTION_RELAY__SERVICE__HTTP__PORT=8080`).
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "caption-relay")?
            .set_default("service.http.bind", "0.0.0.0")?
            .set_default("service.http.port", 3000)?
            .set_default("service.public_dir", "public")?
            .set_default("sessions.path", "sessions")?
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("CAPTION_RELAY").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
