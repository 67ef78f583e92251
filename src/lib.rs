pub mod config;
pub mod http;
pub mod relay;
pub mod session;

pub use config::Config;
pub use http::{create_router, AppState};
pub use relay::{CaptionEvent, CaptionRelay, ClientMessage, ServerMessage};
pub use session::SessionManager;
