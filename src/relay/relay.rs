use super::events::ServerMessage;
use tokio::sync::broadcast;

/// Default capacity of the broadcast channel. A lagging client skips
/// messages rather than stalling the relay.
const DEFAULT_CAPACITY: usize = 64;

/// Explicit fan-out hub for caption events.
///
/// Each connected WebSocket client subscribes once and forwards received
/// messages into its own socket. Broadcasting reaches every current
/// subscriber, including whichever client originated the event, so the
/// relay is testable without a live transport.
#[derive(Debug)]
pub struct CaptionRelay {
    tx: broadcast::Sender<ServerMessage>,
}

impl CaptionRelay {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Register a new client; the returned receiver yields every message
    /// broadcast after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<ServerMessage> {
        self.tx.subscribe()
    }

    /// Send a message to all current subscribers. Returns the number of
    /// subscribers reached; zero subscribers is not an error.
    pub fn broadcast(&self, msg: ServerMessage) -> usize {
        self.tx.send(msg).unwrap_or(0)
    }

    /// Number of currently subscribed clients
    pub fn client_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for CaptionRelay {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
