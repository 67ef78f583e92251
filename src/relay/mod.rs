//! Caption broadcast relay
//!
//! This module provides the fan-out path between clients:
//! - Wire message types for the WebSocket protocol
//! - `CaptionRelay`, an explicit broadcast hub that forwards every event
//!   to all subscribed clients (the sender included)
//!
//! The relay holds no caption state: displays render what arrives, and a
//! clear request is just another broadcast.

mod events;
mod relay;

pub use events::{CaptionEvent, ClientMessage, ServerMessage};
pub use relay::CaptionRelay;
