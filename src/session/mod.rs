//! Caption session management
//!
//! This module provides the `SessionManager` abstraction that manages:
//! - The single-session invariant (at most one open log at a time)
//! - Creation of one append-only log file per session
//! - Timestamped logging of finalized captions
//! - Footer/duration bookkeeping on session stop

mod manager;

pub use manager::SessionManager;
