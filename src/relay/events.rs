use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single speech-recognition result from the control panel.
///
/// Interim results are revised as the recognizer refines them; final results
/// are complete and eligible for session logging. The wire format keeps the
/// browser's field names: `isFinal`, and `timestamp` as epoch milliseconds
/// (what `Date.now()` produces).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionEvent {
    pub text: String,

    #[serde(rename = "isFinal")]
    pub is_final: bool,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

/// Messages received from browser clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    #[serde(rename = "start-session")]
    StartSession,

    #[serde(rename = "stop-session")]
    StopSession,

    #[serde(rename = "speech-data")]
    SpeechData(CaptionEvent),

    #[serde(rename = "clear-captions")]
    ClearCaptions,
}

/// Messages sent to browser clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// Reply to `start-session`, sent to the requesting client only
    #[serde(rename = "session-started")]
    SessionStarted {
        success: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        filename: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },

    /// Reply to `stop-session`, sent to the requesting client only
    #[serde(rename = "session-stopped")]
    SessionStopped { success: bool },

    /// A caption event relayed to every connected client
    #[serde(rename = "caption-update")]
    CaptionUpdate(CaptionEvent),

    /// Tells every display to drop what it is showing
    #[serde(rename = "captions-cleared")]
    CaptionsCleared,
}
