use super::state::AppState;
use crate::relay::{ClientMessage, ServerMessage};
use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// GET /ws
/// Upgrade to the caption protocol
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Drive one client connection: relay broadcasts out, client messages in.
///
/// Replies to session requests go to this client only; relayed caption
/// events reach every client. Both funnel through one outbound queue so the
/// socket sink has a single writer.
async fn handle_socket(socket: WebSocket, state: AppState) {
    info!("Client connected ({} already subscribed)", state.relay.client_count());

    let (mut sink, mut stream) = socket.split();
    let (out_tx, mut out_rx) = mpsc::channel::<ServerMessage>(64);

    // Relay subscription -> outbound queue
    let mut relay_rx = state.relay.subscribe();
    let relay_out = out_tx.clone();
    let mut forward_task = tokio::spawn(async move {
        loop {
            match relay_rx.recv().await {
                Ok(msg) => {
                    if relay_out.send(msg).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("Client fell behind, skipped {} messages", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    // Outbound queue -> socket
    let mut write_task = tokio::spawn(async move {
        while let Some(msg) = out_rx.recv().await {
            let text = match serde_json::to_string(&msg) {
                Ok(text) => text,
                Err(e) => {
                    error!("Failed to serialize server message: {}", e);
                    continue;
                }
            };
            if sink.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    });

    // Socket -> dispatch
    let read_state = state.clone();
    let mut read_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = stream.next().await {
            match msg {
                Message::Text(text) => dispatch(&read_state, &out_tx, &text).await,
                Message::Close(_) => break,
                // Binary and ping/pong frames carry nothing for us
                _ => {}
            }
        }
    });

    // Whichever half finishes first tears down the rest
    tokio::select! {
        _ = &mut read_task => {
            forward_task.abort();
            write_task.abort();
        }
        _ = &mut write_task => {
            read_task.abort();
            forward_task.abort();
        }
        _ = &mut forward_task => {
            read_task.abort();
            write_task.abort();
        }
    }

    info!("Client disconnected ({} still subscribed)", state.relay.client_count());
}

/// Handle one parsed client message
async fn dispatch(state: &AppState, reply_tx: &mpsc::Sender<ServerMessage>, text: &str) {
    let msg: ClientMessage = match serde_json::from_str(text) {
        Ok(msg) => msg,
        Err(e) => {
            warn!("Dropping unparseable client message: {}", e);
            return;
        }
    };

    match msg {
        ClientMessage::StartSession => {
            let reply = match state.sessions.start().await {
                Ok(filename) => ServerMessage::SessionStarted {
                    success: true,
                    filename: Some(filename),
                    error: None,
                },
                Err(e) => {
                    error!("Failed to start session: {:#}", e);
                    ServerMessage::SessionStarted {
                        success: false,
                        filename: None,
                        error: Some(e.to_string()),
                    }
                }
            };
            let _ = reply_tx.send(reply).await;
        }
        ClientMessage::StopSession => {
            state.sessions.stop().await;
            let _ = reply_tx
                .send(ServerMessage::SessionStopped { success: true })
                .await;
        }
        ClientMessage::SpeechData(event) => {
            debug!("Speech data received: {:?}", event);
            if event.is_final {
                state.sessions.log_final(&event).await;
            }
            state.relay.broadcast(ServerMessage::CaptionUpdate(event));
        }
        ClientMessage::ClearCaptions => {
            info!("Clearing captions");
            state.relay.broadcast(ServerMessage::CaptionsCleared);
        }
    }
}
