//! WebSocket connection handler
//!
//! A connection starts with a welcome frame holding the whole roster and the
//! sequence ID it reflects, then streams every later event in order.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use serde::Serialize;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

use super::events::{ClientMessage, LaggedMessage, PongMessage, WelcomeMessage, WsMessage};
use crate::api::rest::ApiError;
use crate::api::state::AppState;
use crate::types::Hero;

/// What to do with one result from the event subscription
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FeedStep {
    Send(String),
    /// Already reflected in the welcome snapshot
    Skip,
    Close,
}

/// What to do with one frame from the client
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ClientStep {
    Reply(Message),
    Ignore,
    Close,
}

/// WebSocket upgrade handler
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Snapshot the roster together with the sequence ID it reflects.
///
/// Events are published while the store is held, so no event can slip in
/// between reading the heroes and reading the counter.
pub(crate) async fn welcome(state: &AppState) -> Result<WelcomeMessage, ApiError> {
    let feed = Arc::clone(&state.feed);
    state
        .with_roster(move |roster| {
            roster.observe(|heroes| {
                WelcomeMessage::new(
                    feed.current_sequence_id(),
                    heroes.values().map(Hero::snapshot).collect(),
                )
            })
        })
        .await
}

async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    // Subscribe first so nothing published after the snapshot is missed
    let mut rx = state.subscribe();

    let welcome = match welcome(&state).await {
        Ok(welcome) => welcome,
        Err(e) => {
            warn!(code = %e.code, "could not snapshot roster for feed client");
            let _ = socket.send(Message::Close(None)).await;
            return;
        }
    };
    let since = welcome.sequence_id;
    let Some(frame) = to_frame(&welcome) else {
        return;
    };
    if socket.send(Message::Text(frame)).await.is_err() {
        return;
    }
    debug!(sequence_id = since, "roster feed client connected");

    loop {
        tokio::select! {
            result = rx.recv() => {
                match feed_step(result, since) {
                    FeedStep::Send(frame) => {
                        if socket.send(Message::Text(frame)).await.is_err() {
                            break;
                        }
                    }
                    FeedStep::Skip => {}
                    FeedStep::Close => break,
                }
            }

            result = socket.recv() => {
                let Some(Ok(msg)) = result else { break };
                match client_step(msg) {
                    ClientStep::Reply(reply) => {
                        if socket.send(reply).await.is_err() {
                            break;
                        }
                    }
                    ClientStep::Ignore => {}
                    ClientStep::Close => break,
                }
            }
        }
    }

    debug!("roster feed client disconnected");
}

fn to_frame<T: Serialize>(value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(json) => Some(json),
        Err(e) => {
            warn!(error = %e, "could not encode feed frame");
            None
        }
    }
}

/// Turn a subscription result into the frame owed to a client whose
/// snapshot reflects everything up to `since`
pub(crate) fn feed_step(result: Result<WsMessage, RecvError>, since: u64) -> FeedStep {
    match result {
        Ok(msg) if msg.sequence_id <= since => FeedStep::Skip,
        Ok(msg) => to_frame(&msg).map_or(FeedStep::Skip, FeedStep::Send),
        Err(RecvError::Lagged(missed)) => {
            debug!(missed, "roster feed client lagged");
            to_frame(&LaggedMessage::new(missed)).map_or(FeedStep::Skip, FeedStep::Send)
        }
        Err(RecvError::Closed) => FeedStep::Close,
    }
}

pub(crate) fn client_step(msg: Message) -> ClientStep {
    match msg {
        Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
            Ok(ClientMessage::Ping) => to_frame(&PongMessage::default())
                .map_or(ClientStep::Ignore, |json| ClientStep::Reply(Message::Text(json))),
            Err(_) => ClientStep::Ignore,
        },
        Message::Ping(data) => ClientStep::Reply(Message::Pong(data)),
        Message::Binary(_) | Message::Pong(_) => ClientStep::Ignore,
        Message::Close(_) => ClientStep::Close,
    }
}
