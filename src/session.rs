// src/session.rs

use crate::constants::{FALLBACK_REPLY, GREETING};
use crate::errors::ChatError;
use crate::message_log::MessageLog;
use crate::models::{Sender, Turn, TurnId};
use crate::transport::Transport;
use log::{debug, warn};
use std::sync::{Arc, Mutex};

/// Read-only view of the session handed to the rendering layer. Reflects the
/// state as of the last completed transition; the only mid-exchange change it
/// can observe is `pending` being true.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub log: Vec<Turn>,
    pub pending: bool,
    pub last_error: Option<ChatError>,
}

#[derive(Debug)]
struct SessionState {
    log: MessageLog,
    pending: bool,
    last_error: Option<ChatError>,
    next_id: u64,
}

impl SessionState {
    fn push_turn(&mut self, sender: Sender, text: impl Into<String>) {
        let id = TurnId(self.next_id);
        self.next_id += 1;
        self.log.append(Turn::new(id, sender, text));
    }
}

/// Drives the submit -> optimistic-append -> exchange -> resolve cycle for
/// the one ongoing conversation. Owns the message log and the pending flag;
/// nothing else mutates them.
pub struct ChatSession<T: Transport> {
    state: Arc<Mutex<SessionState>>,
    transport: Arc<T>,
}

impl<T: Transport> Clone for ChatSession<T> {
    fn clone(&self) -> Self {
        ChatSession {
            state: Arc::clone(&self.state),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> ChatSession<T> {
    /// Creates a session seeded with the bot greeting.
    pub fn new(transport: T) -> Self {
        let mut state = SessionState {
            log: MessageLog::new(),
            pending: false,
            last_error: None,
            next_id: 0,
        };
        state.push_turn(Sender::Bot, GREETING);

        ChatSession {
            state: Arc::new(Mutex::new(state)),
            transport: Arc::new(transport),
        }
    }

    /// Relays one user message to the webhook. Fire-and-forget from the
    /// caller's perspective: progress and outcome are observed through
    /// `snapshot`, never a return value. Blank text and calls made while an
    /// exchange is already in flight are ignored.
    pub async fn submit(&self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            debug!("ignoring blank submission");
            return;
        }

        {
            let mut state = self.state.lock().unwrap();
            if state.pending {
                debug!("ignoring submission while an exchange is in flight");
                return;
            }
            state.last_error = None;
            state.push_turn(Sender::User, text);
            state.pending = true;
        }

        // The lock is not held across the network call, so snapshots stay
        // available while the exchange is in flight.
        let outcome = self.transport.exchange(text).await;

        let mut state = self.state.lock().unwrap();
        match outcome {
            Ok(reply) => {
                state.push_turn(Sender::Bot, reply);
            }
            Err(err) => {
                warn!("exchange failed: {err}");
                state.push_turn(Sender::Bot, FALLBACK_REPLY);
                state.last_error = Some(err);
            }
        }
        // The single cleanup step on every exit path.
        state.pending = false;
    }

    pub fn snapshot(&self) -> Snapshot {
        let state = self.state.lock().unwrap();
        Snapshot {
            log: state.log.all().to_vec(),
            pending: state.pending,
            last_error: state.last_error.clone(),
        }
    }
}
