// src/message_log.rs

use crate::models::Turn;

/// Append-only, time-ordered history of the conversation. Turns are never
/// mutated or removed once added; ordering is strictly append order.
#[derive(Clone, Debug, Default)]
pub struct MessageLog {
    turns: Vec<Turn>,
}

impl MessageLog {
    pub fn new() -> Self {
        MessageLog::default()
    }

    /// Adds a turn at the end. Never fails, never reorders existing entries.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// The current ordered view. Callers must not mutate it.
    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }
}
