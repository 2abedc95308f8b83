// src/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifies a turn. Ids are handed out sequentially per session, so they
/// order by creation time even when two turns share a timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TurnId(pub u64);

/// Author of a chat turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One entry in the conversation. Immutable once appended to the log.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Turn {
    pub id: TurnId,
    pub text: String,
    pub sender: Sender,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

impl Turn {
    pub fn new(id: TurnId, sender: Sender, text: impl Into<String>) -> Self {
        Turn {
            id,
            text: text.into(),
            sender,
            created_at: Utc::now(),
        }
    }
}

/// Logs details of each webhook exchange.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExchangeLog {
    pub timestamp: DateTime<Utc>,
    pub endpoint: String,
    pub request_summary: String,
    pub response_status: u16,
    pub response_time_ms: u128,
}
