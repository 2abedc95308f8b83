// src/errors.rs

use thiserror::Error;

pub type ChatResult<T> = Result<T, ChatError>;

/// Everything that can go wrong during a webhook exchange. Variants carry
/// plain strings so the error stays `Clone` and can live in a state snapshot.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("response contained no usable reply")]
    MissingReply,

    #[error("config error: {0}")]
    Config(String),
}

impl ChatError {
    pub fn transport(msg: impl Into<String>) -> Self {
        ChatError::Transport(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        ChatError::MalformedResponse(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        ChatError::Config(msg.into())
    }
}
