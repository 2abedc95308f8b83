// src/lib.rs

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod message_log;
pub mod models;
pub mod session;
pub mod transport;
