// src/logging.rs

use crate::models::ExchangeLog;
use log::info;

/// Emits one structured log line per webhook exchange.
pub fn log_exchange(entry: &ExchangeLog) {
    info!(
        "[{}] {} - {} - status: {} - time: {}ms",
        entry.timestamp.to_rfc3339(),
        entry.endpoint,
        entry.request_summary,
        entry.response_status,
        entry.response_time_ms
    );
}
