use crate::constants::WEBHOOK_URL;
use crate::errors::{ChatError, ChatResult};
use serde::{Deserialize, Serialize};
use std::env;

/// Process-wide configuration. The webhook address is the only knob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub webhook_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webhook_url: WEBHOOK_URL.to_string(),
        }
    }
}

impl Config {
    /// Builds the config, honoring the `WEBHOOK_URL` environment variable
    /// when set.
    pub fn from_env() -> ChatResult<Self> {
        let mut config = Config::default();
        if let Ok(url) = env::var("WEBHOOK_URL") {
            config.webhook_url = url;
        }
        validate_config(&config)?;
        Ok(config)
    }
}

fn validate_config(config: &Config) -> ChatResult<()> {
    if config.webhook_url.is_empty() {
        return Err(ChatError::config("webhook URL is required"));
    }

    if !config.webhook_url.starts_with("http://") && !config.webhook_url.starts_with("https://") {
        return Err(ChatError::config("webhook URL must be http or https"));
    }

    Ok(())
}
