use std::env;
use std::time::Duration;

use lifescan_predict::client::DEFAULT_TIMEOUT;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_PREDICTION_URL: &str = "http://127.0.0.1:5000";

/// Server settings, read once from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// `LIFESCAN_BIND_ADDR`
    pub bind_addr: String,
    /// `LIFESCAN_PREDICTION_URL`
    pub prediction_url: String,
    /// `LIFESCAN_PREDICTION_TIMEOUT_SECS`
    pub prediction_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            prediction_url: DEFAULT_PREDICTION_URL.to_string(),
            prediction_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let defaults = Self::default();

        let prediction_timeout = match lookup("LIFESCAN_PREDICTION_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e| {
                    eyre::eyre!("invalid LIFESCAN_PREDICTION_TIMEOUT_SECS '{raw}': {e}")
                })?;
                if secs == 0 {
                    eyre::bail!("LIFESCAN_PREDICTION_TIMEOUT_SECS must be at least 1");
                }
                Duration::from_secs(secs)
            }
            None => defaults.prediction_timeout,
        };

        Ok(Self {
            bind_addr: lookup("LIFESCAN_BIND_ADDR").unwrap_or(defaults.bind_addr),
            prediction_url: lookup("LIFESCAN_PREDICTION_URL").unwrap_or(defaults.prediction_url),
            prediction_timeout,
        })
    }
}
