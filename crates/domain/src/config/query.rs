use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Knobs for one query/response exchange.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Per-receive deadline, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: f64,

    /// Total number of send attempts before giving up.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl QueryConfig {
    /// Saturates instead of panicking; `Config::validate` rejects values
    /// that do not fit a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout_secs).unwrap_or(Duration::MAX)
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            port: default_port(),
        }
    }
}

fn default_timeout_secs() -> f64 {
    5.0
}

fn default_max_retries() -> u32 {
    3
}

fn default_port() -> u16 {
    53
}
