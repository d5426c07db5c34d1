//! libSQL store configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    String::from("colab.db")
}

/// Default wait for a competing writer before giving up, in milliseconds.
const fn default_busy_timeout_ms() -> u64 {
    5_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database file path, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,

    /// How long a transaction waits for the write lock held by another
    /// connection.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub const fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    /// Whether the store lives only for the lifetime of the process.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}
