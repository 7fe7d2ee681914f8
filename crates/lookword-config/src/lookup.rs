use std::time::Duration;

use lookword_core::JoinPolicy;
use serde::{Deserialize, Serialize};

fn default_timeout_ms() -> u64 {
    10_000
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LookupConfig {
    /// Per-source bound for one lookup
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub join_policy: JoinPolicy,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            join_policy: JoinPolicy::default(),
        }
    }
}

impl LookupConfig {
    /// A zero bound would fail every lookup, so it falls back to the default
    pub fn timeout(&self) -> Duration {
        if self.timeout_ms == 0 {
            tracing::warn!("lookup.timeout_ms is 0, using {}ms", default_timeout_ms());
            return Duration::from_millis(default_timeout_ms());
        }
        Duration::from_millis(self.timeout_ms)
    }
}
