// File: src/config.rs
// Purpose: Form-level settings and their defaults

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings shared by every field of a form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Idle debounce window for tests that set no `delay` of their own
    #[serde(default = "default_idle_delay_ms")]
    pub idle_delay_ms: u64,

    /// What `validate` does while another run is in flight
    #[serde(default)]
    pub on_busy: BusyPolicy,
}

/// Handling of a validation request that arrives mid-run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusyPolicy {
    /// Wait for the in-flight run to finish, then run
    #[default]
    Queue,
    /// Fail fast with `FormError::RunInProgress`
    Reject,
}

fn default_idle_delay_ms() -> u64 {
    1000
}

impl FormConfig {
    pub fn idle_delay(&self) -> Duration {
        Duration::from_millis(self.idle_delay_ms)
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            idle_delay_ms: default_idle_delay_ms(),
            on_busy: BusyPolicy::default(),
        }
    }
}
