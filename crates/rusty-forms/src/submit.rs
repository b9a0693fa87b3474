// File: src/submit.rs
// Purpose: Host hook that sends a form once a submit run passes

use async_trait::async_trait;
use rusty_forms_types::FormValues;

/// Sends the form when a `submit` run is not prevented by any observer
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, values: &FormValues) -> anyhow::Result<()>;
}
