pub mod check;

use rusty_forms::{CheckRegistry, ReqwestTransport, TimeoutTransport};
use std::time::Duration;

/// Built-in tests plus `ajax` over HTTP
pub fn registry(timeout: Duration) -> CheckRegistry {
    CheckRegistry::builtin().with_transport(TimeoutTransport::new(ReqwestTransport::new(), timeout))
}
