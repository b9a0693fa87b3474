// File: rusty-forms-validation/src/custom.rs
// Purpose: `custom`, the escape hatch that forwards to a caller-supplied function

use crate::check::{required_arg, Check, CheckInput, CheckResult};
use async_trait::async_trait;
use rusty_forms_types::{Completer, Completion, ConfigError, TestArg};
use tracing::warn;

/// Runs the [`CustomFn`](rusty_forms_types::CustomFn) stored in `arg`.
///
/// The function receives a [`Completer`] and may complete right away or from
/// a task it spawns. A function that drops its completer without calling it
/// is reported as a failure rather than stalling the run.
#[derive(Debug, Default, Clone, Copy)]
pub struct Custom;

#[async_trait]
impl Check for Custom {
    async fn run(&self, input: CheckInput<'_>) -> CheckResult {
        let test = match required_arg(input.options, "custom")? {
            TestArg::Custom(test) => test.clone(),
            other => {
                return Err(ConfigError::InvalidArgument {
                    test: "custom",
                    arg: other.to_string(),
                })
            }
        };

        let (completer, pending) = Completer::channel();
        test(input.values, input.options, completer, input.form);

        match pending.wait().await {
            Some(done) => Ok(done),
            None => {
                warn!("custom test dropped its completer without reporting a result");
                Ok(Completion::fail("Test did not report a result."))
            }
        }
    }
}
