// File: rusty-forms-validation/src/check.rs
// Purpose: The contract every test implements

use async_trait::async_trait;
use rusty_forms_types::{Completion, ConfigError, FormValues, TestArg, TestOptions};

/// Everything a test gets to look at
#[derive(Debug, Clone, Copy)]
pub struct CheckInput<'a> {
    /// Values under test, already normalized to a sequence
    pub values: &'a [String],
    pub options: &'a TestOptions,
    /// Snapshot of every field, for tests that compare across fields
    pub form: &'a FormValues,
}

/// `Err` only for configuration mistakes; a value that does not satisfy the
/// test is an `Ok` completion with a failing outcome.
pub type CheckResult = Result<Completion, ConfigError>;

/// A named check the engine can run.
///
/// The engine awaits the returned future before starting any other test, so
/// an implementation may take as long as it needs (a timer, a round trip)
/// without tests ever running concurrently.
#[async_trait]
pub trait Check: Send + Sync {
    async fn run(&self, input: CheckInput<'_>) -> CheckResult;
}

/// Adapts a synchronous test function to [`Check`]
pub struct FnCheck<F>(pub F);

#[async_trait]
impl<F> Check for FnCheck<F>
where
    F: Fn(CheckInput<'_>) -> CheckResult + Send + Sync,
{
    async fn run(&self, input: CheckInput<'_>) -> CheckResult {
        (self.0)(input)
    }
}

/// Pass only if every value satisfies `ok`
pub(crate) fn every_value(values: &[String], message: String, ok: impl Fn(&str) -> bool) -> Completion {
    Completion::new(values.iter().all(|value| ok(value)), message)
}

pub(crate) fn required_arg<'a>(
    options: &'a TestOptions,
    test: &'static str,
) -> Result<&'a TestArg, ConfigError> {
    options.arg.as_ref().ok_or(ConfigError::MissingArgument { test })
}

/// `arg` as a number, for bound and count tests
pub(crate) fn number_arg(options: &TestOptions, test: &'static str) -> Result<f64, ConfigError> {
    let arg = required_arg(options, test)?;
    arg.as_number().ok_or_else(|| ConfigError::InvalidArgument {
        test,
        arg: arg.to_string(),
    })
}

/// Number of non-empty entries in a multi-value field
pub(crate) fn count_filled(values: &[String]) -> usize {
    values.iter().filter(|value| !value.is_empty()).count()
}
