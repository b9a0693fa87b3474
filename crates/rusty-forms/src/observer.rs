// File: src/observer.rs
// Purpose: Consumers of completed validation results

use crate::result::ValidationResult;
use rusty_forms_types::SUBMIT;
use tracing::{debug, info};

/// What an observer wants done after seeing a result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    Continue,
    /// Suppress the automatic submission that follows a `submit` run
    PreventDefault,
}

/// Receives each completed result exactly once
pub trait Observer: Send + Sync {
    fn on_validate(&self, result: &ValidationResult) -> Feedback;
}

/// Adapter for closure observers
pub(crate) struct FnObserver<F>(pub F);

impl<F> Observer for FnObserver<F>
where
    F: Fn(&ValidationResult) -> Feedback + Send + Sync,
{
    fn on_validate(&self, result: &ValidationResult) -> Feedback {
        (self.0)(result)
    }
}

/// Default observer: reports problems through `tracing`.
///
/// On a `submit` run with failures it prevents submission, so an invalid form
/// is never sent.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFeedback;

impl Observer for LogFeedback {
    fn on_validate(&self, result: &ValidationResult) -> Feedback {
        for entry in result.fields.iter().filter(|e| !e.outcome.is_pass()) {
            info!(
                field = %entry.name,
                test = %entry.test,
                outcome = %entry.outcome,
                "{}",
                entry.message
            );
        }

        if result.event_name == SUBMIT && !result.is_valid() {
            debug!(errors = result.error_count, "submission blocked");
            Feedback::PreventDefault
        } else {
            Feedback::Continue
        }
    }
}
