// File: src/spec.rs
// Purpose: Registered fields and their tests

use crate::config::FormConfig;
use rusty_forms_types::{Outcome, TestOptions, Trigger, Triggers};
use std::time::Duration;

/// A test as written by the caller: which test to run and its options
#[derive(Debug, Clone)]
pub struct Test {
    pub test_type: String,
    pub options: TestOptions,
}

impl Test {
    pub fn new(test_type: impl Into<String>) -> Self {
        Self::with(test_type, TestOptions::default())
    }

    pub fn with(test_type: impl Into<String>, options: TestOptions) -> Self {
        Self {
            test_type: test_type.into(),
            options,
        }
    }
}

impl From<&str> for Test {
    fn from(test_type: &str) -> Self {
        Test::new(test_type)
    }
}

impl<S: Into<String>> From<(S, TestOptions)> for Test {
    fn from((test_type, options): (S, TestOptions)) -> Self {
        Test::with(test_type, options)
    }
}

/// A registered test, with its options resolved against form defaults.
///
/// Read-only once the form is built.
#[derive(Debug, Clone)]
pub struct TestSpec {
    /// The field this test belongs to (and reports under)
    pub field_name: String,
    pub test_type: String,
    pub options: TestOptions,
    triggers: Triggers,
    idle_delay: Duration,
}

impl TestSpec {
    pub fn resolve(field_name: impl Into<String>, test: Test, config: &FormConfig) -> Self {
        let triggers = Triggers::parse(test.options.on.as_deref());
        let idle_delay = test
            .options
            .delay
            .map(Duration::from_millis)
            .unwrap_or_else(|| config.idle_delay());

        Self {
            field_name: field_name.into(),
            test_type: test.test_type,
            options: test.options,
            triggers,
            idle_delay,
        }
    }

    /// Conditional tests read another field and turn a failure into a skip
    pub fn is_conditional(&self) -> bool {
        self.options.field.is_some()
    }

    /// The field whose value this test reads
    pub fn value_field(&self) -> &str {
        self.options.field.as_deref().unwrap_or(&self.field_name)
    }

    pub fn runs_on(&self, event: &str) -> bool {
        self.triggers.contains(event)
    }

    pub fn field_triggers(&self) -> impl Iterator<Item = Trigger> + '_ {
        self.triggers.field_level()
    }

    pub fn idle_delay(&self) -> Duration {
        self.idle_delay
    }

    /// Reinterpret a reported outcome for this test
    pub fn interpret(&self, outcome: Outcome) -> Outcome {
        if self.is_conditional() && outcome == Outcome::Fail {
            Outcome::Skip
        } else {
            outcome
        }
    }
}

/// A registered field: its name and tests in registration order
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub tests: Vec<TestSpec>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, tests: Vec<TestSpec>) -> Self {
        Self {
            name: name.into(),
            tests,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolved_once() {
        let config = FormConfig {
            idle_delay_ms: 250,
            ..FormConfig::default()
        };
        let spec = TestSpec::resolve("username", Test::new("required"), &config);

        assert!(spec.runs_on("submit"));
        assert!(!spec.runs_on("idle"));
        assert_eq!(spec.idle_delay(), Duration::from_millis(250));
        assert_eq!(spec.value_field(), "username");
    }

    #[test]
    fn test_explicit_delay_wins() {
        let test = Test::with("minLen", TestOptions::new().arg(3).on("idle").delay(400));
        let spec = TestSpec::resolve("username", test, &FormConfig::default());
        assert_eq!(spec.idle_delay(), Duration::from_millis(400));
        assert_eq!(spec.field_triggers().collect::<Vec<_>>(), vec![Trigger::Idle]);
    }

    #[test]
    fn test_conditional_reads_other_field_and_skips() {
        let test = Test::with("is", TestOptions::new().field("reason").arg("otherReason"));
        let spec = TestSpec::resolve("other", test, &FormConfig::default());

        assert!(spec.is_conditional());
        assert_eq!(spec.value_field(), "reason");
        assert_eq!(spec.interpret(Outcome::Fail), Outcome::Skip);
        assert_eq!(spec.interpret(Outcome::Pass), Outcome::Pass);
    }

    #[test]
    fn test_unconditional_failure_stays_failure() {
        let spec = TestSpec::resolve("age", Test::new("required"), &FormConfig::default());
        assert_eq!(spec.interpret(Outcome::Fail), Outcome::Fail);
    }
}
