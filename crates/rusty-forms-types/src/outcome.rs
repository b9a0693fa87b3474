// File: rusty-forms-types/src/outcome.rs
// Purpose: Tri-state test outcome and the completion a test reports

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a single test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
    /// The test did not apply (a conditional test whose condition was false)
    Skip,
}

impl Outcome {
    pub fn is_pass(self) -> bool {
        self == Outcome::Pass
    }

    pub fn is_fail(self) -> bool {
        self == Outcome::Fail
    }

    pub fn is_skip(self) -> bool {
        self == Outcome::Skip
    }
}

impl From<bool> for Outcome {
    fn from(passed: bool) -> Self {
        if passed {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pass => write!(f, "pass"),
            Outcome::Fail => write!(f, "fail"),
            Outcome::Skip => write!(f, "skip"),
        }
    }
}

/// What a test hands back when it finishes: an outcome plus a human-readable message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub outcome: Outcome,
    pub message: String,
}

impl Completion {
    pub fn new(outcome: impl Into<Outcome>, message: impl Into<String>) -> Self {
        Self {
            outcome: outcome.into(),
            message: message.into(),
        }
    }

    pub fn pass(message: impl Into<String>) -> Self {
        Self::new(Outcome::Pass, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::new(Outcome::Fail, message)
    }
}
