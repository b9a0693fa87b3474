// File: src/result.rs
// Purpose: The aggregated outcome of one validation run

use rusty_forms_types::Outcome;
use serde::Serialize;

/// One executed test's outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOutcome {
    /// Field the test is registered on
    pub name: String,
    /// Test type that produced this entry
    pub test: String,
    pub outcome: Outcome,
    pub message: String,
}

/// Snapshot handed to observers and to the caller once a run completes.
///
/// Holds one entry per test that actually executed, in execution order.
/// Fields with no failing entry are clean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub event_name: String,
    /// Number of FAIL entries; skips are not counted
    pub error_count: usize,
    pub fields: Vec<FieldOutcome>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.error_count == 0
    }

    /// Entries recorded for one field
    pub fn entries_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a FieldOutcome> + 'a {
        self.fields.iter().filter(move |entry| entry.name == name)
    }

    pub fn failures(&self) -> impl Iterator<Item = &FieldOutcome> {
        self.fields.iter().filter(|entry| entry.outcome.is_fail())
    }

    /// First failure message for a field, if it failed
    pub fn error_for(&self, name: &str) -> Option<&str> {
        self.failures()
            .find(|entry| entry.name == name)
            .map(|entry| entry.message.as_str())
    }

    /// True when no entry for the field failed
    pub fn is_clean(&self, name: &str) -> bool {
        self.error_for(name).is_none()
    }
}
