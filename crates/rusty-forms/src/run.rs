// File: src/run.rs
// Purpose: Cursor state for a single validation run

use crate::result::{FieldOutcome, ValidationResult};
use crate::spec::{FieldSpec, TestSpec};
use rusty_forms_types::Completion;

/// Transient state of one `validate` call.
///
/// Walks fields in registration order and each field's tests in registration
/// order, handing out one eligible test at a time. The driver must
/// [`record`](Self::record) a test's completion before asking for the next.
#[derive(Debug)]
pub struct ValidationRun {
    event_name: String,
    field_filter: Option<String>,
    field: usize,
    test: usize,
    entries: Vec<FieldOutcome>,
    error_count: usize,
}

impl ValidationRun {
    pub fn new(event_name: impl Into<String>, field_filter: Option<&str>) -> Self {
        Self {
            event_name: event_name.into(),
            field_filter: field_filter.map(str::to_string),
            field: 0,
            test: 0,
            entries: Vec::new(),
            error_count: 0,
        }
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn field_filter(&self) -> Option<&str> {
        self.field_filter.as_deref()
    }

    /// Whether a test takes part in this run: its `on` set names the event
    /// and, when the run is scoped, it belongs to the scoped field
    pub fn in_scope(&self, spec: &TestSpec) -> bool {
        spec.runs_on(&self.event_name)
            && self
                .field_filter
                .as_deref()
                .map_or(true, |only| only == spec.field_name)
    }

    /// Advance to the next test to execute, or `None` when the walk is over
    pub fn next_test<'a>(&mut self, fields: &'a [FieldSpec]) -> Option<&'a TestSpec> {
        while let Some(field) = fields.get(self.field) {
            match field.tests.get(self.test) {
                Some(spec) => {
                    self.test += 1;
                    if self.in_scope(spec) {
                        return Some(spec);
                    }
                }
                None => self.next_field(),
            }
        }
        None
    }

    /// Record the completion of the test last returned by `next_test`.
    ///
    /// Anything other than a pass abandons the rest of the current field.
    pub fn record(&mut self, spec: &TestSpec, completion: Completion) {
        let outcome = spec.interpret(completion.outcome);

        self.entries.push(FieldOutcome {
            name: spec.field_name.clone(),
            test: spec.test_type.clone(),
            outcome,
            message: completion.message,
        });

        if !outcome.is_pass() {
            if outcome.is_fail() {
                self.error_count += 1;
            }
            self.next_field();
        }
    }

    pub fn finish(self) -> ValidationResult {
        ValidationResult {
            event_name: self.event_name,
            error_count: self.error_count,
            fields: self.entries,
        }
    }

    fn next_field(&mut self) {
        self.field += 1;
        self.test = 0;
    }
}
