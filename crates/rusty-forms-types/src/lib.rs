//! Shared types for rusty-forms
//!
//! This crate holds the vocabulary that both the test library
//! (`rusty-forms-validation`) and the validation engine (`rusty-forms`) speak:
//!
//! - [`Outcome`] / [`Completion`] - the tri-state result a test reports
//! - [`FieldValue`] / [`FormValues`] - submitted values, single or multi-valued
//! - [`TestOptions`] / [`TestArg`] - the per-test configuration bag
//! - [`Triggers`] / [`Trigger`] - event names a test is eligible for
//! - [`Completer`] - the once-only completion handle for callback-style tests
//! - [`ConfigError`] - configuration mistakes that abort a run

pub mod completer;
pub mod error;
pub mod http;
pub mod number;
pub mod options;
pub mod outcome;
pub mod trigger;
pub mod value;

pub use completer::{Completer, Pending};
pub use error::ConfigError;
pub use http::HttpResponse;
pub use number::to_number;
pub use options::{Classifier, CustomFn, TestArg, TestOptions};
pub use outcome::{Completion, Outcome};
pub use trigger::{Trigger, Triggers, SUBMIT};
pub use value::{FieldValue, FormValues};
