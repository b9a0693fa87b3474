//! # rusty-forms
//!
//! Field-by-field form validation. Fields are registered with an ordered list
//! of named tests; a validation run walks them in registration order, one
//! test at a time, and produces a single aggregated [`ValidationResult`].
//!
//! - Tests may complete late (a timer, a network round trip); the run waits
//!   for each before starting the next.
//! - Each test opts into the events it runs on (`on`, default `submit`), and a
//!   run can be scoped to a single field.
//! - A test with `field` set is conditional: it reads that field's value and
//!   reports a failure as a skip.
//! - The first non-passing test of a field halts that field's remaining tests.
//!
//! ```rust,ignore
//! use rusty_forms::{FormBuilder, FormValues, Test, TestOptions};
//!
//! let values = FormValues::new().with("age", "200");
//! let form = FormBuilder::new(values)
//!     .add_tests("age", [
//!         Test::new("required"),
//!         Test::new("isNumber"),
//!         Test::with("range", TestOptions::new().arg("18..118")),
//!     ])
//!     .build();
//!
//! let result = form.submit().await?;
//! assert_eq!(result.error_count, 1);
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod observer;
pub mod result;
pub mod run;
pub mod schema;
pub mod source;
pub mod spec;
pub mod submit;
pub mod wiring;

pub use config::{BusyPolicy, FormConfig};
pub use error::{FormError, Result};
pub use form::{Form, FormBuilder, WeakForm};
pub use observer::{Feedback, LogFeedback, Observer};
pub use result::{FieldOutcome, ValidationResult};
pub use run::ValidationRun;
pub use schema::{FieldSchema, FormSchema, TestSchema};
pub use source::{SharedValues, ValueSource};
pub use spec::{FieldSpec, Test, TestSpec};
pub use submit::Submitter;
pub use wiring::{EventWiring, FieldListener, IdleDebouncer, ListenerRegistry};

// Vocabulary and test library, so most callers need only this crate
pub use rusty_forms_types::{
    Completer, Completion, ConfigError, FieldValue, FormValues, HttpResponse, Outcome, TestArg,
    TestOptions, Trigger, SUBMIT,
};
pub use rusty_forms_validation::{
    Check, CheckInput, CheckRegistry, CheckResult, FnCheck, HttpTransport, TimeoutTransport,
    TransportError,
};

#[cfg(feature = "http")]
pub use rusty_forms_validation::ReqwestTransport;
