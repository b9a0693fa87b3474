//! Rusty-Forms-Validation
//!
//! The test library: named checks the validation engine runs against a
//! field's current values.
//!
//! Every test follows one contract, [`Check`]: it receives the values under
//! test (always a sequence), the test's options and a snapshot of the whole
//! form, and resolves to a [`Completion`](rusty_forms_types::Completion).
//! Tests never see or touch the engine's cursor state.
//!
//! Most built-ins are plain synchronous functions wrapped in [`FnCheck`].
//! `custom` and `ajax` complete asynchronously.
//!
//! ```rust,ignore
//! use rusty_forms_validation::CheckRegistry;
//!
//! let registry = CheckRegistry::builtin()
//!     .with_transport(my_transport)          // enables `ajax`
//!     .with_fn("isEven", |input| { ... });  // extends the set
//! ```

pub mod check;
pub mod collection;
pub mod custom;
pub mod email;
pub mod numeric;
pub mod registry;
pub mod remote;
pub mod string;

pub use check::{Check, CheckInput, CheckResult, FnCheck};
pub use custom::Custom;
pub use email::is_valid_email;
pub use registry::CheckRegistry;
pub use remote::{interpolate, Ajax, HttpTransport, TimeoutTransport, TransportError};

#[cfg(feature = "http")]
pub use remote::ReqwestTransport;
