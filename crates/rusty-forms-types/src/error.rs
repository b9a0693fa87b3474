// File: rusty-forms-types/src/error.rs
// Purpose: Configuration errors raised by tests

use thiserror::Error;

/// A mistake in how a form was configured.
///
/// These are programming errors, not invalid user input: they abort the
/// validation run that hit them instead of being recorded as a failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unimplemented test: no test exists of type '{0}'")]
    UnknownTest(String),

    #[error("range test requires a parameter like 0..10, got '{0}'")]
    MalformedRange(String),

    #[error("test '{test}' requires an `arg` option")]
    MissingArgument { test: &'static str },

    #[error("test '{test}' cannot use argument '{arg}'")]
    InvalidArgument { test: &'static str, arg: String },

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("test '{test}' requires a `url` option")]
    MissingUrl { test: &'static str },
}
