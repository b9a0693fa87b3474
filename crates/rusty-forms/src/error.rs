// File: src/error.rs
// Purpose: Errors surfaced by the validation engine

use rusty_forms_types::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Why a validation request did not produce a result.
///
/// A field failing its tests is not an error; it is recorded in the
/// [`ValidationResult`](crate::ValidationResult).
#[derive(Debug, Error)]
pub enum FormError {
    /// A test is misconfigured. The run was aborted and observers were not
    /// notified.
    #[error("test '{test}' on field '{field}' is misconfigured: {source}")]
    Config {
        field: String,
        test: String,
        #[source]
        source: ConfigError,
    },

    #[error("a validation run is already in progress")]
    RunInProgress,

    /// The submitter collaborator failed after observers had the result
    #[error("form submission failed: {0:#}")]
    Submit(anyhow::Error),

    /// A schema test carries a key no test option is named after
    #[error("unknown option '{key}' on test '{test}' of field '{field}'")]
    UnknownOption {
        field: String,
        test: String,
        key: String,
    },

    #[error("invalid form schema: {0}")]
    Schema(#[from] toml::de::Error),

    #[error("failed to read form schema {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = FormError> = std::result::Result<T, E>;
