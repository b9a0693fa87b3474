// File: rusty-forms-validation/src/registry.rs
// Purpose: Named collection of checks attached to a form

use crate::check::{Check, CheckInput, CheckResult, FnCheck};
use crate::custom::Custom;
use crate::remote::{Ajax, HttpTransport};
use crate::{collection, email, numeric, string};
use rusty_forms_types::ConfigError;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Maps test names to checks.
///
/// Each form owns its own registry, so two forms can run different or
/// extended test sets side by side.
#[derive(Clone, Default)]
pub struct CheckRegistry {
    checks: HashMap<String, Arc<dyn Check>>,
}

impl CheckRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in test except `ajax`, which needs a transport
    /// (see [`with_transport`](Self::with_transport))
    pub fn builtin() -> Self {
        Self::new()
            .with_fn("required", string::required)
            .with_fn("isNumber", numeric::is_number)
            .with_fn("min", numeric::min)
            .with_fn("max", numeric::max)
            .with_fn("range", numeric::range)
            .with_fn("minCount", collection::min_count)
            .with_fn("maxCount", collection::max_count)
            .with_fn("count", collection::count)
            .with_fn("regex", string::regex)
            .with_fn("minLen", string::min_len)
            .with_fn("maxLen", string::max_len)
            .with_fn("isEmail", email::is_email)
            .with_fn("sameAs", string::same_as)
            .with_fn("is", string::is)
            .with_fn("isNot", string::is_not)
            .with("custom", Custom)
    }

    /// Enable `ajax` using the given network collaborator
    pub fn with_transport(self, transport: impl HttpTransport + 'static) -> Self {
        self.with("ajax", Ajax::new(Arc::new(transport)))
    }

    pub fn with(mut self, name: impl Into<String>, check: impl Check + 'static) -> Self {
        self.register(name, check);
        self
    }

    pub fn with_fn<F>(self, name: impl Into<String>, test: F) -> Self
    where
        F: Fn(CheckInput<'_>) -> CheckResult + Send + Sync + 'static,
    {
        self.with(name, FnCheck(test))
    }

    /// Add or replace a check
    pub fn register(&mut self, name: impl Into<String>, check: impl Check + 'static) -> &mut Self {
        self.checks.insert(name.into(), Arc::new(check));
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Check>> {
        self.checks.get(name).cloned()
    }

    /// Look up a check; an unknown name is a configuration error
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Check>, ConfigError> {
        self.get(name)
            .ok_or_else(|| ConfigError::UnknownTest(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.checks.contains_key(name)
    }

    /// Registered test names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.checks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckRegistry")
            .field("checks", &self.names())
            .finish()
    }
}
