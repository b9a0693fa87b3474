// File: rusty-forms-types/src/options.rs
// Purpose: Per-test configuration bag

use crate::completer::Completer;
use crate::http::HttpResponse;
use crate::number::to_number;
use crate::outcome::Outcome;
use crate::value::FormValues;
use regex::Regex;
use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A caller-supplied test: `(values, options, completer, form values)`.
///
/// The function must eventually call [`Completer::complete`], either before
/// returning or from a task it spawns.
pub type CustomFn = Arc<dyn Fn(&[String], &TestOptions, Completer, &FormValues) + Send + Sync>;

/// Maps a remote response to an outcome for the `ajax` test
pub type Classifier = Arc<dyn Fn(&HttpResponse) -> Outcome + Send + Sync>;

/// The test-specific `arg` option.
///
/// Numbers and text can come from a schema file; patterns and functions only
/// from code.
#[derive(Clone, Deserialize)]
#[serde(untagged)]
pub enum TestArg {
    Number(f64),
    Text(String),
    #[serde(skip)]
    Pattern(Regex),
    #[serde(skip)]
    Custom(CustomFn),
    #[serde(skip)]
    Classifier(Classifier),
}

impl TestArg {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&[String], &TestOptions, Completer, &FormValues) + Send + Sync + 'static,
    {
        TestArg::Custom(Arc::new(f))
    }

    pub fn classifier<F>(f: F) -> Self
    where
        F: Fn(&HttpResponse) -> Outcome + Send + Sync + 'static,
    {
        TestArg::Classifier(Arc::new(f))
    }

    /// Text form of a literal argument (numbers print without a trailing `.0`)
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            TestArg::Text(text) => Some(Cow::Borrowed(text)),
            TestArg::Number(n) => Some(Cow::Owned(format_number(*n))),
            _ => None,
        }
    }

    /// Numeric value of a literal argument; `None` when it is not numeric
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TestArg::Number(n) => Some(*n),
            TestArg::Text(text) => to_number(text),
            _ => None,
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for TestArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestArg::Number(n) => f.write_str(&format_number(*n)),
            TestArg::Text(text) => f.write_str(text),
            TestArg::Pattern(re) => write!(f, "/{}/", re.as_str()),
            TestArg::Custom(_) => f.write_str("<custom>"),
            TestArg::Classifier(_) => f.write_str("<classifier>"),
        }
    }
}

impl fmt::Debug for TestArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestArg::Number(n) => f.debug_tuple("Number").field(n).finish(),
            TestArg::Text(text) => f.debug_tuple("Text").field(text).finish(),
            TestArg::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            TestArg::Custom(_) => f.write_str("Custom(..)"),
            TestArg::Classifier(_) => f.write_str("Classifier(..)"),
        }
    }
}

impl From<&str> for TestArg {
    fn from(text: &str) -> Self {
        TestArg::Text(text.to_string())
    }
}

impl From<String> for TestArg {
    fn from(text: String) -> Self {
        TestArg::Text(text)
    }
}

impl From<f64> for TestArg {
    fn from(n: f64) -> Self {
        TestArg::Number(n)
    }
}

impl From<i64> for TestArg {
    fn from(n: i64) -> Self {
        TestArg::Number(n as f64)
    }
}

impl From<i32> for TestArg {
    fn from(n: i32) -> Self {
        TestArg::Number(f64::from(n))
    }
}

impl From<u32> for TestArg {
    fn from(n: u32) -> Self {
        TestArg::Number(f64::from(n))
    }
}

impl From<Regex> for TestArg {
    fn from(re: Regex) -> Self {
        TestArg::Pattern(re)
    }
}

/// Options recognized by every test.
///
/// Raw as written by the caller; the engine resolves `on` and `delay` into
/// their defaults once, when the form is built.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TestOptions {
    /// Test-specific parameter
    pub arg: Option<TestArg>,

    /// Replaces the test's default failure text
    pub message: Option<String>,

    /// Space-delimited event names this test runs on (default: `submit`)
    pub on: Option<String>,

    /// Makes the test conditional: read this field's value instead, and
    /// report a failure as a skip
    pub field: Option<String>,

    /// Idle debounce window in milliseconds
    pub delay: Option<u64>,

    /// URL template for the `ajax` test, with `{field}` placeholders
    pub url: Option<String>,
}

impl TestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, arg: impl Into<TestArg>) -> Self {
        self.arg = Some(arg.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn on(mut self, on: impl Into<String>) -> Self {
        self.on = Some(on.into());
        self
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn delay(mut self, millis: u64) -> Self {
        self.delay = Some(millis);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// The caller's message, or the test's default
    pub fn message_or_else(&self, default: impl FnOnce() -> String) -> String {
        self.message.clone().unwrap_or_else(default)
    }

    /// `arg` rendered for a default message; blank when absent
    pub fn arg_display(&self) -> String {
        self.arg.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}
