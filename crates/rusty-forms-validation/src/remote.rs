//! `ajax`: confirm a value with a remote service
//!
//! The current form values are interpolated into a URL template, the URL is
//! fetched through an [`HttpTransport`], and the caller's classifier turns
//! the response into an outcome.
//!
//! Transport failures never stall a run: they are logged and reported as a
//! failing outcome naming the URL.

use crate::check::{required_arg, Check, CheckInput, CheckResult};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use rusty_forms_types::{Completion, ConfigError, FieldValue, FormValues, HttpResponse, TestArg};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Network failures seen by the `ajax` test
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} timed out after {after:?}")]
    Timeout { url: String, after: Duration },
}

/// GET-style request primitive supplied by the host
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url).await
    }
}

/// Bounds how long any transport may take to answer
pub struct TimeoutTransport<T> {
    inner: T,
    limit: Duration,
}

impl<T> TimeoutTransport<T> {
    pub fn new(inner: T, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

#[async_trait]
impl<T: HttpTransport> HttpTransport for TimeoutTransport<T> {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        match tokio::time::timeout(self.limit, self.inner.get(url)).await {
            Ok(response) => response,
            Err(_) => Err(TransportError::Timeout {
                url: url.to_string(),
                after: self.limit,
            }),
        }
    }
}

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}]+)\}").expect("placeholder pattern"));

/// Replace `{name}` placeholders with the URL-encoded value of field `name`.
///
/// Multi-valued fields are encoded value by value and joined with `,`.
/// Placeholders naming no field are left as written.
pub fn interpolate(template: &str, form: &FormValues) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match form.get(&caps[1]) {
            Some(FieldValue::Single(value)) => urlencoding::encode(value).into_owned(),
            Some(FieldValue::Multi(values)) => values
                .iter()
                .map(|value| urlencoding::encode(value).into_owned())
                .collect::<Vec<_>>()
                .join(","),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// The `ajax` test, bound to a transport
#[derive(Clone)]
pub struct Ajax {
    transport: Arc<dyn HttpTransport>,
}

impl Ajax {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl Check for Ajax {
    async fn run(&self, input: CheckInput<'_>) -> CheckResult {
        let classify = match required_arg(input.options, "ajax")? {
            TestArg::Classifier(classify) => classify.clone(),
            other => {
                return Err(ConfigError::InvalidArgument {
                    test: "ajax",
                    arg: other.to_string(),
                })
            }
        };
        let template = input
            .options
            .url
            .as_deref()
            .ok_or(ConfigError::MissingUrl { test: "ajax" })?;

        let url = interpolate(template, input.form);
        debug!(%url, "remote check");

        match self.transport.get(&url).await {
            Ok(response) => Ok(Completion::new(classify(&response), "server responded")),
            Err(err) => {
                warn!(%url, error = %err, "remote check failed");
                Ok(Completion::fail(format!("Error getting file: {url}")))
            }
        }
    }
}

/// [`HttpTransport`] backed by `reqwest`. Non-2xx statuses are errors.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let request_failed = |err: reqwest::Error| TransportError::Request {
            url: url.to_string(),
            reason: err.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(request_failed)?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(request_failed)?;
        Ok(HttpResponse::new(status.as_u16(), body))
    }
}
