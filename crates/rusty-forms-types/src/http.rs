// File: rusty-forms-types/src/http.rs
// Purpose: Response handed to remote-check classifiers

/// A response from the network collaborator used by the `ajax` test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// Response body as text
    pub fn text(&self) -> &str {
        &self.body
    }
}
