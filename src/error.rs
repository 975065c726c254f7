//! Error classification for dashboard backend responses
//!
//! Every HTTP status the backend can return maps to one [`ApiErrorKind`] here, so callers
//! branch on the kind instead of repeating status checks.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    Unauthorized,
    Forbidden,
    NotFound,
    Validation,
    Conflict,
    ServerError,
    Network,
}

impl ApiErrorKind {
    /// Classify an HTTP status. `None` means the request never got a response.
    pub fn from_status(status: Option<u16>) -> Self {
        match status {
            None => ApiErrorKind::Network,
            Some(401) => ApiErrorKind::Unauthorized,
            Some(403) => ApiErrorKind::Forbidden,
            Some(404) => ApiErrorKind::NotFound,
            Some(409) => ApiErrorKind::Conflict,
            Some(400) | Some(422) => ApiErrorKind::Validation,
            Some(500..=599) => ApiErrorKind::ServerError,
            // Remaining 4xx are client mistakes; anything else is not an HTTP error status
            Some(400..=499) => ApiErrorKind::Validation,
            Some(_) => ApiErrorKind::ServerError,
        }
    }

    fn default_message(&self) -> &'static str {
        match self {
            ApiErrorKind::Unauthorized => "Session expired, please sign in again",
            ApiErrorKind::Forbidden => "You do not have permission to perform this action",
            ApiErrorKind::NotFound => "The requested record was not found",
            ApiErrorKind::Validation => "The request was rejected as invalid",
            ApiErrorKind::Conflict => "The record was changed by someone else",
            ApiErrorKind::ServerError => "The server encountered an error",
            ApiErrorKind::Network => "Could not reach the server",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind:?}: {message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    /// Build an error from a failed response.
    ///
    /// `body` is the raw response body; a JSON `message`, `detail` or `error` string in it
    /// becomes the message, otherwise the kind's default text is used. Meant for an HTTP
    /// catalog fetcher; the file loader in this crate reports plain I/O errors instead.
    pub fn from_response(status: Option<u16>, body: Option<&str>) -> Self {
        let kind = ApiErrorKind::from_status(status);
        let message = body
            .and_then(extract_message)
            .unwrap_or_else(|| kind.default_message().to_string());
        Self { kind, message }
    }

    /// Text suitable for a transient status message
    pub fn user_message(&self) -> String {
        match self.kind {
            ApiErrorKind::Validation | ApiErrorKind::Conflict | ApiErrorKind::NotFound => {
                self.message.clone()
            }
            _ => self.kind.default_message().to_string(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self.kind, ApiErrorKind::ServerError | ApiErrorKind::Network)
    }
}

fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "detail", "error"]
        .iter()
        .find_map(|field| value.get(field).and_then(|v| v.as_str()))
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
}
