//! # Client Errors
//!
//! Every CRUD operation fails with the same [`RequestError`] shape. Callers do not
//! branch on the variant to decide what to do; they log it and show its message.
//! The variants exist so logs carry the cause.

/// A failed request against a resource endpoint.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The request never got a response (connection refused, DNS, TLS, ...).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    ///
    /// `message` is whatever the backend put in its error body, so it is
    /// displayed verbatim.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded into the expected record shape.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// The in-memory resource actor is no longer running.
    #[error("Resource backend closed")]
    Closed,

    /// The in-memory resource actor dropped the reply channel.
    #[error("Resource backend dropped response channel")]
    Dropped,
}

impl RequestError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: crate::RecordId) -> Self {
        Self::status(404, format!("{resource} {id} not found"))
    }

    /// HTTP status for backend rejections, `None` for everything else.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

/// Invalid client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid base URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Unknown findById route style: {0}")]
    UnknownRoute(String),
}
