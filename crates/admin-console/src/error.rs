//! Error types for the admin console.

use crud_client::{ConfigError, RequestError};
use thiserror::Error;

/// Errors surfaced by the entity clients and the system wiring.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// A CRUD call against one resource failed.
    #[error("{resource}: {source}")]
    Request {
        resource: &'static str,
        #[source]
        source: RequestError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A resource actor task panicked or was aborted.
    #[error("Resource actor failed: {0}")]
    Actor(String),
}

impl ConsoleError {
    pub fn request(resource: &'static str, source: RequestError) -> Self {
        Self::Request { resource, source }
    }

    /// The message to show the operator: the backend's own words when there are some.
    pub fn user_message(&self) -> String {
        match self {
            Self::Request { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }
}
