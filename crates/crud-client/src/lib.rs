//! # CRUD Client
//!
//! Generic building blocks for talking to a REST backend that exposes every entity
//! through the same five endpoints:
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | list | GET | `/<resource>/findAll` |
//! | create | POST | `/<resource>/save` |
//! | update | PUT | `/<resource>/update/{id}` |
//! | delete | DELETE | `/<resource>/delete/{id}` |
//! | get one | GET | `/<resource>/findById/{id}` |
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`RestEntity`]) - the record shape, its endpoint and its field updates
//! 2. **Interface Layer** ([`RestClient`], [`EntityClient`]) - the typed CRUD API
//! 3. **Transport Layer** ([`Transport`]) - HTTP, an in-memory [`ResourceActor`], or a mock
//!
//! You write the record type once; the client, the HTTP plumbing and the error
//! handling come from the framework.
//!
//! ```rust,no_run
//! use crud_client::{ApiConfig, RecordId, RestClient, RestEntity};
//! use serde::{Deserialize, Serialize};
//! use validator::Validate;
//!
//! #[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
//! struct Tag {
//!     #[serde(default)]
//!     id: RecordId,
//!     #[validate(length(min = 1))]
//!     label: String,
//! }
//!
//! #[derive(Debug)] enum TagField { Label(String) }
//!
//! impl RestEntity for Tag {
//!     const RESOURCE: &'static str = "tag";
//!     type Field = TagField;
//!     fn id(&self) -> RecordId { self.id }
//!     fn with_id(self, id: RecordId) -> Self { Self { id, ..self } }
//!     fn apply(&mut self, field: TagField) {
//!         match field { TagField::Label(label) => self.label = label }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RestClient::<Tag>::http(&ApiConfig::from_env()?)?;
//!     let saved = client.save(&Tag { id: 0, label: "urgent".into() }).await?;
//!     assert!(saved.id > 0);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Model
//!
//! Every operation fails with one [`RequestError`], whether the network is down, the
//! backend rejected the record, or the body was malformed. Callers report its message
//! and move on; nothing is retried.
//!
//! ## Testing
//!
//! [`ResourceActor`] keeps a real record store behind a channel, so CRUD properties can
//! be checked without a server. [`mock::MockTransport`] scripts individual answers for
//! error paths.

pub mod actor;
pub mod channel;
pub mod client;
pub mod client_trait;
pub mod config;
pub mod entity;
pub mod error;
pub mod http;
pub mod message;
pub mod mock;
pub mod tracing;
pub mod transport;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use channel::ChannelTransport;
pub use client::{Persisted, RestClient};
pub use client_trait::EntityClient;
pub use config::{ApiConfig, FindByIdRoute};
pub use entity::{RecordId, RestEntity};
pub use error::{ConfigError, RequestError};
pub use http::HttpTransport;
pub use message::{ResourceRequest, Response};
pub use transport::Transport;
