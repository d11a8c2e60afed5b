//! # Transport Seam
//!
//! [`Transport`] is the one place where a CRUD call leaves the process. The generic
//! [`RestClient`](crate::RestClient) only knows this trait, so the same client runs over
//! HTTP ([`HttpTransport`](crate::http::HttpTransport)), over a channel to an in-memory
//! [`ResourceActor`](crate::ResourceActor), or against a
//! [`MockTransport`](crate::mock::MockTransport) in tests.

use crate::entity::{RecordId, RestEntity};
use crate::error::RequestError;
use async_trait::async_trait;

/// The five CRUD operations of one resource endpoint.
#[async_trait]
pub trait Transport<T: RestEntity>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<T>, RequestError>;

    async fn find_by_id(&self, id: RecordId) -> Result<T, RequestError>;

    /// Stores a new record and returns it with the backend-assigned id.
    async fn save(&self, record: T) -> Result<T, RequestError>;

    async fn update(&self, id: RecordId, record: T) -> Result<(), RequestError>;

    async fn delete(&self, id: RecordId) -> Result<(), RequestError>;
}
