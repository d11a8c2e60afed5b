//! # EntityClient Trait
//!
//! Provides a common interface for per-entity clients, with every CRUD operation
//! implemented once on top of the generic [`RestClient`].
use crate::{Persisted, RecordId, RequestError, RestClient, RestEntity};
use async_trait::async_trait;

/// Trait for per-entity clients to inherit the standard CRUD operations.
///
/// An implementor only binds the generic client and says how a [`RequestError`] maps
/// into its own error type.
///
/// # Example
///
/// ```rust
/// use crud_client::{EntityClient, RecordId, RequestError, RestClient, RestEntity};
/// use serde::{Deserialize, Serialize};
/// use validator::Validate;
///
/// #[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
/// struct Tag {
///     #[serde(default)]
///     id: RecordId,
///     #[validate(length(min = 1))]
///     label: String,
/// }
///
/// #[derive(Debug)]
/// enum TagField { Label(String) }
///
/// impl RestEntity for Tag {
///     const RESOURCE: &'static str = "tag";
///     type Field = TagField;
///     fn id(&self) -> RecordId { self.id }
///     fn with_id(self, id: RecordId) -> Self { Self { id, ..self } }
///     fn apply(&mut self, field: TagField) {
///         match field { TagField::Label(label) => self.label = label }
///     }
/// }
///
/// struct TagClient { inner: RestClient<Tag> }
///
/// impl EntityClient<Tag> for TagClient {
///     type Error = String;
///     fn inner(&self) -> &RestClient<Tag> { &self.inner }
///     fn map_error(e: RequestError) -> String { e.to_string() }
/// }
///
/// async fn usage(client: TagClient) {
///     // find_all(), save(), update(), delete() ... come for free
///     let _ = client.find_all().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait EntityClient<T: RestEntity>: Send + Sync {
    /// The entity-specific error type.
    type Error: Send;

    /// Access the inner generic RestClient.
    fn inner(&self) -> &RestClient<T>;

    /// Map request errors to the entity-specific error type.
    fn map_error(e: RequestError) -> Self::Error;

    async fn find_all(&self) -> Result<Vec<T>, Self::Error> {
        self.inner().find_all().await.map_err(Self::map_error)
    }

    async fn find_by_id(&self, id: RecordId) -> Result<T, Self::Error> {
        self.inner().find_by_id(id).await.map_err(Self::map_error)
    }

    async fn save(&self, record: &T) -> Result<T, Self::Error> {
        self.inner().save(record).await.map_err(Self::map_error)
    }

    async fn update(&self, id: RecordId, record: &T) -> Result<(), Self::Error> {
        self.inner().update(id, record).await.map_err(Self::map_error)
    }

    async fn delete(&self, id: RecordId) -> Result<(), Self::Error> {
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    async fn persist(&self, record: &T) -> Result<Persisted<T>, Self::Error> {
        self.inner().persist(record).await.map_err(Self::map_error)
    }

    async fn delete_batch(&self, ids: &[RecordId]) -> Result<usize, Self::Error> {
        self.inner().delete_batch(ids).await.map_err(Self::map_error)
    }
}
