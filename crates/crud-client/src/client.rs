//! # Generic Client
//!
//! [`RestClient<T>`] is the generic resource client: five CRUD calls against one base
//! endpoint, plus the two conveniences every screen needs (`persist` and
//! `delete_batch`).

use crate::config::ApiConfig;
use crate::entity::{RecordId, RestEntity};
use crate::error::{ConfigError, RequestError};
use crate::http::HttpTransport;
use crate::transport::Transport;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// A type-safe client for one REST resource.
///
/// Cheap to clone: clones share the same [`Transport`].
///
/// * **Async API** – every method resolves to `Result<…, RequestError>`.
/// * **Generic** – works with any record implementing [`RestEntity`].
/// * **Transport-agnostic** – HTTP in production, a resource actor or a mock in tests.
pub struct RestClient<T: RestEntity> {
    transport: Arc<dyn Transport<T>>,
}

impl<T: RestEntity> Clone for RestClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

/// What [`RestClient::persist`] did with the record.
#[derive(Debug, Clone, PartialEq)]
pub enum Persisted<T> {
    /// The record was new; carries the stored copy with its backend-assigned id.
    Created(T),
    Updated(RecordId),
}

impl<T: RestEntity> RestClient<T> {
    pub fn new(transport: impl Transport<T> + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Client over HTTP for `T::RESOURCE` under the configured API root.
    pub fn http(config: &ApiConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(HttpTransport::<T>::new(config)?))
    }

    /// Same as [`RestClient::http`] but sharing a connection pool.
    pub fn http_with(client: reqwest::Client, config: &ApiConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(HttpTransport::<T>::with_client(client, config)?))
    }

    /// Lists every record. An empty list is a valid answer.
    #[instrument(skip(self), fields(resource = T::RESOURCE))]
    pub async fn find_all(&self) -> Result<Vec<T>, RequestError> {
        let records = self.transport.find_all().await.inspect_err(|e| {
            warn!(error = %e, "find_all failed");
        })?;
        debug!(count = records.len(), "Fetched records");
        Ok(records)
    }

    #[instrument(skip(self), fields(resource = T::RESOURCE))]
    pub async fn find_by_id(&self, id: RecordId) -> Result<T, RequestError> {
        self.transport.find_by_id(id).await.inspect_err(|e| {
            warn!(error = %e, "find_by_id failed");
        })
    }

    /// Creates a record; the id it carries is ignored by the backend.
    #[instrument(skip(self, record), fields(resource = T::RESOURCE))]
    pub async fn save(&self, record: &T) -> Result<T, RequestError> {
        debug!(?record, "Sending save");
        let stored = self.transport.save(record.clone()).await.inspect_err(|e| {
            warn!(error = %e, "save failed");
        })?;
        info!(id = stored.id(), "Saved");
        Ok(stored)
    }

    #[instrument(skip(self, record), fields(resource = T::RESOURCE))]
    pub async fn update(&self, id: RecordId, record: &T) -> Result<(), RequestError> {
        debug!(?record, "Sending update");
        self.transport
            .update(id, record.clone())
            .await
            .inspect_err(|e| warn!(error = %e, "update failed"))?;
        info!("Updated");
        Ok(())
    }

    #[instrument(skip(self), fields(resource = T::RESOURCE))]
    pub async fn delete(&self, id: RecordId) -> Result<(), RequestError> {
        self.transport
            .delete(id)
            .await
            .inspect_err(|e| warn!(error = %e, "delete failed"))?;
        info!("Deleted");
        Ok(())
    }

    /// Saves new records and updates existing ones, by [`RestEntity::is_new`].
    pub async fn persist(&self, record: &T) -> Result<Persisted<T>, RequestError> {
        if record.is_new() {
            self.save(record).await.map(Persisted::Created)
        } else {
            let id = record.id();
            self.update(id, record).await.map(|()| Persisted::Updated(id))
        }
    }

    /// Deletes every id concurrently and waits for all calls to settle.
    ///
    /// Succeeds with the number of deleted records only if every call succeeded.
    /// Otherwise returns the first failure; deletes that went through stay done.
    #[instrument(skip(self, ids), fields(resource = T::RESOURCE, count = ids.len()))]
    pub async fn delete_batch(&self, ids: &[RecordId]) -> Result<usize, RequestError> {
        let results = join_all(ids.iter().map(|&id| self.delete(id))).await;

        let attempted = results.len();
        let mut deleted = 0;
        let mut first_error = None;
        for result in results {
            match result {
                Ok(()) => deleted += 1,
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            None => {
                info!(deleted, "Batch deleted");
                Ok(deleted)
            }
            Some(e) => {
                warn!(deleted, failed = attempted - deleted, error = %e, "Batch delete failed");
                Err(e)
            }
        }
    }
}
