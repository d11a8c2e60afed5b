//! # Channel Transport
//!
//! Sends CRUD requests to a [`ResourceActor`](crate::ResourceActor) over its mailbox.

use crate::entity::{RecordId, RestEntity};
use crate::error::RequestError;
use crate::message::ResourceRequest;
use crate::transport::Transport;
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

/// A [`Transport`] backed by an in-memory resource actor.
///
/// Holds only a sender, so cloning is cheap. Once every clone is dropped the actor
/// shuts down.
pub struct ChannelTransport<T: RestEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: RestEntity> Clone for ChannelTransport<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: RestEntity> ChannelTransport<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, RequestError>>) -> ResourceRequest<T>,
    ) -> Result<R, RequestError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| RequestError::Closed)?;
        response.await.map_err(|_| RequestError::Dropped)?
    }
}

#[async_trait]
impl<T: RestEntity> Transport<T> for ChannelTransport<T> {
    async fn find_all(&self) -> Result<Vec<T>, RequestError> {
        self.request(|respond_to| ResourceRequest::FindAll { respond_to })
            .await
    }

    async fn find_by_id(&self, id: RecordId) -> Result<T, RequestError> {
        self.request(|respond_to| ResourceRequest::FindById { id, respond_to })
            .await
    }

    async fn save(&self, record: T) -> Result<T, RequestError> {
        self.request(|respond_to| ResourceRequest::Save { record, respond_to })
            .await
    }

    async fn update(&self, id: RecordId, record: T) -> Result<(), RequestError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            record,
            respond_to,
        })
        .await
    }

    async fn delete(&self, id: RecordId) -> Result<(), RequestError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }
}
