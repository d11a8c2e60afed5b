//! # In-Memory Resource Actor
//!
//! This module defines the `ResourceActor`, a local stand-in for one REST resource.
//! It owns the records of a single entity type and processes requests sequentially,
//! answering exactly the way the backend does: ids are assigned on save, unknown ids
//! are rejected with a 404 status, invalid records with a 400.

use crate::channel::ChannelTransport;
use crate::entity::{RecordId, RestEntity};
use crate::error::RequestError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns the records of one resource.
///
/// # Architecture Note
/// This struct is the "Server" half. It owns the `store` and the receiver end of the
/// channel; the [`ChannelTransport`] it hands out is the "Client" half.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop, so the store needs
/// no `Mutex`. Concurrent callers (e.g. a batch delete) simply queue up in the mailbox.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` and its `transport`.
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Wrap the transport in a [`RestClient`](crate::RestClient).
///
/// # Implementation Details
///
/// The store is a `BTreeMap` keyed by id so `find_all` lists records in creation order.
/// `next_id` starts at 1 and is never reused, even after deletes.
pub struct ResourceActor<T: RestEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<RecordId, T>,
    next_id: RecordId,
}

impl<T: RestEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ChannelTransport`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   callers wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ChannelTransport<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        (actor, ChannelTransport::new(sender))
    }

    /// Creates an actor pre-loaded with records. Ids are kept as given; records
    /// without an id get the next free one.
    pub fn with_records(
        buffer_size: usize,
        records: impl IntoIterator<Item = T>,
    ) -> (Self, ChannelTransport<T>) {
        let (mut actor, transport) = Self::new(buffer_size);
        for record in records {
            let id = if record.is_new() {
                actor.next_id
            } else {
                record.id()
            };
            actor.next_id = actor.next_id.max(id.saturating_add(1));
            actor.store.insert(id, record.with_id(id));
        }
        (actor, transport)
    }

    /// Runs the actor's event loop, processing messages until every transport is dropped.
    pub async fn run(mut self) {
        let resource = T::RESOURCE;
        info!(resource, size = self.store.len(), "Resource actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::FindAll { respond_to } => {
                    let records: Vec<T> = self.store.values().cloned().collect();
                    debug!(resource, count = records.len(), "FindAll");
                    let _ = respond_to.send(Ok(records));
                }
                ResourceRequest::FindById { id, respond_to } => {
                    let found = self.store.get(&id).cloned();
                    debug!(resource, id, found = found.is_some(), "FindById");
                    let _ = respond_to
                        .send(found.ok_or_else(|| RequestError::not_found(resource, id)));
                }
                ResourceRequest::Save { record, respond_to } => {
                    debug!(resource, ?record, "Save");
                    if let Err(e) = record.validate() {
                        warn!(resource, error = %e, "Save rejected");
                        let _ = respond_to.send(Err(RequestError::status(400, e.to_string())));
                        continue;
                    }
                    let id = self.next_id;
                    if self.store.contains_key(&id) {
                        warn!(resource, id, "Id space exhausted");
                        let _ = respond_to.send(Err(RequestError::status(
                            409,
                            format!("{resource} ids exhausted"),
                        )));
                        continue;
                    }
                    self.next_id = id.saturating_add(1);
                    let stored = record.with_id(id);
                    self.store.insert(id, stored.clone());
                    info!(resource, id, size = self.store.len(), "Saved");
                    let _ = respond_to.send(Ok(stored));
                }
                ResourceRequest::Update {
                    id,
                    record,
                    respond_to,
                } => {
                    debug!(resource, id, ?record, "Update");
                    let Some(slot) = self.store.get_mut(&id) else {
                        warn!(resource, id, "Not found");
                        let _ = respond_to.send(Err(RequestError::not_found(resource, id)));
                        continue;
                    };
                    if let Err(e) = record.validate() {
                        warn!(resource, id, error = %e, "Update rejected");
                        let _ = respond_to.send(Err(RequestError::status(400, e.to_string())));
                        continue;
                    }
                    *slot = record.with_id(id);
                    info!(resource, id, "Updated");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(resource, id, "Delete");
                    if self.store.remove(&id).is_some() {
                        info!(resource, id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(resource, id, "Not found");
                        let _ = respond_to.send(Err(RequestError::not_found(resource, id)));
                    }
                }
            }
        }

        info!(resource, size = self.store.len(), "Shutdown");
    }
}
