//! # Resource Messages
//!
//! The message types exchanged between a [`ChannelTransport`](crate::ChannelTransport)
//! and the [`ResourceActor`](crate::ResourceActor) that owns the records.

use crate::entity::{RecordId, RestEntity};
use crate::error::RequestError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, RequestError>>;

/// One request to the resource actor.
///
/// The variants map one-to-one onto the REST endpoints of a resource, so the actor
/// can stand in for the backend without the client noticing.
///
/// - **FindAll**: `GET /findAll`
/// - **FindById**: `GET /findById/{id}`
/// - **Save**: `POST /save`, the actor assigns the id.
/// - **Update**: `PUT /update/{id}`
/// - **Delete**: `DELETE /delete/{id}`
#[derive(Debug)]
pub enum ResourceRequest<T: RestEntity> {
    FindAll {
        respond_to: Response<Vec<T>>,
    },
    FindById {
        id: RecordId,
        respond_to: Response<T>,
    },
    Save {
        record: T,
        respond_to: Response<T>,
    },
    Update {
        id: RecordId,
        record: T,
        respond_to: Response<()>,
    },
    Delete {
        id: RecordId,
        respond_to: Response<()>,
    },
}
