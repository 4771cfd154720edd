//! # Generic Client
//!
//! This module defines the generic client for communicating with store actors.

use crate::framework::{FrameworkError, RemoteResource, ResourceStore, StoreRequest};
use tokio::sync::{mpsc, oneshot};

/// ## StoreClient
///
/// The `StoreClient<R>` is the handle callers use instead of touching a store directly. It
/// forwards requests over a Tokio mpsc channel and returns results via oneshot channels.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Chainable** – each method resolves after the store has been updated.
#[derive(Clone)]
pub struct StoreClient<R: RemoteResource> {
    sender: mpsc::Sender<StoreRequest<R>>,
}

impl<R: RemoteResource> StoreClient<R> {
    pub fn new(sender: mpsc::Sender<StoreRequest<R>>) -> Self {
        Self { sender }
    }

    /// Reload the list cache from the collection endpoint. Returns the number of records.
    pub async fn load_list(&self) -> Result<usize, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::LoadList { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Fetch a single record into `current`.
    pub async fn load(&self, id: impl Into<String>) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Load {
                id: id.into(),
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// POST `current` to the collection endpoint.
    pub async fn register(&self) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Register { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn set_current(&self, record: R) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::SetCurrent { record, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// A copy of the whole store as it is right now.
    pub async fn snapshot(&self) -> Result<ResourceStore<R>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
