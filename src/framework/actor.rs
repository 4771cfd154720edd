//! # Store Actor
//!
//! This module defines the `StoreActor`, the task that owns one [`ResourceStore`]. It is the
//! only code that ever mutates the store, so no locks are needed.

use crate::framework::{
    FrameworkError, HttpTransport, RemoteResource, ResourceEndpoints, ResourceStore, StoreClient,
    StoreRequest,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// ## StoreActor
///
/// The *server* side of a resource store. It owns the [`ResourceStore<R>`], the endpoints of
/// the resource and a handle to the shared [`HttpTransport`], and processes incoming
/// [`StoreRequest<R>`] messages one at a time.
///
/// # Ordering
///
/// A request is fully handled, HTTP round trip included, before the next one is read. Two
/// concurrent `load_list` calls therefore apply in arrival order and the later one wins.
///
/// # Usage Pattern
///
/// ```rust,ignore
/// let (actor, client) = StoreActor::<Doctor>::new(endpoints, transport, 32);
/// tokio::spawn(actor.run());
/// client.load_list().await?;
/// ```
///
/// ## Operations
///
/// * **LoadList**: GET the collection. On success replace `list` and clear `error`; on
///   failure keep `list`, set `error`, log a warning.
/// * **Load**: GET one record from the detail endpoint and overwrite `current`. Failures are
///   returned to the caller only; the store is left alone.
/// * **Register**: POST `current` to the collection. On success clear `error`; on failure
///   set `error` and log a warning. `list` and `current` are never touched.
/// * **SetCurrent** / **Snapshot**: local writes and reads of the store.
pub struct StoreActor<R: RemoteResource> {
    receiver: mpsc::Receiver<StoreRequest<R>>,
    store: ResourceStore<R>,
    endpoints: ResourceEndpoints,
    transport: HttpTransport,
}

impl<R: RemoteResource> StoreActor<R> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the mailbox. When it is full, client calls wait.
    pub fn new(
        endpoints: ResourceEndpoints,
        transport: HttpTransport,
        buffer_size: usize,
    ) -> (Self, StoreClient<R>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: ResourceStore::new(),
            endpoints,
            transport,
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        let resource = R::NAME;
        info!(resource, collection = %self.endpoints.collection, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::LoadList { respond_to } => {
                    let result = self.load_list().await;
                    let _ = respond_to.send(result);
                }
                StoreRequest::Load { id, respond_to } => {
                    let result = self.load(&id).await;
                    let _ = respond_to.send(result);
                }
                StoreRequest::Register { respond_to } => {
                    let result = self.register().await;
                    let _ = respond_to.send(result);
                }
                StoreRequest::SetCurrent { record, respond_to } => {
                    debug!(resource, ?record, "SetCurrent");
                    self.store.current = record;
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::Snapshot { respond_to } => {
                    debug!(resource, size = self.store.list.len(), "Snapshot");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
            }
        }

        info!(resource, size = self.store.list.len(), "Shutdown");
    }

    async fn load_list(&mut self) -> Result<usize, FrameworkError> {
        let resource = R::NAME;
        debug!(resource, url = %self.endpoints.collection, "LoadList");
        let result = self
            .transport
            .get_list::<R>(&self.endpoints.collection)
            .await;
        match result {
            Ok(list) => {
                let size = list.len();
                self.store.replace_list(list);
                info!(resource, size, "List loaded");
                Ok(size)
            }
            Err(e) => {
                warn!(resource, error = %e, "LoadList failed");
                self.store.record_error(&e);
                Err(e.into())
            }
        }
    }

    async fn load(&mut self, id: &str) -> Result<R, FrameworkError> {
        let resource = R::NAME;
        let url = self.endpoints.detail_url(id)?;
        debug!(resource, id, %url, "Load");
        let record: R = self.transport.get_record(&url).await?;
        self.store.current = record.clone();
        info!(resource, id, "Loaded");
        Ok(record)
    }

    async fn register(&mut self) -> Result<(), FrameworkError> {
        let resource = R::NAME;
        debug!(resource, current = ?self.store.current, "Register");
        let result = self
            .transport
            .post_json(&self.endpoints.collection, &self.store.current)
            .await;
        match result {
            Ok(()) => {
                self.store.error.clear();
                info!(resource, "Registered");
                Ok(())
            }
            Err(e) => {
                warn!(resource, error = %e, "Register failed");
                self.store.record_error(&e);
                Err(e.into())
            }
        }
    }
}
