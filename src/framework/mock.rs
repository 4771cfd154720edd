//! # Mock Framework
//!
//! Utilities for testing code that talks to a store (views, client wrappers) without spawning
//! a [`StoreActor`](crate::framework::StoreActor) or an HTTP server.
//!
//! Two styles are available:
//!
//! - [`MockClient`]: queue expectations with a fluent builder, hand out the client, then
//!   [`verify`](MockClient::verify) that every expectation was consumed.
//! - [`create_mock_client`]: get the raw receiving end and answer requests by hand with the
//!   `expect_*` helpers. Useful when a test needs to inspect the request payload.
//!
//! ```rust,ignore
//! let mut mock = MockClient::<Patient>::new();
//! mock.expect_load_list().return_ok(2);
//! mock.expect_snapshot().return_ok(store);
//!
//! let view = ListView::on_init(&PatientClient::new(mock.client())).await?;
//! mock.verify();
//! ```

use crate::framework::{FrameworkError, RemoteResource, ResourceStore, StoreClient, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the canned response for it.
enum Expectation<R: RemoteResource> {
    LoadList(Result<usize, FrameworkError>),
    Load {
        id: String,
        response: Result<R, FrameworkError>,
    },
    Register(Result<(), FrameworkError>),
    SetCurrent(Result<(), FrameworkError>),
    Snapshot(Result<ResourceStore<R>, FrameworkError>),
}

type Queue<R> = Arc<Mutex<VecDeque<Expectation<R>>>>;

fn lock<R: RemoteResource>(queue: &Queue<R>) -> MutexGuard<'_, VecDeque<Expectation<R>>> {
    queue.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock store with expectation tracking for fluent testing.
///
/// Requests are answered strictly in the order expectations were queued. A request that
/// does not match the next expectation panics the background task, which surfaces in the
/// test as `FrameworkError::ActorDropped`.
pub struct MockClient<R: RemoteResource> {
    client: StoreClient<R>,
    expectations: Queue<R>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<R: RemoteResource> Default for MockClient<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RemoteResource> MockClient<R> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<R>>(100);
        let expectations: Queue<R> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();

                match (request, expectation) {
                    (StoreRequest::LoadList { respond_to }, Some(Expectation::LoadList(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Load { id, respond_to },
                        Some(Expectation::Load { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "Load requested for an unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Register { respond_to }, Some(Expectation::Register(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::SetCurrent { respond_to, .. },
                        Some(Expectation::SetCurrent(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Snapshot { respond_to }, Some(Expectation::Snapshot(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {:?}", request);
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<R> {
        self.client.clone()
    }

    pub fn expect_load_list(&mut self) -> ExpectationBuilder<R, usize> {
        self.builder(Box::new(Expectation::LoadList))
    }

    pub fn expect_load(&mut self, id: impl Into<String>) -> ExpectationBuilder<R, R> {
        let id = id.into();
        self.builder(Box::new(move |response| Expectation::Load { id, response }))
    }

    pub fn expect_register(&mut self) -> ExpectationBuilder<R, ()> {
        self.builder(Box::new(Expectation::Register))
    }

    pub fn expect_set_current(&mut self) -> ExpectationBuilder<R, ()> {
        self.builder(Box::new(Expectation::SetCurrent))
    }

    pub fn expect_snapshot(&mut self) -> ExpectationBuilder<R, ResourceStore<R>> {
        self.builder(Box::new(Expectation::Snapshot))
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn builder<T>(&self, wrap: Wrap<R, T>) -> ExpectationBuilder<R, T> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap,
        }
    }
}

type Wrap<R, T> = Box<dyn FnOnce(Result<T, FrameworkError>) -> Expectation<R> + Send>;

/// Builder that queues one expectation with its response.
pub struct ExpectationBuilder<R: RemoteResource, T> {
    expectations: Queue<R>,
    wrap: Wrap<R, T>,
}

impl<R: RemoteResource, T> ExpectationBuilder<R, T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        lock(&self.expectations).push_back((self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back((self.wrap)(Err(error)));
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a store client whose requests land on a receiver the test controls.
pub fn create_mock_client<R: RemoteResource>(
    buffer_size: usize,
) -> (StoreClient<R>, mpsc::Receiver<StoreRequest<R>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a SetCurrent request
pub async fn expect_set_current<R: RemoteResource>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<(R, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::SetCurrent { record, respond_to }) => Some((record, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Register request
pub async fn expect_register<R: RemoteResource>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<oneshot::Sender<Result<(), FrameworkError>>> {
    match receiver.recv().await {
        Some(StoreRequest::Register { respond_to }) => Some(respond_to),
        _ => None,
    }
}
