//! # StoreAccess Trait
//!
//! Provides a common interface for resource-specific clients, adding default store
//! operations built on top of a generic `StoreClient`.
use crate::framework::{FrameworkError, RemoteResource, ResourceStore, StoreClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard store operations.
///
/// Implementors only provide access to the inner [`StoreClient`] and an error mapping;
/// `load_list`, `load`, `register`, `set_current` and `snapshot` come for free.
#[async_trait]
pub trait StoreAccess<R: RemoteResource>: Send + Sync {
    /// The resource-specific error type.
    type Error: std::error::Error + Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<R>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Reload the list cache.
    #[tracing::instrument(skip(self), fields(resource = R::NAME))]
    async fn load_list(&self) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().load_list().await.map_err(Self::map_error)
    }

    /// Fetch one record into `current`.
    #[tracing::instrument(skip(self), fields(resource = R::NAME))]
    async fn load(&self, id: String) -> Result<R, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().load(id).await.map_err(Self::map_error)
    }

    /// Post `current` to the backend.
    #[tracing::instrument(skip(self), fields(resource = R::NAME))]
    async fn register(&self) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().register().await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self), fields(resource = R::NAME))]
    async fn set_current(&self, record: R) -> Result<(), Self::Error> {
        self.inner().set_current(record).await.map_err(Self::map_error)
    }

    async fn snapshot(&self) -> Result<ResourceStore<R>, Self::Error> {
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
