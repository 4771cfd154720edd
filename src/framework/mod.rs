//! Generic store framework for remote REST resources.
//!
//! This module provides the building blocks for caching a backend collection in a
//! task-owned store and reaching it through type-safe clients.
//!
//! # Main Components
//!
//! - [`RemoteResource`] - Trait that record types implement to be cached by a store actor
//! - [`StoreActor`] - Generic actor that owns a [`ResourceStore`] and performs the HTTP calls
//! - [`StoreClient`] - Cloneable handle for sending requests to a store actor
//! - [`StoreAccess`] - Trait that resource-specific clients implement to inherit the operations
//! - [`HttpTransport`] - JSON-over-HTTP transport shared by all actors
//! - [`FrameworkError`] / [`RequestError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod endpoints;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;
pub mod transport;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::StoreAccess;
pub use endpoints::ResourceEndpoints;
pub use entity::RemoteResource;
pub use error::{FrameworkError, RequestError};
pub use message::{Response, StoreRequest};
pub use store::ResourceStore;
pub use transport::HttpTransport;
