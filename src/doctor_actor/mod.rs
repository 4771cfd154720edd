//! # Doctor Store
//!
//! The doctor resource: its list is served by the backend (`/api/doctors`) while single
//! records are loaded from a separate users host, so its endpoints are not nested.
//!
//! ## Structure
//!
//! - [`entity`] - [`RemoteResource`](crate::framework::RemoteResource) implementation for [`Doctor`]
//! - [`error`] - [`DoctorError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clinic_client::config::ClientConfig;
//! use clinic_client::doctor_actor;
//! use clinic_client::framework::{HttpTransport, StoreAccess};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::from_env()?;
//!     let (actor, client) =
//!         doctor_actor::new(config.doctor_endpoints()?, HttpTransport::new()?, config.buffer_size);
//!     tokio::spawn(actor.run());
//!
//!     client.load_list().await?;
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::DoctorClient;
use crate::framework::{HttpTransport, ResourceEndpoints, StoreActor};
use crate::model::Doctor;

/// Creates a new Doctor store actor and its client.
pub fn new(
    endpoints: ResourceEndpoints,
    transport: HttpTransport,
    buffer_size: usize,
) -> (StoreActor<Doctor>, DoctorClient) {
    let (actor, generic_client) = StoreActor::new(endpoints, transport, buffer_size);
    (actor, DoctorClient::new(generic_client))
}
