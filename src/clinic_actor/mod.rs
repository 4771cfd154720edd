//! Clinic store: `/api/clinics`.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ClinicClient;
use crate::framework::{HttpTransport, ResourceEndpoints, StoreActor};
use crate::model::Clinic;

/// Creates a new Clinic store actor and its client.
pub fn new(
    endpoints: ResourceEndpoints,
    transport: HttpTransport,
    buffer_size: usize,
) -> (StoreActor<Clinic>, ClinicClient) {
    let (actor, generic_client) = StoreActor::new(endpoints, transport, buffer_size);
    (actor, ClinicClient::new(generic_client))
}
