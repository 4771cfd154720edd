//! Patient store: `/api/patients`, detail records nested under the collection.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::PatientClient;
use crate::framework::{HttpTransport, ResourceEndpoints, StoreActor};
use crate::model::Patient;

/// Creates a new Patient store actor and its client.
pub fn new(
    endpoints: ResourceEndpoints,
    transport: HttpTransport,
    buffer_size: usize,
) -> (StoreActor<Patient>, PatientClient) {
    let (actor, generic_client) = StoreActor::new(endpoints, transport, buffer_size);
    (actor, PatientClient::new(generic_client))
}
