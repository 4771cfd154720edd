//! # Clinic Client
//!
//! Provides a high-level API for the clinic store.
use crate::clinic_actor::ClinicError;
use crate::framework::{FrameworkError, StoreAccess, StoreClient};
use crate::model::Clinic;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Clinic store actor.
#[derive(Clone)]
pub struct ClinicClient {
    inner: StoreClient<Clinic>,
}

impl ClinicClient {
    pub fn new(inner: StoreClient<Clinic>) -> Self {
        Self { inner }
    }

    /// Register a new clinic. The backend only needs a name.
    #[instrument(skip(self))]
    pub async fn register_clinic(&self, name: &str) -> Result<(), ClinicError> {
        debug!("Sending request");
        self.inner.set_current(Clinic::new(name)).await?;
        self.inner.register().await.map_err(ClinicError::from)
    }
}

#[async_trait]
impl StoreAccess<Clinic> for ClinicClient {
    type Error = ClinicError;

    fn inner(&self) -> &StoreClient<Clinic> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ClinicError::from(e)
    }
}
