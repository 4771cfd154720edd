//! # Doctor Client
//!
//! Provides a high-level API for the doctor store. It wraps a `StoreClient<Doctor>` and
//! exposes the standard store operations through [`StoreAccess`].
use crate::doctor_actor::DoctorError;
use crate::framework::{FrameworkError, StoreAccess, StoreClient};
use crate::model::Doctor;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Doctor store actor.
#[derive(Clone)]
pub struct DoctorClient {
    inner: StoreClient<Doctor>,
}

impl DoctorClient {
    pub fn new(inner: StoreClient<Doctor>) -> Self {
        Self { inner }
    }

    /// Replace `current` with `doctor` and register it.
    #[instrument(skip(self))]
    pub async fn register_doctor(&self, doctor: Doctor) -> Result<(), DoctorError> {
        debug!("Sending request");
        self.inner.set_current(doctor).await?;
        self.inner.register().await.map_err(DoctorError::from)
    }
}

#[async_trait]
impl StoreAccess<Doctor> for DoctorClient {
    type Error = DoctorError;

    fn inner(&self) -> &StoreClient<Doctor> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        DoctorError::from(e)
    }
}
