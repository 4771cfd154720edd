//! # Patient Client
//!
//! Provides a high-level API for the patient store.
use crate::framework::{FrameworkError, StoreAccess, StoreClient};
use crate::model::Patient;
use crate::patient_actor::PatientError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Patient store actor.
#[derive(Clone)]
pub struct PatientClient {
    inner: StoreClient<Patient>,
}

impl PatientClient {
    pub fn new(inner: StoreClient<Patient>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn register_patient(&self, patient: Patient) -> Result<(), PatientError> {
        debug!("Sending request");
        self.inner.set_current(patient).await?;
        self.inner.register().await.map_err(PatientError::from)
    }
}

#[async_trait]
impl StoreAccess<Patient> for PatientClient {
    type Error = PatientError;

    fn inner(&self) -> &StoreClient<Patient> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        PatientError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::framework::RequestError;

    #[tokio::test]
    async fn test_register_patient_sets_current_then_posts() {
        let mut mock = MockClient::<Patient>::new();
        mock.expect_set_current().return_ok(());
        mock.expect_register().return_err(FrameworkError::Request(RequestError::Status {
            url: "http://backend/api/patients".to_string(),
            status: 400,
        }));

        let client = PatientClient::new(mock.client());
        let err = client
            .register_patient(Patient::new("Ada", "Lovelace"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PatientError::RequestFailed(RequestError::Status { status: 400, .. })
        ));

        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_store_maps_to_communication_error() {
        let (inner, receiver) = crate::framework::mock::create_mock_client::<Patient>(1);
        drop(receiver);

        let client = PatientClient::new(inner);
        let err = client.load_list().await.unwrap_err();
        assert_eq!(
            err,
            PatientError::ActorCommunicationError(FrameworkError::ActorClosed.to_string())
        );
    }
}
