use crate::clients::{ClinicClient, DoctorClient, PatientClient};
use crate::config::{ClientConfig, ConfigError};
use crate::framework::{HttpTransport, RequestError};
use thiserror::Error;
use tracing::{error, info};

/// Errors raised while starting a [`ClinicSystem`].
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Transport(#[from] RequestError),
}

/// The runtime orchestrator for the clinic stores.
///
/// `ClinicSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the doctor, patient and clinic actors
/// - **Wiring**: giving every actor its endpoints and a clone of one shared HTTP transport
///
/// # Example
///
/// ```ignore
/// let system = ClinicSystem::new(&config)?;
/// system.patient_client.load_list().await?;
/// system.shutdown().await?;
/// ```
pub struct ClinicSystem {
    /// Client for the doctor store
    pub doctor_client: DoctorClient,

    /// Client for the patient store
    pub patient_client: PatientClient,

    /// Client for the clinic store
    pub clinic_client: ClinicClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ClinicSystem {
    /// Creates the stores and spawns their actors. Must be called inside a Tokio runtime.
    pub fn new(config: &ClientConfig) -> Result<Self, StartupError> {
        let transport = HttpTransport::new()?;
        Self::with_transport(config, transport)
    }

    /// Like [`ClinicSystem::new`], with a caller-provided transport.
    pub fn with_transport(
        config: &ClientConfig,
        transport: HttpTransport,
    ) -> Result<Self, StartupError> {
        let buffer = config.buffer_size;

        let (doctor_actor, doctor_client) =
            crate::doctor_actor::new(config.doctor_endpoints()?, transport.clone(), buffer);
        let (patient_actor, patient_client) =
            crate::patient_actor::new(config.patient_endpoints()?, transport.clone(), buffer);
        let (clinic_actor, clinic_client) =
            crate::clinic_actor::new(config.clinic_endpoints()?, transport, buffer);

        let handles = vec![
            tokio::spawn(doctor_actor.run()),
            tokio::spawn(patient_actor.run()),
            tokio::spawn(clinic_actor.run()),
        ];
        info!(api = %config.api_base, "Clinic system started");

        Ok(Self {
            doctor_client,
            patient_client,
            clinic_client,
            handles,
        })
    }

    /// Gracefully shuts down every store actor.
    ///
    /// Returns `Err` if any actor task failed or panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Dropping the clients closes the mailboxes; each actor exits its loop.
        drop(self.doctor_client);
        drop(self.patient_client);
        drop(self.clinic_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
