//! Error types for the Patient store.

use crate::framework::{FrameworkError, RequestError};
use thiserror::Error;

/// Errors that can occur during patient store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PatientError {
    /// The backend could not be reached or rejected the request.
    #[error("Patient request failed: {0}")]
    RequestFailed(RequestError),

    /// An error occurred while communicating with the store actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for PatientError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Request(e) => PatientError::RequestFailed(e),
            other => PatientError::ActorCommunicationError(other.to_string()),
        }
    }
}
