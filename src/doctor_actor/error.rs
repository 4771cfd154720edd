//! Error types for the Doctor store.

use crate::framework::{FrameworkError, RequestError};
use thiserror::Error;

/// Errors that can occur during doctor store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DoctorError {
    /// The backend could not be reached or rejected the request.
    #[error("Doctor request failed: {0}")]
    RequestFailed(RequestError),

    /// An error occurred while communicating with the store actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for DoctorError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Request(e) => DoctorError::RequestFailed(e),
            other => DoctorError::ActorCommunicationError(other.to_string()),
        }
    }
}
