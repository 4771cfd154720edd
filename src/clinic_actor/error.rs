//! Error types for the Clinic store.

use crate::framework::{FrameworkError, RequestError};
use thiserror::Error;

/// Errors that can occur during clinic store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClinicError {
    /// The backend could not be reached or rejected the request.
    #[error("Clinic request failed: {0}")]
    RequestFailed(RequestError),

    /// An error occurred while communicating with the store actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ClinicError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Request(e) => ClinicError::RequestFailed(e),
            other => ClinicError::ActorCommunicationError(other.to_string()),
        }
    }
}
