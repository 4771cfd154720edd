//! # Framework Errors
//!
//! Errors shared by every store actor and client. [`RequestError`] is the only failure
//! taxonomy of the HTTP side ("request failed"), split by cause so logs stay useful.
//! Its `Display` output is what ends up in a store's `error` string.

/// A failed HTTP exchange with the backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },
    #[error("Invalid response from {url}: {message}")]
    Decode { url: String, message: String },
    #[error("Invalid url: {0}")]
    InvalidUrl(String),
    #[error("HTTP client setup failed: {0}")]
    Setup(String),
}

impl RequestError {
    pub(crate) fn transport(url: &url::Url, err: reqwest::Error) -> Self {
        RequestError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn decode(url: &url::Url, err: impl std::fmt::Display) -> Self {
        RequestError::Decode {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

/// Errors that can occur within the store framework itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error(transparent)]
    Request(#[from] RequestError),
}
