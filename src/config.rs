//! # Configuration
//!
//! Where the backend lives. Everything comes from environment variables with defaults
//! suited to a local development backend:
//!
//! | variable | default |
//! |---|---|
//! | `CLINIC_API_URL` | `http://localhost:8000` |
//! | `CLINIC_USERS_URL` | `https://rem-rest-api.herokuapp.com/api/users` |
//! | `CLINIC_CHANNEL_BUFFER` | `32` |

use crate::framework::ResourceEndpoints;
use std::env;
use thiserror::Error;
use url::Url;

pub const API_URL_VAR: &str = "CLINIC_API_URL";
pub const USERS_URL_VAR: &str = "CLINIC_USERS_URL";
pub const CHANNEL_BUFFER_VAR: &str = "CLINIC_CHANNEL_BUFFER";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_USERS_URL: &str = "https://rem-rest-api.herokuapp.com/api/users";
pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid url ({value}): {source}")]
    InvalidUrl {
        var: &'static str,
        value: String,
        source: url::ParseError,
    },
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
    #[error("Cannot build endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Backend locations and actor settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base of the REST backend. Always ends with `/`.
    pub api_base: Url,
    /// Detail endpoint for doctors, on the external users host.
    pub users_base: Url,
    /// Mailbox capacity of each store actor.
    pub buffer_size: usize,
}

impl ClientConfig {
    pub fn new(api_base: Url, users_base: Url) -> Self {
        Self {
            api_base: with_trailing_slash(api_base),
            users_base,
            buffer_size: DEFAULT_CHANNEL_BUFFER,
        }
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base = url_var(&lookup, API_URL_VAR, DEFAULT_API_URL)?;
        let users_base = url_var(&lookup, USERS_URL_VAR, DEFAULT_USERS_URL)?;
        let buffer_size = match lookup(CHANNEL_BUFFER_VAR) {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        var: CHANNEL_BUFFER_VAR,
                        value,
                    })
                }
            },
            None => DEFAULT_CHANNEL_BUFFER,
        };

        Ok(Self {
            buffer_size,
            ..Self::new(api_base, users_base)
        })
    }

    /// `GET/POST /api/doctors`, single doctors from the users host.
    pub fn doctor_endpoints(&self) -> Result<ResourceEndpoints, ConfigError> {
        Ok(ResourceEndpoints::new(
            self.api_base.join("api/doctors")?,
            self.users_base.clone(),
        ))
    }

    pub fn patient_endpoints(&self) -> Result<ResourceEndpoints, ConfigError> {
        Ok(ResourceEndpoints::nested(self.api_base.join("api/patients")?))
    }

    pub fn clinic_endpoints(&self) -> Result<ResourceEndpoints, ConfigError> {
        Ok(ResourceEndpoints::nested(self.api_base.join("api/clinics")?))
    }
}

fn url_var(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: &str,
) -> Result<Url, ConfigError> {
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    Url::parse(value.trim()).map_err(|source| ConfigError::InvalidUrl { var, value, source })
}

/// `Url::join` replaces the last path segment unless the base ends with `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
