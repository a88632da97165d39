use common::ErrorLocation;
use snaphttp_core::{ClientError, ConfigError};

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the probe binary.
///
/// Status-level failures are not errors here; they are a normal probe
/// outcome and are reported through [`crate::probe::ProbeOutcome`].
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum SnaphttpError {
    /// Logger could not be set up
    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    /// Config could not be located or loaded
    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// Error from snaphttp-core client operations
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },
}

impl From<ConfigError> for SnaphttpError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        SnaphttpError::Config {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClientError> for SnaphttpError {
    #[track_caller]
    fn from(error: ClientError) -> Self {
        SnaphttpError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
