use crate::failure::StatusCodeFailure;

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ClientError {
    /// The exchange completed but its status or body makes it a failure.
    #[error(transparent)]
    Status(Box<StatusCodeFailure>),

    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("Body Read Error: {message} {location}")]
    Body {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Argument Error: {message} {location}")]
    InvalidArgument {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// The captured snapshot, when this is a status-level failure.
    pub fn status_failure(&self) -> Option<&StatusCodeFailure> {
        match self {
            ClientError::Status(failure) => Some(failure.as_ref()),
            _ => None,
        }
    }
}

impl From<StatusCodeFailure> for ClientError {
    fn from(failure: StatusCodeFailure) -> Self {
        ClientError::Status(Box::new(failure))
    }
}

impl From<url::ParseError> for ClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
