pub mod blocking_client;
pub mod config;
pub mod error;
pub mod failure;
pub mod request;

#[cfg(test)]
mod tests;

pub use blocking_client::{BlockingClient, BodyRequirement};
pub use config::ClientConfig;
pub use error::{ClientError, ConfigError, CoreError};
pub use failure::{
    ClientIdentity, CompletedResponse, Diagnostic, Protocol, ResponseHeaders, StatusCodeFailure,
};
pub use request::EncodedRequest;
