//! Shared leaf types for snaphttp.
//!
//! This crate holds the small value types every other crate in the
//! workspace leans on. It has no HTTP dependency of its own.
//!
//! ## Architecture
//!
//! - **common** (this crate): Location tracking and status code helpers
//! - **snaphttp-core**: Failure snapshots and the blocking client adapter
//! - **snaphttp**: Command line probe wiring everything together

pub mod error;
pub mod http_status;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
