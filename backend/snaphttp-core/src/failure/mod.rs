//! Status-level failure snapshots.
//!
//! A [`StatusCodeFailure`] is built once, from a [`CompletedResponse`], at the
//! point the client decides an exchange failed. After that it owns plain
//! values only and can be logged, cloned or sent across threads freely.

pub mod headers;
pub mod identity;
pub mod protocol;
pub mod response;
pub mod status_code_failure;

pub use headers::ResponseHeaders;
pub use identity::ClientIdentity;
pub use protocol::Protocol;
pub use response::CompletedResponse;
pub use status_code_failure::{Diagnostic, StatusCodeFailure};
