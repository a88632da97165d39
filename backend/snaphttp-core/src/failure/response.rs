use crate::failure::headers::ResponseHeaders;
use crate::failure::protocol::Protocol;

/// A finished exchange as seen at the moment a failure is detected.
///
/// Implemented by the HTTP client's response adapter. Every method is read
/// once during capture; nothing is read from the implementor afterwards.
pub trait CompletedResponse {
    fn status_code(&self) -> u16;

    /// Reason phrase from the status line. May be empty (HTTP/2 has none).
    fn status_message(&self) -> String;

    fn protocol(&self) -> Protocol;

    fn headers(&self) -> ResponseHeaders;

    /// Verb of the originating request.
    fn request_method(&self) -> String;

    /// Fully resolved, percent-encoded URL of the originating request.
    fn request_url(&self) -> String;
}
