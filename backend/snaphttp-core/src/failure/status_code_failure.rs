use crate::error::client::ClientError;
use crate::failure::headers::ResponseHeaders;
use crate::failure::identity::ClientIdentity;
use crate::failure::protocol::Protocol;
use crate::failure::response::CompletedResponse;

use common::ErrorLocation;

use std::any::type_name;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location;

use log::debug;
use serde::Serialize;

/// A completed exchange that has to be reported as a failure.
///
/// Raised when the status code falls outside 2xx, or when a body was
/// required and none arrived. Every field is copied out of the response
/// during construction, so the value stays valid after the response and
/// its connection are gone.
///
/// The status code is kept as the text it arrived as and is never
/// re-derived or range checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCodeFailure {
    protocol: Protocol,
    status_code: String,
    message: String,
    request_method: String,
    request_url: String,
    response_headers: ResponseHeaders,
    result: Option<String>,
}

impl StatusCodeFailure {
    /// Capture `response` with no pre-decoded body.
    pub fn new<R>(response: &R) -> Self
    where
        R: CompletedResponse + ?Sized,
    {
        Self::with_result(response, None)
    }

    /// Capture `response` together with a body the caller already read.
    ///
    /// `result` is stored as given. An empty string stays an empty string
    /// and is not folded into `None`.
    pub fn with_result<R>(response: &R, result: Option<String>) -> Self
    where
        R: CompletedResponse + ?Sized,
    {
        let failure = Self {
            protocol: response.protocol(),
            status_code: response.status_code().to_string(),
            message: response.status_message(),
            request_method: response.request_method(),
            request_url: response.request_url(),
            response_headers: response.headers(),
            result,
        };

        debug!(
            "Captured status failure {} for {} {}",
            failure.status_code, failure.request_method, failure.request_url
        );

        failure
    }

    /// Nullable entry point for callers that may not hold a response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] when `response` is `None`.
    #[track_caller]
    pub fn try_capture<R>(response: Option<&R>, result: Option<String>) -> Result<Self, ClientError>
    where
        R: CompletedResponse + ?Sized,
    {
        match response {
            Some(response) => Ok(Self::with_result(response, result)),
            None => Err(ClientError::InvalidArgument {
                message: String::from("response must not be null"),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Same value as [`status_code`](Self::status_code).
    ///
    /// Generic error reporting surfaces the localized message, so it carries
    /// the code rather than a language-dependent phrase.
    pub fn localized_message(&self) -> &str {
        &self.status_code
    }

    pub fn status_code(&self) -> &str {
        &self.status_code
    }

    /// Status line reason phrase.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn request_method(&self) -> &str {
        &self.request_method
    }

    pub fn request_url(&self) -> &str {
        &self.request_url
    }

    pub fn response_headers(&self) -> &ResponseHeaders {
        &self.response_headers
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Multi-line block for log sinks. See [`Diagnostic`].
    pub fn diagnostic<'a>(&'a self, identity: &'a ClientIdentity) -> Diagnostic<'a> {
        Diagnostic {
            failure: self,
            identity,
        }
    }
}

impl Display for StatusCodeFailure {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        write!(
            formatter,
            "HTTP Status Error: {} {} -> {} {} {}",
            self.request_method, self.request_url, self.protocol, self.status_code, self.message
        )
    }
}

impl std::error::Error for StatusCodeFailure {}

/// Human readable dump of a [`StatusCodeFailure`].
///
/// Line order is fixed: banner, type name, method and URL, status line,
/// headers, result. An absent result prints as `null`. Nothing else about
/// the layout is stable.
#[derive(Debug, Clone, Copy)]
pub struct Diagnostic<'a> {
    failure: &'a StatusCodeFailure,
    identity: &'a ClientIdentity,
}

impl Display for Diagnostic<'_> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        let failure = self.failure;
        writeln!(
            formatter,
            "<------ {} {} request end ------>",
            self.identity.library_agent, self.identity.transport_agent
        )?;
        writeln!(formatter, "{}:", type_name::<StatusCodeFailure>())?;
        writeln!(formatter)?;
        writeln!(formatter, "{}: {}", failure.request_method, failure.request_url)?;
        writeln!(formatter)?;
        writeln!(
            formatter,
            "{} {} {}",
            failure.protocol, failure.status_code, failure.message
        )?;
        writeln!(formatter)?;
        write!(formatter, "{}", failure.response_headers)?;
        match &failure.result {
            Some(result) => write!(formatter, "\n{result}"),
            None => write!(formatter, "\nnull"),
        }
    }
}
