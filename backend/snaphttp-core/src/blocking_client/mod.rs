//! Synchronous HTTP client that reports status-level failures as snapshots.

pub mod exchange;

pub use exchange::ReqwestExchange;

use crate::config::ClientConfig;
use crate::error::client::ClientError;
use crate::failure::{ClientIdentity, StatusCodeFailure};
use crate::request::EncodedRequest;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use log::{debug, warn};
use reqwest::Method;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Whether a successful response must carry a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRequirement {
    Required,
    Optional,
}

impl From<bool> for BodyRequirement {
    fn from(required: bool) -> Self {
        if required {
            BodyRequirement::Required
        } else {
            BodyRequirement::Optional
        }
    }
}

/// How a completed exchange should be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeVerdict {
    Success(String),
    /// Report as a [`StatusCodeFailure`] carrying `result`.
    Failure { result: Option<String> },
}

/// Decide whether an exchange succeeded.
///
/// Non-2xx statuses fail and keep the body as the failure's result. A 2xx
/// with an empty body fails with no result when a body is required.
pub fn check_exchange(
    status: HttpStatusCode,
    body: String,
    requirement: BodyRequirement,
) -> ExchangeVerdict {
    if !status.is_success() {
        return ExchangeVerdict::Failure { result: Some(body) };
    }

    if body.is_empty() && requirement == BodyRequirement::Required {
        return ExchangeVerdict::Failure { result: None };
    }

    ExchangeVerdict::Success(body)
}

#[derive(Debug, Clone)]
pub struct BlockingClient {
    client: Client,
    identity: ClientIdentity,
    requirement: BodyRequirement,
}

impl BlockingClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.identity.user_agent())
            .build()?;

        Ok(Self {
            client,
            identity: config.identity.clone(),
            requirement: BodyRequirement::from(config.require_body),
        })
    }

    /// Naming to pass to [`StatusCodeFailure::diagnostic`].
    pub fn identity(&self) -> &ClientIdentity {
        &self.identity
    }

    pub fn get(&self, url: &str) -> Result<String, ClientError> {
        let request = EncodedRequest::new(Method::GET, Url::parse(url)?);
        self.execute(&request, self.requirement)
    }

    pub fn post_form(&self, url: &str, params: &[(String, String)]) -> Result<String, ClientError> {
        let request = EncodedRequest::new(Method::POST, Url::parse(url)?)
            .with_form(params.iter().cloned());
        self.execute(&request, self.requirement)
    }

    /// Send `request` and return the response body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] with a captured [`StatusCodeFailure`] when the
    /// exchange completes with a failing status or a missing required body. If the
    /// body of a failing status cannot be read, the failure is still returned, with
    /// no result. [`ClientError::Http`] means the transport failed, and
    /// [`ClientError::Body`] means a successful response's body could not be read.
    pub fn execute(
        &self,
        request: &EncodedRequest,
        requirement: BodyRequirement,
    ) -> Result<String, ClientError> {
        let mut builder = self
            .client
            .request(request.method().clone(), request.url().clone());
        if let Some(form) = request.form_body() {
            builder = builder.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(form);
        }

        debug!("{} {}", request.method(), request.encoded_url());
        let response = builder.send()?;

        let exchange = ReqwestExchange::new(request, &response);
        let status = HttpStatusCode(exchange.status().as_u16());
        let body = match response.text() {
            Ok(body) => body,
            // A failing status outranks an unreadable body.
            Err(e) if !status.is_success() => {
                let failure = StatusCodeFailure::new(&exchange);
                warn!("{failure} (body unreadable: {e})");
                return Err(ClientError::from(failure));
            }
            Err(e) => {
                return Err(ClientError::Body {
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        match check_exchange(status, body, requirement) {
            ExchangeVerdict::Success(body) => Ok(body),
            ExchangeVerdict::Failure { result } => {
                let failure = StatusCodeFailure::with_result(&exchange, result);
                warn!("{failure}");
                Err(ClientError::from(failure))
            }
        }
    }
}
