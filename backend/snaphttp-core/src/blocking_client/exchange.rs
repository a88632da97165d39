use crate::failure::{CompletedResponse, Protocol, ResponseHeaders};
use crate::request::EncodedRequest;

use hyper::ext::ReasonPhrase;
use reqwest::blocking::Response;
use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Version};

/// Status line and headers of a `reqwest` response, paired with the request
/// that produced it.
///
/// `reqwest` responses do not remember the request method, and reading the
/// body consumes them, so the head is copied out before the body is read.
///
/// hyper only records the reason phrase when it differs from the canonical
/// one for the status code, so a missing phrase means the canonical text.
#[derive(Debug, Clone)]
pub struct ReqwestExchange<'a> {
    request: &'a EncodedRequest,
    status: StatusCode,
    reason: Option<String>,
    version: Version,
    headers: HeaderMap,
}

impl<'a> ReqwestExchange<'a> {
    pub fn new(request: &'a EncodedRequest, response: &Response) -> Self {
        Self {
            request,
            status: response.status(),
            reason: response
                .extensions()
                .get::<ReasonPhrase>()
                .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned()),
            version: response.version(),
            headers: response.headers().clone(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl CompletedResponse for ReqwestExchange<'_> {
    fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    fn status_message(&self) -> String {
        match &self.reason {
            Some(reason) => reason.clone(),
            None => self.status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    fn protocol(&self) -> Protocol {
        Protocol::from(self.version)
    }

    fn headers(&self) -> ResponseHeaders {
        ResponseHeaders::from(&self.headers)
    }

    fn request_method(&self) -> String {
        self.request.method().as_str().to_string()
    }

    fn request_url(&self) -> String {
        self.request.encoded_url()
    }
}
