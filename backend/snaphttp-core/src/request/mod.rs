//! Request descriptors as the client logs and reports them.

use reqwest::Method;
use url::Url;
use url::form_urlencoded::Serializer;

/// The parts of an outgoing request that a failure needs to report.
///
/// `form` holds `application/x-www-form-urlencoded` body parameters. They are
/// sent in the body but folded into the query string of
/// [`encoded_url`](Self::encoded_url) so a failure report shows what was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRequest {
    method: Method,
    url: Url,
    form: Vec<(String, String)>,
}

impl EncodedRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            form: Vec::new(),
        }
    }

    pub fn with_form<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.form
            .extend(params.into_iter().map(|(key, value)| (key.into(), value.into())));
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn form(&self) -> &[(String, String)] {
        &self.form
    }

    /// Request URL plus any form parameters, percent-encoded.
    pub fn encoded_url(&self) -> String {
        if self.form.is_empty() {
            return self.url.as_str().to_string();
        }

        let mut url = self.url.clone();
        url.query_pairs_mut()
            .extend_pairs(self.form.iter().map(|(key, value)| (key.as_str(), value.as_str())));
        url.into()
    }

    /// Form parameters serialised as an `application/x-www-form-urlencoded` body.
    pub fn form_body(&self) -> Option<String> {
        if self.form.is_empty() {
            return None;
        }

        Some(
            Serializer::new(String::new())
                .extend_pairs(self.form.iter().map(|(key, value)| (key.as_str(), value.as_str())))
                .finish(),
        )
    }
}
