// Unit tests for EncodedRequest URL rendering

use crate::request::EncodedRequest;

use reqwest::Method;
use url::Url;

/// **VALUE**: Verifies a plain request reports its URL unchanged.
///
/// **BUG THIS CATCHES**: Would catch an empty `?` being appended when there is no form.
#[test]
fn given_request_without_form_when_encoding_then_url_is_unchanged() {
    let url = Url::parse("https://api.example.com/v1/items?id=42").unwrap();

    let request = EncodedRequest::new(Method::GET, url);

    assert_eq!(
        request.encoded_url(),
        "https://api.example.com/v1/items?id=42"
    );
    assert_eq!(request.form_body(), None);
}

/// **VALUE**: Verifies form parameters show up percent-encoded in the reported URL.
///
/// **WHY THIS MATTERS**: A failed form POST is only reproducible if the report shows
/// what was posted.
///
/// **BUG THIS CATCHES**: Would catch unencoded spaces or ampersands, or existing query
/// parameters being replaced instead of extended.
#[test]
fn given_form_request_when_encoding_then_params_are_folded_into_query() {
    // GIVEN: A URL with a query and form params needing escapes
    let url = Url::parse("https://api.example.com/v1/login?lang=en").unwrap();

    // WHEN: Adding form params
    let request = EncodedRequest::new(Method::POST, url)
        .with_form([("user", "ann lee"), ("note", "a&b")]);

    // THEN: The encoded URL keeps the query and appends escaped params
    assert_eq!(
        request.encoded_url(),
        "https://api.example.com/v1/login?lang=en&user=ann+lee&note=a%26b"
    );
    assert_eq!(request.url().as_str(), "https://api.example.com/v1/login?lang=en");
    assert_eq!(request.form_body().as_deref(), Some("user=ann+lee&note=a%26b"));
}

#[test]
fn given_non_ascii_path_when_encoding_then_path_is_percent_encoded() {
    let url = Url::parse("https://api.example.com/caf\u{e9}").unwrap();

    let request = EncodedRequest::new(Method::DELETE, url);

    assert_eq!(request.encoded_url(), "https://api.example.com/caf%C3%A9");
    assert_eq!(request.method(), &Method::DELETE);
}
