use snaphttp_core::{BlockingClient, ClientConfig, ClientError, ClientIdentity, Protocol};

use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run a blocking client call off the async runtime that drives the mock server.
async fn run_blocking<F>(config: ClientConfig, call: F) -> Result<String, ClientError>
where
    F: FnOnce(&BlockingClient) -> Result<String, ClientError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let client = BlockingClient::new(&config)?;
        call(&client)
    })
    .await
    .expect("blocking task panicked")
}

/// **VALUE**: End-to-end check that a real 404 becomes a fully populated snapshot.
///
/// **WHY THIS MATTERS**: This is the path every caller hits. Status, headers, URL and
/// body have to survive the trip from a live `reqwest` response into the failure.
///
/// **BUG THIS CATCHES**: Would catch the body being read after capture, query strings
/// being dropped from the URL, or headers not being copied.
#[tokio::test(flavor = "multi_thread")]
async fn given_404_response_when_getting_then_returns_status_failure_snapshot() {
    // GIVEN: A server answering 404 with a JSON body and a trace header
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/items"))
        .and(query_param("id", "42"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("X-Trace", "abc")
                .set_body_string("{\"error\":\"missing\"}"),
        )
        .expect(1)
        .mount(&server)
        .await;
    let url = format!("{}/v1/items?id=42", server.uri());
    let expected_url = url.clone();

    // WHEN: Getting the resource
    let result = run_blocking(ClientConfig::default(), move |client| client.get(&url)).await;

    // THEN: A status failure with the captured exchange
    let err = result.unwrap_err();
    let failure = err.status_failure().expect("expected a status failure");
    assert_eq!(failure.status_code(), "404");
    assert_eq!(failure.localized_message(), "404");
    assert_eq!(failure.message(), "Not Found");
    assert_eq!(failure.protocol(), Protocol::Http11);
    assert_eq!(failure.request_method(), "GET");
    assert_eq!(failure.request_url(), expected_url);
    assert_eq!(failure.response_headers().get("X-Trace"), Some("abc"));
    assert_eq!(failure.result(), Some("{\"error\":\"missing\"}"));
}

/// **VALUE**: Verifies a 2xx with an empty body fails when a body is required.
///
/// **BUG THIS CATCHES**: Would catch empty bodies being handed back as successful results.
#[tokio::test(flavor = "multi_thread")]
async fn given_empty_success_when_body_required_then_returns_failure_without_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    let url = format!("{}/empty", server.uri());

    let result = run_blocking(ClientConfig::default(), move |client| client.get(&url)).await;

    let err = result.unwrap_err();
    let failure = err.status_failure().expect("expected a status failure");
    assert_eq!(failure.status_code(), "200");
    assert_eq!(failure.result(), None);
}

#[tokio::test(flavor = "multi_thread")]
async fn given_empty_success_when_body_optional_then_returns_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    let url = format!("{}/empty", server.uri());
    let config = ClientConfig {
        require_body: false,
        ..ClientConfig::default()
    };

    let body = run_blocking(config, move |client| client.get(&url))
        .await
        .unwrap();

    assert_eq!(body, "");
}

/// **VALUE**: Verifies successful responses return the body and send the configured
/// `User-Agent`.
///
/// **BUG THIS CATCHES**: Would catch the identity from config not reaching the wire.
#[tokio::test(flavor = "multi_thread")]
async fn given_success_when_getting_then_returns_body_and_sends_identity() {
    // GIVEN: A server that only answers the configured user agent
    let identity = ClientIdentity::new("probe/9.9", "reqwest/test");
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", identity.user_agent().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .mount(&server)
        .await;
    let url = format!("{}/ping", server.uri());
    let config = ClientConfig {
        identity,
        ..ClientConfig::default()
    };

    // WHEN: Getting
    let body = run_blocking(config, move |client| client.get(&url))
        .await
        .unwrap();

    // THEN: The body comes back untouched
    assert_eq!(body, "pong");
}

/// **VALUE**: Verifies a failed form POST reports its parameters in the URL.
///
/// **WHY THIS MATTERS**: Without the parameters, a rejected form submission can't be
/// reproduced from the log line.
///
/// **BUG THIS CATCHES**: Would catch the form being sent in the URL instead of the body,
/// or missing from the failure report.
#[tokio::test(flavor = "multi_thread")]
async fn given_rejected_form_post_when_posting_then_failure_url_includes_params() {
    // GIVEN: A server rejecting the login form
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("user=ann+lee&pin=1%262"))
        .respond_with(ResponseTemplate::new(401).set_body_string("denied"))
        .expect(1)
        .mount(&server)
        .await;
    let url = format!("{}/login", server.uri());
    let expected_url = format!("{url}?user=ann+lee&pin=1%262");
    let params = vec![
        (String::from("user"), String::from("ann lee")),
        (String::from("pin"), String::from("1&2")),
    ];

    // WHEN: Posting the form
    let result = run_blocking(ClientConfig::default(), move |client| {
        client.post_form(&url, &params)
    })
    .await;

    // THEN: The failure shows method, folded params and body
    let err = result.unwrap_err();
    let failure = err.status_failure().expect("expected a status failure");
    assert_eq!(failure.request_method(), "POST");
    assert_eq!(failure.status_code(), "401");
    assert_eq!(failure.request_url(), expected_url);
    assert_eq!(failure.result(), Some("denied"));
}

/// **VALUE**: Verifies the rendered diagnostic for a live failure contains every block.
///
/// **BUG THIS CATCHES**: Would catch the banner not using the client's identity.
#[tokio::test(flavor = "multi_thread")]
async fn given_live_failure_when_rendering_diagnostic_then_uses_client_identity() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    let url = format!("{}/crash", server.uri());

    let rendered = tokio::task::spawn_blocking(move || {
        let client = BlockingClient::new(&ClientConfig::default()).unwrap();
        let err = client.get(&url).unwrap_err();
        let failure = err.status_failure().cloned().unwrap();
        failure.diagnostic(client.identity()).to_string()
    })
    .await
    .unwrap();

    assert!(rendered.starts_with(&format!(
        "<------ {} request end ------>",
        ClientIdentity::default().user_agent()
    )));
    assert!(rendered.contains("GET: http://"));
    assert!(rendered.contains("HTTP/1.1 500 Internal Server Error"));
    assert!(rendered.ends_with("\nboom"));
}

#[tokio::test(flavor = "multi_thread")]
async fn given_unreachable_host_when_getting_then_returns_http_error() {
    let result = run_blocking(ClientConfig::default(), |client| {
        client.get("http://127.0.0.1:1/unreachable")
    })
    .await;

    assert!(matches!(result, Err(ClientError::Http { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn given_invalid_url_when_getting_then_returns_url_parse_error() {
    let result = run_blocking(ClientConfig::default(), |client| client.get("not a url")).await;

    assert!(matches!(result, Err(ClientError::UrlParse { .. })));
}
