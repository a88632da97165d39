use snaphttp::cli::ProbeArgs;
use snaphttp::probe::{self, ProbeOutcome};

use clap::Parser;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Parse args and run the probe on a blocking thread.
async fn probe_with(argv: Vec<String>) -> ProbeOutcome {
    tokio::task::spawn_blocking(move || {
        let args = ProbeArgs::try_parse_from(argv).expect("args should parse");
        let config = probe::load_config(&args).expect("config should load");
        probe::run(&args, &config).expect("probe should not error")
    })
    .await
    .expect("blocking task panicked")
}

/// **VALUE**: Tests the full probe path from parsed args to a rendered diagnostic.
///
/// **WHY THIS MATTERS**: This is what a user sees when a request fails. It wires config
/// loading, the blocking client and the diagnostic renderer together.
///
/// **BUG THIS CATCHES**: Would catch the identity from snaphttp.toml not reaching the
/// banner, or status failures escaping as errors instead of outcomes.
#[tokio::test(flavor = "multi_thread")]
async fn given_failing_endpoint_when_probing_then_returns_rendered_diagnostic() {
    // GIVEN: A config dir with a custom identity and a server answering 403
    let config_dir = TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("snaphttp.toml"),
        "[identity]\nlibrary_agent = \"probe/1.0\"\ntransport_agent = \"reqwest/test\"\n",
    )
    .unwrap();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/secret"))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("X-Trace", "abc")
                .set_body_string("forbidden"),
        )
        .mount(&server)
        .await;

    // WHEN: Probing
    let outcome = probe_with(vec![
        "snaphttp".to_string(),
        format!("{}/secret", server.uri()),
        "--config-dir".to_string(),
        config_dir.path().display().to_string(),
    ])
    .await;

    // THEN: A failure outcome with the full diagnostic
    assert!(!outcome.is_success());
    match outcome {
        ProbeOutcome::Failure {
            failure,
            diagnostic,
        } => {
            assert_eq!(failure.status_code(), "403");
            assert!(diagnostic.starts_with("<------ probe/1.0 reqwest/test request end ------>"));
            assert!(diagnostic.contains("HTTP/1.1 403 Forbidden"));
            assert!(diagnostic.contains("x-trace: abc"));
            assert!(diagnostic.ends_with("\nforbidden"));
        }
        ProbeOutcome::Body(body) => panic!("Expected failure, got body {body}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn given_empty_success_with_allow_empty_when_probing_then_returns_body() {
    let config_dir = TempDir::new().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let outcome = probe_with(vec![
        "snaphttp".to_string(),
        server.uri(),
        "--config-dir".to_string(),
        config_dir.path().display().to_string(),
        "--allow-empty".to_string(),
    ])
    .await;

    assert!(matches!(outcome, ProbeOutcome::Body(body) if body.is_empty()));
}

#[tokio::test(flavor = "multi_thread")]
async fn given_form_fields_when_probing_then_posts_form() {
    let config_dir = TempDir::new().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("welcome"))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = probe_with(vec![
        "snaphttp".to_string(),
        format!("{}/login", server.uri()),
        "--form".to_string(),
        "user=ann".to_string(),
        "--config-dir".to_string(),
        config_dir.path().display().to_string(),
    ])
    .await;

    assert!(matches!(outcome, ProbeOutcome::Body(body) if body == "welcome"));
}
