// Unit tests for ClientConfig load and validation

use crate::config::ClientConfig;
use crate::error::ConfigError;
use crate::failure::ClientIdentity;

use std::time::Duration;

use tempfile::TempDir;

/// **VALUE**: Verifies a missing config file yields defaults instead of an error.
///
/// **WHY THIS MATTERS**: First runs have no config file. Failing here would make the
/// probe unusable out of the box.
///
/// **BUG THIS CATCHES**: Would catch `load()` reading the file unconditionally.
#[test]
fn given_missing_file_when_loading_then_returns_defaults() {
    let dir = TempDir::new().unwrap();

    let config = ClientConfig::load(dir.path()).unwrap();

    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert!(config.require_body);
    assert_eq!(config.identity, ClientIdentity::default());
}

/// **VALUE**: Verifies partial files fill the rest from defaults.
///
/// **BUG THIS CATCHES**: Would catch a missing `#[serde(default)]` making every field mandatory.
#[test]
fn given_partial_file_when_loading_then_merges_with_defaults() {
    // GIVEN: A file overriding only the timeout and library agent
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("snaphttp.toml"),
        "timeout_secs = 5\n\n[identity]\nlibrary_agent = \"probe/1.0\"\n",
    )
    .unwrap();

    // WHEN: Loading
    let config = ClientConfig::load(dir.path()).unwrap();

    // THEN: Overrides applied, rest defaulted
    assert_eq!(config.timeout_secs, 5);
    assert!(config.require_body);
    assert_eq!(config.identity.library_agent, "probe/1.0");
    assert_eq!(
        config.identity.transport_agent,
        ClientIdentity::default().transport_agent
    );
}

#[test]
fn given_malformed_file_when_loading_then_returns_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("snaphttp.toml"), "timeout_secs = \"soon\"").unwrap();

    let result = ClientConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

/// **VALUE**: Verifies out-of-range timeouts and blank agents are rejected.
///
/// **BUG THIS CATCHES**: Would catch a zero timeout reaching reqwest, or an empty
/// banner in every diagnostic.
#[test]
fn given_invalid_values_when_validating_then_returns_validation_error() {
    let zero_timeout = ClientConfig {
        timeout_secs: 0,
        ..ClientConfig::default()
    };
    let blank_agent = ClientConfig {
        identity: ClientIdentity::new("  ", "reqwest/0.13"),
        ..ClientConfig::default()
    };
    let blank_transport = ClientConfig {
        identity: ClientIdentity::new("snaphttp/1", ""),
        ..ClientConfig::default()
    };

    for config in [zero_timeout, blank_agent, blank_transport] {
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { .. }),
            "unexpected error: {err}"
        );
    }
}

#[test]
fn given_invalid_file_when_loading_then_validation_runs() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("snaphttp.toml"), "timeout_secs = 9000").unwrap();

    let err = ClientConfig::load(dir.path()).unwrap_err();

    assert!(err.to_string().contains("Invalid timeout"));
}

#[test]
fn given_identity_when_building_user_agent_then_joins_both_agents() {
    let identity = ClientIdentity::new("snaphttp/0.1.0", "reqwest/0.13");

    assert_eq!(identity.user_agent(), "snaphttp/0.1.0 reqwest/0.13");
}
