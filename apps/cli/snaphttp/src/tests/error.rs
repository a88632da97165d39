// Unit tests for error module

use crate::error::SnaphttpError;

use common::ErrorLocation;
use snaphttp_core::{ClientError, ConfigError};

use std::panic::Location;

/// **VALUE**: Tests that errors serialize with their variant tag.
///
/// **WHY THIS MATTERS**: Wrappers around the probe consume its errors as JSON. The tag
/// is how they tell a config problem from a transport problem.
///
/// **BUG THIS CATCHES**: Would catch the `#[serde(tag, content)]` layout changing, or a
/// non-serializable field being added.
#[test]
fn given_snaphttp_error_when_serialized_then_includes_variant_and_message() {
    // GIVEN: A SnaphttpError
    let err = SnaphttpError::Config {
        message: String::from("Test"),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Serializing to JSON
    let json = serde_json::to_value(&err).unwrap();

    // THEN: Tag and payload are present
    assert_eq!(json["type"], "Config");
    assert_eq!(json["data"]["message"], "Test");
    assert!(json["data"]["location"]["line"].as_u64().unwrap() > 0);
}

/// **VALUE**: Verifies core errors keep their message when converted.
///
/// **BUG THIS CATCHES**: Would catch the wrong variant being chosen in a `From` impl.
#[test]
fn given_core_errors_when_converted_then_map_to_matching_variants() {
    let client = ClientError::Http {
        message: String::from("connection refused"),
        location: ErrorLocation::from(Location::caller()),
    };
    let config = ConfigError::DirectoryNotFound {
        location: ErrorLocation::from(Location::caller()),
    };

    let from_client = SnaphttpError::from(client);
    let from_config = SnaphttpError::from(config);

    assert!(matches!(&from_client, SnaphttpError::Core { message, .. } if message.contains("connection refused")));
    assert!(matches!(from_config, SnaphttpError::Config { .. }));
    assert!(from_client.to_string().starts_with("Core Error: HTTP Error: connection refused"));
}
