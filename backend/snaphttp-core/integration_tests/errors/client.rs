use snaphttp_core::{ClientError, CoreError};

use common::ErrorLocation;

use std::error::Error;
use std::panic::Location;

/// **VALUE**: Verifies that `ClientError::Http` includes file/line/column location tracking.
///
/// **WHY THIS MATTERS**: Transport failures surface far from where they happened.
/// The location suffix is how a log line gets traced back to the call.
///
/// **BUG THIS CATCHES**: Would catch the `location` field being dropped from the
/// `#[error]` format string.
#[test]
#[track_caller]
fn given_http_error_when_formatted_then_includes_location() {
    // GIVEN: An Http error with location
    let err = ClientError::Http {
        message: "connection refused".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Formatting the error as string
    let error_string = format!("{}", err);

    // THEN: Should include error type, message, and file location
    assert!(error_string.contains("HTTP Error"));
    assert!(error_string.contains("connection refused"));
    assert!(error_string.contains("client.rs"));
}

/// **VALUE**: Verifies `From<url::ParseError>` records the conversion site.
///
/// **BUG THIS CATCHES**: Would catch `#[track_caller]` being removed from the `From` impl,
/// which would make every URL error point into the error module.
#[test]
fn given_parse_error_when_converted_with_question_mark_then_location_is_call_site() {
    // GIVEN: A function that converts with `?`
    fn parse(input: &str) -> Result<url::Url, ClientError> {
        Ok(url::Url::parse(input)?)
    }

    // WHEN: Parsing garbage
    let err = parse("::not-a-url").unwrap_err();

    // THEN: The location points here, not into snaphttp-core
    match err {
        ClientError::UrlParse { location, .. } => {
            assert!(location.file.contains("integration_tests"), "{location}");
        }
        other => panic!("Expected UrlParse, got {other:?}"),
    }
}

#[test]
fn given_client_error_when_wrapped_in_core_error_then_display_is_transparent() {
    let err = ClientError::InvalidArgument {
        message: "response must not be null".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };
    let expected = err.to_string();

    let core: CoreError = err.into();

    assert_eq!(core.to_string(), expected);
    assert!(core.source().is_none());
}
