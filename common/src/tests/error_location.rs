use crate::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures file, line, and column.
///
/// **WHY THIS MATTERS**: Every error variant in the workspace carries an `ErrorLocation`.
/// If it records the wrong position, the location suffix on every error message is noise.
///
/// **BUG THIS CATCHES**: Would catch if file, line, or column extraction from
/// `Location` is swapped or dropped.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN: The current position
    let expected_line = line!() + 3;

    // WHEN: Creating ErrorLocation from caller
    let location = ErrorLocation::from(Location::caller());

    // THEN: Should capture this file and line
    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path"
    );
    assert_eq!(location.line, expected_line, "Should capture correct line number");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies the "[file:line:column]" Display format.
///
/// **WHY THIS MATTERS**: Error messages end with this suffix. A format change silently
/// breaks anyone grepping logs for it.
///
/// **BUG THIS CATCHES**: Would catch bracket or separator changes in `Display`.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: A fixed ErrorLocation
    let location = ErrorLocation {
        file: "src/client.rs",
        line: 42,
        column: 7,
    };

    // WHEN: Formatting as string
    let formatted = location.to_string();

    // THEN: Should produce "[file:line:column]"
    assert_eq!(formatted, "[src/client.rs:42:7]");
}

/// **VALUE**: Verifies `#[track_caller]` propagation into `ErrorLocation::from()`.
///
/// **WHY THIS MATTERS**: Error constructors are `#[track_caller]` so that the location
/// points at the failing call site, not at the constructor body.
///
/// **BUG THIS CATCHES**: Would catch if `Location::caller()` stops resolving through
/// `#[track_caller]` frames, which would make every location point at the helper.
#[test]
fn given_multiple_call_sites_when_capturing_location_then_each_has_unique_line() {
    // GIVEN: A helper function that captures location
    #[track_caller]
    fn capture_location() -> ErrorLocation {
        ErrorLocation::from(Location::caller())
    }

    // WHEN: Capturing location from different call sites
    let loc1 = capture_location();
    let loc2 = capture_location();

    // THEN: Same file, sequential lines
    assert_eq!(loc1.file, loc2.file, "Should have same file");
    assert_eq!(loc1.line + 1, loc2.line, "Lines should be sequential");
}
