// Unit tests for logger module initialization logic
// Only this test touches the global logger, so call order is deterministic.

use crate::logger::initialize;

use std::path::PathBuf;

/// **VALUE**: Verifies a bad log directory is an error, and that later calls are no-ops.
///
/// **WHY THIS MATTERS**: The probe runs on machines where the log directory may not be
/// writable. That must be a clear error, not a panic. Repeat calls must never try to
/// install a second global logger, which fern refuses.
///
/// **BUG THIS CATCHES**: Would catch `fern::log_file()` being unwrapped, or the
/// `Once`/`AtomicBool` guards being removed.
#[test]
fn given_invalid_log_dir_when_initialize_called_then_errors_and_later_calls_are_noops() {
    // GIVEN: A path that can't hold a file on Unix-like systems
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    // WHEN: Initializing with it
    let first = initialize(&invalid_dir, false);

    // THEN: Should return the Logger variant
    let err = first.expect_err("Should return error for invalid log directory");
    assert!(
        format!("{:?}", err).contains("Logger"),
        "Error should be SnaphttpError::Logger variant"
    );

    // WHEN: Calling again with a usable directory
    let temp_dir = tempfile::TempDir::new().unwrap();
    let second = initialize(temp_dir.path(), true);

    // THEN: Returns Ok without re-initializing
    assert!(second.is_ok(), "Second initialization should be a no-op");
}
