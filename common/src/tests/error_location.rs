use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures the file and a real position.
///
/// **WHY THIS MATTERS**: Every Airship error variant carries an ErrorLocation. If capture
/// breaks, a failed call no longer tells you which operation or classifier raised it.
///
/// **BUG THIS CATCHES**: Would catch if `Location::caller()` stops being propagated or
/// the file path is dropped from the struct.
#[test]
#[track_caller]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN/WHEN: Creating ErrorLocation from the current call site
    let location = ErrorLocation::from(Location::caller());

    // THEN: Should capture file, line, and column
    assert!(!location.file.is_empty(), "Should capture file path");
    assert!(location.line > 0, "Should capture line number");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies the Display format is `[file:line:column]`.
///
/// **WHY THIS MATTERS**: Error messages end with this suffix; log parsing relies on the
/// bracketed form.
///
/// **BUG THIS CATCHES**: Would catch a Display change that drops brackets or a component.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: A fixed ErrorLocation
    let location = ErrorLocation {
        file: "src/client.rs",
        line: 42,
        column: 7,
    };

    // WHEN: Formatting as string
    let formatted = format!("{}", location);

    // THEN: Should produce "[file:line:column]"
    assert_eq!(formatted, "[src/client.rs:42:7]");
}

/// **VALUE**: Verifies that `#[track_caller]` propagation gives distinct lines per call site.
///
/// **WHY THIS MATTERS**: Error constructors are `#[track_caller]`; without propagation every
/// error would point at the constructor instead of the failing call.
///
/// **BUG THIS CATCHES**: Would catch removal of `#[track_caller]` from helper constructors.
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
