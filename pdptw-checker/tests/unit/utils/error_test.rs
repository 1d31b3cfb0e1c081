use super::*;
use std::io::ErrorKind;

#[test]
fn can_format_error_with_details() {
    let error = FormatError::new_at_line(
        SHORT_ROW_CODE,
        "node line has 3 fields, expected at least 9".to_string(),
        "check that no field is missing".to_string(),
        12,
        "1 2 3\n",
    );

    assert_eq!(
        error.to_string(),
        "E1001, cause: 'node line has 3 fields, expected at least 9', action: 'check that no field is missing'. \
         line 12: '1 2 3'"
    );
}

#[test]
fn can_format_error_without_details() {
    let error = FormatError::new(MISSING_MARKER_CODE, "'EDGES' section marker is absent".to_string(), "add".to_string());

    assert_eq!(error.to_string(), "E1000, cause: ''EDGES' section marker is absent', action: 'add'.");
}

#[test]
fn can_distinguish_not_found_from_other_io_errors() {
    let path = Path::new("some/file.txt");

    let not_found = InputError::from_io(path, std::io::Error::from(ErrorKind::NotFound));
    let denied = InputError::from_io(path, std::io::Error::from(ErrorKind::PermissionDenied));

    assert!(not_found.is_not_found());
    assert_eq!(not_found.to_string(), "file not found: 'some/file.txt'");
    assert!(!denied.is_not_found());
    assert!(denied.to_string().starts_with("cannot read file 'some/file.txt'"));
}

#[test]
fn can_wrap_format_error() {
    let error: InputError = FormatError::new(END_OF_INPUT_CODE, "cause".to_string(), "action".to_string()).into();

    assert!(matches!(error, InputError::Format(ref err) if err.code == END_OF_INPUT_CODE));
    assert_eq!(error.to_string(), "cannot parse input: E1003, cause: 'cause', action: 'action'.");
}
