//! Tests for error handling

use spyglass_core::error::{SpyglassError, SpyglassResult};
use spyglass_core::types::Visibility;

#[test]
fn test_access_denied_display()
{
    let error = SpyglassError::AccessDenied {
        member: "secret".to_string(),
        visibility: Visibility::Private,
    };
    let message = format!("{}", error);
    assert!(message.contains("secret"));
    assert!(message.contains("private"));
    assert!(error.is_access_denied());
}

#[test]
fn test_type_mismatch_display()
{
    let error = SpyglassError::TypeMismatch {
        field: "count".to_string(),
        expected: "i64".to_string(),
        found: "String".to_string(),
    };
    let message = format!("{}", error);
    assert!(message.contains("count"));
    assert!(message.contains("i64"));
    assert!(message.contains("String"));
    assert!(!error.is_access_denied());
}

#[test]
fn test_unknown_field_display()
{
    let error = SpyglassError::UnknownField("ghost".to_string());
    assert_eq!(format!("{}", error), "Unknown field: ghost");
}

#[test]
fn test_io_error_conversion()
{
    fn write_failed() -> SpyglassResult<()>
    {
        let written: std::io::Result<()> = Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"));
        written?;
        Ok(())
    }

    match write_failed() {
        Err(SpyglassError::Io(err)) => assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe),
        other => panic!("Expected Io variant, got {other:?}"),
    }
}
