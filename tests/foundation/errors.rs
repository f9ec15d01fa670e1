//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use propbox_foundation::{Error, ErrorContext, ErrorKind, TypeTag};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_type_mismatch() {
    let err = Error::type_mismatch(TypeTag::Int16, TypeTag::UInt8);
    assert!(err.is_type_mismatch());
    assert!(!err.is_out_of_range());
    assert_eq!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: TypeTag::Int16,
            actual: TypeTag::UInt8,
        }
    );
}

#[test]
fn error_out_of_range() {
    let err = Error::out_of_range(TypeTag::UInt8, 300);
    assert!(err.is_out_of_range());
    assert!(matches!(
        err.kind,
        ErrorKind::OutOfRange {
            target: TypeTag::UInt8,
            value: 300
        }
    ));
}

#[test]
fn error_unknown_type_code() {
    let err = Error::unknown_type_code(20);
    assert_eq!(err.kind, ErrorKind::UnknownTypeCode(20));
}

#[test]
fn error_apartment_already_initialized() {
    let err = Error::new(ErrorKind::ApartmentAlreadyInitialized);
    assert!(err.context.is_none());
    assert!(err.to_string().contains("already initialized"));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn error_display_type_mismatch() {
    let err = Error::type_mismatch(TypeTag::Int16, TypeTag::UInt8);
    assert_eq!(err.to_string(), "type mismatch: expected Int16, got UInt8");
}

#[test]
fn error_display_out_of_range() {
    let err = Error::out_of_range(TypeTag::UInt32, -1);
    assert_eq!(err.to_string(), "value -1 out of range for UInt32");
}

#[test]
fn error_display_unknown_code() {
    let err = Error::unknown_type_code(0);
    assert_eq!(err.to_string(), "unknown type code: 0");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_with_context() {
    let err = Error::type_mismatch(TypeTag::Rect, TypeTag::Size).with_context(
        ErrorContext::new()
            .with_operation("GetRect")
            .with_frame("layout"),
    );
    let ctx = err.context.as_ref().unwrap();
    assert_eq!(ctx.operation.as_deref(), Some("GetRect"));
    assert_eq!(ctx.stack, vec!["layout".to_string()]);
    assert_eq!(ctx.to_string(), "in GetRect\n  from layout\n");
}

#[test]
fn error_kind_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    let err = Error::unknown_type_code(99);
    assert_error(&err);
    assert_error(&err.kind);
}
