//! Integration tests for type-mismatch rejection
//!
//! Retrieval never converts between shapes, not even between widths or
//! between numbers and text.

use propbox_engine::{BoxedValue, ErrorKind, Point, Size, TypeTag};

fn assert_mismatch<T: std::fmt::Debug>(
    result: propbox_engine::Result<T>,
    expected: TypeTag,
    actual: TypeTag,
) {
    let err = result.unwrap_err();
    assert_eq!(err.kind, ErrorKind::TypeMismatch { expected, actual });
}

// =============================================================================
// Numeric Widths
// =============================================================================

#[test]
fn no_widening() {
    let v = BoxedValue::create_uint8(250).unwrap();
    assert_mismatch(v.get_int16(), TypeTag::Int16, TypeTag::UInt8);
    assert_mismatch(v.get_uint16(), TypeTag::UInt16, TypeTag::UInt8);
    assert_mismatch(v.get_uint64(), TypeTag::UInt64, TypeTag::UInt8);
}

#[test]
fn no_narrowing() {
    let v = BoxedValue::create_int64(1).unwrap();
    assert_mismatch(v.get_int32(), TypeTag::Int32, TypeTag::Int64);
    assert_mismatch(v.get_uint8(), TypeTag::UInt8, TypeTag::Int64);
}

#[test]
fn floats_are_distinct() {
    let v = BoxedValue::create_single(1.0);
    assert_mismatch(v.get_double(), TypeTag::Double, TypeTag::Single);
    let v = BoxedValue::create_double(1.0);
    assert_mismatch(v.get_single(), TypeTag::Single, TypeTag::Double);
}

// =============================================================================
// Cross-Category
// =============================================================================

#[test]
fn char16_is_not_uint16() {
    let c = BoxedValue::create_char16(65);
    assert_mismatch(c.get_uint16(), TypeTag::UInt16, TypeTag::Char16);

    let n = BoxedValue::create_uint16(65).unwrap();
    assert_mismatch(n.get_char16(), TypeTag::Char16, TypeTag::UInt16);
}

#[test]
fn string_is_not_parsed() {
    let v = BoxedValue::create_string("42");
    assert_mismatch(v.get_int32(), TypeTag::Int32, TypeTag::String);
}

#[test]
fn boolean_is_not_numeric() {
    let v = BoxedValue::create_boolean(true);
    assert_mismatch(v.get_uint8(), TypeTag::UInt8, TypeTag::Boolean);
}

#[test]
fn point_and_size_are_distinct() {
    let p = BoxedValue::create_point(Point::new(2.0, 4.0));
    assert_mismatch(p.get_size(), TypeTag::Size, TypeTag::Point);

    let s = BoxedValue::create_size(Size::new(2.0, 4.0));
    assert_mismatch(s.get_point(), TypeTag::Point, TypeTag::Size);
    assert_mismatch(s.get_rect(), TypeTag::Rect, TypeTag::Size);
}

#[test]
fn mismatch_leaves_value_intact() {
    let v = BoxedValue::create_uint8(7).unwrap();
    assert!(v.get_string().is_err());
    assert_eq!(v.get_uint8().unwrap(), 7);
}
