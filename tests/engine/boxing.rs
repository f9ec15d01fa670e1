//! Integration tests for BoxedValue creation
//!
//! Tests creators, range checks, and native conversions.

use propbox_engine::{BoxedValue, ErrorKind, Payload, Point, Rect, TypeTag};

// =============================================================================
// Integer Range Checks
// =============================================================================

#[test]
fn uint8_boundaries() {
    assert!(BoxedValue::create_uint8(0).is_ok());
    assert!(BoxedValue::create_uint8(255).is_ok());
    assert!(BoxedValue::create_uint8(256).is_err());
    assert!(BoxedValue::create_uint8(-1).is_err());
}

#[test]
fn int16_boundaries() {
    assert!(BoxedValue::create_int16(-32768).is_ok());
    assert!(BoxedValue::create_int16(32767).is_ok());
    assert!(BoxedValue::create_int16(32768).is_err());
    assert!(BoxedValue::create_int16(-32769).is_err());
}

#[test]
fn uint32_rejects_negative() {
    let err = BoxedValue::create_uint32(-1).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::OutOfRange {
            target: TypeTag::UInt32,
            value: -1
        }
    );
}

#[test]
fn int64_accepts_full_width() {
    assert!(BoxedValue::create_int64(i128::from(i64::MIN)).is_ok());
    assert!(BoxedValue::create_int64(i128::from(i64::MAX)).is_ok());
    assert!(BoxedValue::create_int64(i128::from(i64::MAX) + 1).is_err());
}

#[test]
fn uint64_accepts_full_width() {
    assert!(BoxedValue::create_uint64(i128::from(u64::MAX)).is_ok());
    assert!(BoxedValue::create_uint64(i128::from(u64::MAX) + 1).is_err());
    assert!(BoxedValue::create_uint64(-1).is_err());
}

// =============================================================================
// Tags at Construction
// =============================================================================

#[test]
fn every_creator_sets_its_tag() {
    let cases = [
        (BoxedValue::create_uint8(1).unwrap(), TypeTag::UInt8),
        (BoxedValue::create_int16(1).unwrap(), TypeTag::Int16),
        (BoxedValue::create_uint16(1).unwrap(), TypeTag::UInt16),
        (BoxedValue::create_int32(1).unwrap(), TypeTag::Int32),
        (BoxedValue::create_uint32(1).unwrap(), TypeTag::UInt32),
        (BoxedValue::create_int64(1).unwrap(), TypeTag::Int64),
        (BoxedValue::create_uint64(1).unwrap(), TypeTag::UInt64),
        (BoxedValue::create_single(1.0), TypeTag::Single),
        (BoxedValue::create_double(1.0), TypeTag::Double),
        (BoxedValue::create_char16(0x41), TypeTag::Char16),
        (BoxedValue::create_boolean(true), TypeTag::Boolean),
        (BoxedValue::create_string("x"), TypeTag::String),
        (
            BoxedValue::create_point(Point::new(1.0, 2.0)),
            TypeTag::Point,
        ),
        (
            BoxedValue::create_rect(Rect::new(1.0, 2.0, 3.0, 4.0)),
            TypeTag::Rect,
        ),
    ];
    for (value, tag) in cases {
        assert_eq!(value.value_type(), tag);
        assert_eq!(value.payload().tag(), tag);
    }
}

#[test]
fn numeric_classification() {
    assert!(BoxedValue::create_double(0.5).is_numeric_scalar());
    assert!(BoxedValue::create_uint8(0).unwrap().is_numeric_scalar());
    assert!(!BoxedValue::create_char16(0x30).is_numeric_scalar());
    assert!(!BoxedValue::create_boolean(false).is_numeric_scalar());
    assert!(!BoxedValue::create_string("1").is_numeric_scalar());
}

// =============================================================================
// Native Conversions
// =============================================================================

#[test]
fn from_native_picks_matching_shape() {
    assert_eq!(BoxedValue::from(250_u8).value_type(), TypeTag::UInt8);
    assert_eq!(BoxedValue::from(-5_i16).value_type(), TypeTag::Int16);
    assert_eq!(BoxedValue::from(5_u64).value_type(), TypeTag::UInt64);
    assert_eq!(BoxedValue::from(1.5_f32).value_type(), TypeTag::Single);
    assert_eq!(BoxedValue::from("Ni!").value_type(), TypeTag::String);
    assert_eq!(
        BoxedValue::from(String::from("Ni!")).value_type(),
        TypeTag::String
    );
}

#[test]
fn char_outside_bmp_is_rejected() {
    assert!(BoxedValue::create_char16_from_char('z').is_ok());
    assert!(BoxedValue::create_char16_from_char('\u{1F600}').is_err());
}

#[test]
fn payload_is_matchable() {
    let value = BoxedValue::create_string("hello");
    match value.payload() {
        Payload::String(s) => assert_eq!(&**s, "hello"),
        other => panic!("unexpected payload {other:?}"),
    }
}

#[test]
fn clones_are_equal() {
    let value = BoxedValue::create_rect(Rect::new(2.0, 4.0, 6.0, 8.0));
    let copy = value.clone();
    assert_eq!(value, copy);
}
