//! Boxing: one creation operation per supported shape.
//!
//! Integer creators take any integer literal and reject values that do not fit
//! the target width and signedness. Everything else is total.

use std::sync::Arc;

use propbox_foundation::{
    Char16, DateTime, Error, Guid, Point, Rect, Result, Size, TimeSpan, TypeTag,
};

use crate::object::Object;
use crate::value::{BoxedValue, Payload};

/// Narrows an integer literal to `T`, failing instead of truncating.
fn narrow<T: TryFrom<i128>>(target: TypeTag, value: i128) -> Result<T> {
    T::try_from(value).map_err(|_| Error::out_of_range(target, value))
}

impl BoxedValue {
    /// Boxes an unsigned 8-bit integer.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `value` is not in `0..=255`.
    pub fn create_uint8(value: i128) -> Result<Self> {
        narrow(TypeTag::UInt8, value).map(Payload::UInt8).map(Self::from_payload)
    }

    /// Boxes a signed 16-bit integer.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `value` does not fit an `i16`.
    pub fn create_int16(value: i128) -> Result<Self> {
        narrow(TypeTag::Int16, value).map(Payload::Int16).map(Self::from_payload)
    }

    /// Boxes an unsigned 16-bit integer.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `value` does not fit a `u16`.
    pub fn create_uint16(value: i128) -> Result<Self> {
        narrow(TypeTag::UInt16, value).map(Payload::UInt16).map(Self::from_payload)
    }

    /// Boxes a signed 32-bit integer.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `value` does not fit an `i32`.
    pub fn create_int32(value: i128) -> Result<Self> {
        narrow(TypeTag::Int32, value).map(Payload::Int32).map(Self::from_payload)
    }

    /// Boxes an unsigned 32-bit integer.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `value` does not fit a `u32`.
    pub fn create_uint32(value: i128) -> Result<Self> {
        narrow(TypeTag::UInt32, value).map(Payload::UInt32).map(Self::from_payload)
    }

    /// Boxes a signed 64-bit integer.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `value` does not fit an `i64`.
    pub fn create_int64(value: i128) -> Result<Self> {
        narrow(TypeTag::Int64, value).map(Payload::Int64).map(Self::from_payload)
    }

    /// Boxes an unsigned 64-bit integer.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `value` does not fit a `u64`.
    pub fn create_uint64(value: i128) -> Result<Self> {
        narrow(TypeTag::UInt64, value).map(Payload::UInt64).map(Self::from_payload)
    }

    /// Boxes a single precision float.
    #[must_use]
    pub const fn create_single(value: f32) -> Self {
        Self::from_payload(Payload::Single(value))
    }

    /// Boxes a double literal as a single precision float.
    ///
    /// The value is rounded to the nearest `f32`, so retrieval is only accurate
    /// to about seven significant digits. Values beyond the `f32` range become
    /// infinities.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn create_single_from_f64(value: f64) -> Self {
        Self::create_single(value as f32)
    }

    /// Boxes a double precision float.
    #[must_use]
    pub const fn create_double(value: f64) -> Self {
        Self::from_payload(Payload::Double(value))
    }

    /// Boxes a UTF-16 code unit.
    #[must_use]
    pub const fn create_char16(value: u16) -> Self {
        Self::from_payload(Payload::Char16(Char16(value)))
    }

    /// Boxes a character as a single UTF-16 code unit.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for characters outside the Basic Multilingual Plane.
    pub fn create_char16_from_char(value: char) -> Result<Self> {
        Char16::try_from(value)
            .map(Payload::Char16)
            .map(Self::from_payload)
    }

    /// Boxes a boolean.
    #[must_use]
    pub const fn create_boolean(value: bool) -> Self {
        Self::from_payload(Payload::Boolean(value))
    }

    /// Boxes a string. Empty strings are allowed.
    #[must_use]
    pub fn create_string(value: impl Into<Arc<str>>) -> Self {
        Self::from_payload(Payload::String(value.into()))
    }

    /// Boxes an opaque object reference.
    #[must_use]
    pub const fn create_object(value: Object) -> Self {
        Self::from_payload(Payload::OpaqueObject(value))
    }

    /// Boxes an absolute instant.
    #[must_use]
    pub const fn create_date_time(value: DateTime) -> Self {
        Self::from_payload(Payload::DateTime(value))
    }

    /// Boxes an elapsed interval.
    #[must_use]
    pub const fn create_time_span(value: TimeSpan) -> Self {
        Self::from_payload(Payload::TimeSpan(value))
    }

    /// Boxes a GUID.
    #[must_use]
    pub const fn create_guid(value: Guid) -> Self {
        Self::from_payload(Payload::Guid(value))
    }

    /// Boxes a point.
    #[must_use]
    pub const fn create_point(value: Point) -> Self {
        Self::from_payload(Payload::Point(value))
    }

    /// Boxes a size.
    #[must_use]
    pub const fn create_size(value: Size) -> Self {
        Self::from_payload(Payload::Size(value))
    }

    /// Boxes a rectangle.
    #[must_use]
    pub const fn create_rect(value: Rect) -> Self {
        Self::from_payload(Payload::Rect(value))
    }
}

// Infallible conversions from native values. The native type already has the
// target width, so no range check is needed.

macro_rules! impl_from_native {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for BoxedValue {
                fn from(value: $ty) -> Self {
                    Self::from_payload(Payload::$variant(value))
                }
            }
        )*
    };
}

impl_from_native! {
    u8 => UInt8,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f32 => Single,
    f64 => Double,
    Char16 => Char16,
    bool => Boolean,
    Arc<str> => String,
    Object => OpaqueObject,
    DateTime => DateTime,
    TimeSpan => TimeSpan,
    Guid => Guid,
    Point => Point,
    Size => Size,
    Rect => Rect,
}

impl From<&str> for BoxedValue {
    fn from(value: &str) -> Self {
        Self::create_string(value)
    }
}

impl From<String> for BoxedValue {
    fn from(value: String) -> Self {
        Self::create_string(value)
    }
}
