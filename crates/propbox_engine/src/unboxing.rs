//! Typed retrieval.
//!
//! Each shape has exactly one fallible conversion: it succeeds iff the value
//! was boxed with that shape's tag and otherwise fails with `TypeMismatch`.
//! Payloads are never reinterpreted as another shape (no widening, no
//! int-to-float conversion).

use std::sync::Arc;

use propbox_foundation::{
    Char16, DateTime, Error, Guid, Point, Rect, Result, Size, TimeSpan, TypeTag,
};

use crate::object::Object;
use crate::value::{BoxedValue, Payload};

/// A native type that can be recovered from a [`BoxedValue`].
pub trait Unbox: Sized {
    /// The tag a value must carry to convert to `Self`.
    const TAG: TypeTag;

    /// Extracts the payload if it has this shape.
    fn from_payload(payload: &Payload) -> Option<Self>;
}

macro_rules! impl_unbox {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Unbox for $ty {
                const TAG: TypeTag = TypeTag::$variant;

                fn from_payload(payload: &Payload) -> Option<Self> {
                    match payload {
                        Payload::$variant(value) => Some(Clone::clone(value)),
                        _ => None,
                    }
                }
            }

            impl TryFrom<&BoxedValue> for $ty {
                type Error = Error;

                fn try_from(value: &BoxedValue) -> Result<Self> {
                    value.get()
                }
            }
        )*
    };
}

impl_unbox! {
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

impl Unbox for String {
    const TAG: TypeTag = TypeTag::String;

    fn from_payload(payload: &Payload) -> Option<Self> {
        match payload {
            Payload::String(s) => Some(s.to_string()),
            _ => None,
        }
    }
}

impl TryFrom<&BoxedValue> for String {
    type Error = Error;

    fn try_from(value: &BoxedValue) -> Result<Self> {
        value.get()
    }
}

impl BoxedValue {
    /// Retrieves the payload as `T`.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the value was not boxed as `T::TAG`.
    pub fn get<T: Unbox>(&self) -> Result<T> {
        T::from_payload(self.payload()).ok_or_else(|| self.mismatch(T::TAG))
    }

    fn mismatch(&self, expected: TypeTag) -> Error {
        Error::type_mismatch(expected, self.value_type())
    }

    /// Retrieves an unsigned 8-bit integer.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` unless the value is tagged `UInt8`.
    pub fn get_uint8(&self) -> Result<u8> {
        self.get()
    }

    /// Retrieves a signed 16-bit integer.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` unless the value is tagged `Int16`.
    pub fn get_int16(&self) -> Result<i16> {
        self.get()
    }

    /// Retrieves an unsigned 16-bit integer.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` unless the value is tagged `UInt16`.
    pub fn get_uint16(&self) -> Result<u16> {
        self.get()
    }

    /// Retrieves a signed 32-bit integer.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` unless the value is tagged `Int32`.
    pub fn get_int32(&self) -> Result<i32> {
        self.get()
    }

    /// Retrieves an unsigned 32-bit integer.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` unless the value is tagged `UInt32`.
    pub fn get_uint32(&self) -> Result<u32> {
        self.get()
    }

    /// Retrieves a signed 64-bit integer.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` unless the value is tagged `Int64`.
    pub fn get_int64(&self) -> Result<i64> {
        self.get()
    }

    /// Retrieves an unsigned 64-bit integer.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` unless the value is tagged `UInt64`.
    pub fn get_uint64(&self) -> Result<u64> {
        self.get()
    }

    /// Retrieves a single precision float.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` unless the value is tagged `Single`.
    pub fn get_single(&self) -> Result<f32> {
        self.get()
    }

    /// Retrieves a double precision float.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` unless the value is tagged `Double`.
    pub fn get_double(&self) -> Result<f64> {
        self.get()
    }

    /// Retrieves a UTF-16 code unit.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` unless the value is tagged `Char16`.
    pub fn get_char16(&self) -> Result<u16> {
        self.get::<Char16>().map(|c| c.0)
    }

    /// Retrieves a boolean.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` unless the value is tagged `Boolean`.
    pub fn get_boolean(&self) -> Result<bool> {
        self.get()
    }

    /// Borrows the string payload.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` unless the value is tagged `String`.
    pub fn get_string(&self) -> Result<&str> {
        match self.payload() {
            Payload::String(s) => Ok(s),
            _ => Err(self.mismatch(TypeTag::String)),
        }
    }

    /// Retrieves the shared string payload without copying it.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` unless the value is tagged `String`.
    pub fn get_string_arc(&self) -> Result<Arc<str>> {
        self.get()
    }

    /// Retrieves the object reference.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` unless the value is tagged `OpaqueObject`.
    pub fn get_object(&self) -> Result<Object> {
        self.get()
    }

    /// Retrieves an absolute instant.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` unless the value is tagged `DateTime`.
    pub fn get_date_time(&self) -> Result<DateTime> {
        self.get()
    }

    /// Retrieves an elapsed interval.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` unless the value is tagged `TimeSpan`.
    pub fn get_time_span(&self) -> Result<TimeSpan> {
        self.get()
    }

    /// Retrieves a GUID.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` unless the value is tagged `Guid`.
    pub fn get_guid(&self) -> Result<Guid> {
        self.get()
    }

    /// Retrieves a point.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` unless the value is tagged `Point`.
    pub fn get_point(&self) -> Result<Point> {
        self.get()
    }

    /// Retrieves a size.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` unless the value is tagged `Size`.
    pub fn get_size(&self) -> Result<Size> {
        self.get()
    }

    /// Retrieves a rectangle.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` unless the value is tagged `Rect`.
    pub fn get_rect(&self) -> Result<Rect> {
        self.get()
    }
}
