//! Type tags identifying the shape held by a boxed value.

use std::fmt;

use crate::error::Error;

/// Type tag identifying which shape a boxed value holds.
///
/// The discriminants are stable, caller-visible codes. Two tags are equal iff
/// their codes are equal. The set is closed: there is no run-time registration.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum TypeTag {
    /// Unsigned 8-bit integer.
    UInt8 = 1,
    /// Signed 16-bit integer.
    Int16 = 2,
    /// Unsigned 16-bit integer.
    UInt16 = 3,
    /// Signed 32-bit integer.
    Int32 = 4,
    /// Unsigned 32-bit integer.
    UInt32 = 5,
    /// Signed 64-bit integer.
    Int64 = 6,
    /// Unsigned 64-bit integer.
    UInt64 = 7,
    /// IEEE-754 single precision float.
    Single = 8,
    /// IEEE-754 double precision float.
    Double = 9,
    /// A single UTF-16 code unit.
    Char16 = 10,
    /// Boolean.
    Boolean = 11,
    /// Text string.
    String = 12,
    /// Reference to an arbitrary non-primitive object.
    OpaqueObject = 13,
    /// Absolute instant as a tick count.
    DateTime = 14,
    /// Elapsed interval as a tick count.
    TimeSpan = 15,
    /// 128-bit globally unique identifier.
    Guid = 16,
    /// 2D point.
    Point = 17,
    /// 2D size.
    Size = 18,
    /// 2D rectangle.
    Rect = 19,
}

impl TypeTag {
    /// Every tag, in code order.
    pub const ALL: [TypeTag; 19] = [
        Self::UInt8,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::Single,
        Self::Double,
        Self::Char16,
        Self::Boolean,
        Self::String,
        Self::OpaqueObject,
        Self::DateTime,
        Self::TimeSpan,
        Self::Guid,
        Self::Point,
        Self::Size,
        Self::Rect,
    ];

    /// Returns the stable integer code of this tag.
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Looks up the tag for an integer code.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTypeCode` if no tag carries `code`.
    pub fn from_code(code: u32) -> crate::Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.code() == code)
            .ok_or_else(|| Error::unknown_type_code(code))
    }

    /// Returns the canonical name of the shape.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UInt8 => "UInt8",
            Self::Int16 => "Int16",
            Self::UInt16 => "UInt16",
            Self::Int32 => "Int32",
            Self::UInt32 => "UInt32",
            Self::Int64 => "Int64",
            Self::UInt64 => "UInt64",
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Char16 => "Char16",
            Self::Boolean => "Boolean",
            Self::String => "String",
            Self::OpaqueObject => "OpaqueObject",
            Self::DateTime => "DateTime",
            Self::TimeSpan => "TimeSpan",
            Self::Guid => "Guid",
            Self::Point => "Point",
            Self::Size => "Size",
            Self::Rect => "Rect",
        }
    }

    /// Returns true for the integer and floating point shapes.
    #[must_use]
    pub const fn is_numeric_scalar(self) -> bool {
        matches!(
            self,
            Self::UInt8
                | Self::Int16
                | Self::UInt16
                | Self::Int32
                | Self::UInt32
                | Self::Int64
                | Self::UInt64
                | Self::Single
                | Self::Double
        )
    }

    /// Returns true for the fixed-field record shapes.
    #[must_use]
    pub const fn is_compound(self) -> bool {
        matches!(
            self,
            Self::DateTime | Self::TimeSpan | Self::Guid | Self::Point | Self::Size | Self::Rect
        )
    }
}

impl TryFrom<u32> for TypeTag {
    type Error = Error;

    fn try_from(code: u32) -> crate::Result<Self> {
        Self::from_code(code)
    }
}

impl From<TypeTag> for u32 {
    fn from(tag: TypeTag) -> Self {
        tag.code()
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.code())
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
