//! The boxed value container.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use propbox_foundation::{Char16, DateTime, Guid, Point, Rect, Size, TimeSpan, TypeTag};

use crate::object::Object;

/// A type-tagged, immutable boxed value.
///
/// The tag is derived from the payload variant, so a value's tag and payload
/// can never disagree. Values are cheaply cloneable (strings and objects are
/// shared) and safe to share across threads.
///
/// Create values with the `create_*` constructors or `From` conversions, and
/// recover them with the matching `get_*` accessor.
#[derive(Clone)]
pub struct BoxedValue {
    payload: Payload,
}

/// The payload of a boxed value, one variant per [`TypeTag`].
///
/// Borrowed read-only through [`BoxedValue::payload`] for exhaustive matching.
#[derive(Clone, Debug)]
pub enum Payload {
    /// Unsigned 8-bit integer.
    UInt8(u8),
    /// Signed 16-bit integer.
    Int16(i16),
    /// Unsigned 16-bit integer.
    UInt16(u16),
    /// Signed 32-bit integer.
    Int32(i32),
    /// Unsigned 32-bit integer.
    UInt32(u32),
    /// Signed 64-bit integer.
    Int64(i64),
    /// Unsigned 64-bit integer.
    UInt64(u64),
    /// Single precision float.
    Single(f32),
    /// Double precision float.
    Double(f64),
    /// UTF-16 code unit.
    Char16(Char16),
    /// Boolean.
    Boolean(bool),
    /// Text string.
    String(Arc<str>),
    /// Opaque object reference.
    OpaqueObject(Object),
    /// Absolute instant.
    DateTime(DateTime),
    /// Elapsed interval.
    TimeSpan(TimeSpan),
    /// Globally unique identifier.
    Guid(Guid),
    /// 2D point.
    Point(Point),
    /// 2D size.
    Size(Size),
    /// 2D rectangle.
    Rect(Rect),
}

impl Payload {
    /// Returns the tag matching this payload's shape.
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        match self {
            Self::UInt8(_) => TypeTag::UInt8,
            Self::Int16(_) => TypeTag::Int16,
            Self::UInt16(_) => TypeTag::UInt16,
            Self::Int32(_) => TypeTag::Int32,
            Self::UInt32(_) => TypeTag::UInt32,
            Self::Int64(_) => TypeTag::Int64,
            Self::UInt64(_) => TypeTag::UInt64,
            Self::Single(_) => TypeTag::Single,
            Self::Double(_) => TypeTag::Double,
            Self::Char16(_) => TypeTag::Char16,
            Self::Boolean(_) => TypeTag::Boolean,
            Self::String(_) => TypeTag::String,
            Self::OpaqueObject(_) => TypeTag::OpaqueObject,
            Self::DateTime(_) => TypeTag::DateTime,
            Self::TimeSpan(_) => TypeTag::TimeSpan,
            Self::Guid(_) => TypeTag::Guid,
            Self::Point(_) => TypeTag::Point,
            Self::Size(_) => TypeTag::Size,
            Self::Rect(_) => TypeTag::Rect,
        }
    }
}

impl BoxedValue {
    pub(crate) const fn from_payload(payload: Payload) -> Self {
        Self { payload }
    }

    /// Returns the tag fixed at construction.
    #[must_use]
    pub const fn value_type(&self) -> TypeTag {
        self.payload.tag()
    }

    /// Returns true if the value holds an integer or floating point number.
    #[must_use]
    pub const fn is_numeric_scalar(&self) -> bool {
        self.value_type().is_numeric_scalar()
    }

    /// Borrows the payload for exhaustive matching.
    #[must_use]
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }
}

// Floats compare by bits so that Eq stays reflexive and agrees with Hash.
impl PartialEq for BoxedValue {
    fn eq(&self, other: &Self) -> bool {
        use Payload as P;
        match (&self.payload, &other.payload) {
            (P::UInt8(a), P::UInt8(b)) => a == b,
            (P::Int16(a), P::Int16(b)) => a == b,
            (P::UInt16(a), P::UInt16(b)) => a == b,
            (P::Int32(a), P::Int32(b)) => a == b,
            (P::UInt32(a), P::UInt32(b)) => a == b,
            (P::Int64(a), P::Int64(b)) => a == b,
            (P::UInt64(a), P::UInt64(b)) => a == b,
            (P::Single(a), P::Single(b)) => a.to_bits() == b.to_bits(),
            (P::Double(a), P::Double(b)) => a.to_bits() == b.to_bits(),
            (P::Char16(a), P::Char16(b)) => a == b,
            (P::Boolean(a), P::Boolean(b)) => a == b,
            (P::String(a), P::String(b)) => a == b,
            (P::OpaqueObject(a), P::OpaqueObject(b)) => a == b,
            (P::DateTime(a), P::DateTime(b)) => a == b,
            (P::TimeSpan(a), P::TimeSpan(b)) => a == b,
            (P::Guid(a), P::Guid(b)) => a == b,
            (P::Point(a), P::Point(b)) => a == b,
            (P::Size(a), P::Size(b)) => a == b,
            (P::Rect(a), P::Rect(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for BoxedValue {}

impl Hash for BoxedValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value_type().hash(state);
        match &self.payload {
            Payload::UInt8(n) => n.hash(state),
            Payload::Int16(n) => n.hash(state),
            Payload::UInt16(n) => n.hash(state),
            Payload::Int32(n) => n.hash(state),
            Payload::UInt32(n) => n.hash(state),
            Payload::Int64(n) => n.hash(state),
            Payload::UInt64(n) => n.hash(state),
            Payload::Single(n) => n.to_bits().hash(state),
            Payload::Double(n) => n.to_bits().hash(state),
            Payload::Char16(c) => c.hash(state),
            Payload::Boolean(b) => b.hash(state),
            Payload::String(s) => s.hash(state),
            Payload::OpaqueObject(o) => o.hash(state),
            Payload::DateTime(d) => d.hash(state),
            Payload::TimeSpan(t) => t.hash(state),
            Payload::Guid(g) => g.hash(state),
            Payload::Point(p) => p.hash(state),
            Payload::Size(s) => s.hash(state),
            Payload::Rect(r) => r.hash(state),
        }
    }
}

impl fmt::Debug for BoxedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.value_type();
        match &self.payload {
            Payload::String(s) => write!(f, "{tag}({s:?})"),
            Payload::Char16(c) => write!(f, "{tag}({:#06x})", c.0),
            Payload::OpaqueObject(o) => write!(f, "{tag}({o:?})"),
            _ => write!(f, "{tag}({self})"),
        }
    }
}

impl fmt::Display for BoxedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Payload::UInt8(n) => write!(f, "{n}"),
            Payload::Int16(n) => write!(f, "{n}"),
            Payload::UInt16(n) => write!(f, "{n}"),
            Payload::Int32(n) => write!(f, "{n}"),
            Payload::UInt32(n) => write!(f, "{n}"),
            Payload::Int64(n) => write!(f, "{n}"),
            Payload::UInt64(n) => write!(f, "{n}"),
            Payload::Single(n) => write!(f, "{n}"),
            Payload::Double(n) => write!(f, "{n}"),
            Payload::Char16(c) => write!(f, "{c}"),
            Payload::Boolean(b) => write!(f, "{b}"),
            Payload::String(s) => write!(f, "{s}"),
            Payload::OpaqueObject(o) => write!(f, "{o}"),
            Payload::DateTime(d) => write!(f, "@{}", d.universal_time),
            Payload::TimeSpan(t) => write!(f, "{}t", t.duration),
            Payload::Guid(g) => write!(f, "{{{g}}}"),
            Payload::Point(p) => write!(f, "{p}"),
            Payload::Size(s) => write!(f, "{s}"),
            Payload::Rect(r) => write!(f, "{r}"),
        }
    }
}
