//! Compound record shapes that can be boxed natively.
//!
//! Each record is a plain fixed-field value with no hidden state. The float
//! records compare and hash by bit pattern so that `Eq` and `Hash` agree.

use std::fmt;
use std::hash::{Hash, Hasher};

/// An absolute instant expressed as a signed tick count.
///
/// Tick size and epoch are an external convention; zero is a well-defined
/// reference instant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
    /// Ticks since the reference instant.
    pub universal_time: i64,
}

impl DateTime {
    /// Creates an instant from a tick count.
    #[must_use]
    pub const fn new(universal_time: i64) -> Self {
        Self { universal_time }
    }
}

/// An elapsed interval expressed as a signed tick count (may be negative).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeSpan {
    /// Length of the interval in ticks.
    pub duration: i64,
}

impl TimeSpan {
    /// Creates an interval from a tick count.
    #[must_use]
    pub const fn new(duration: i64) -> Self {
        Self { duration }
    }

    /// Returns true if the interval runs backwards.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.duration < 0
    }
}

/// A single UTF-16 code unit.
///
/// Any `u16` is valid, including lone surrogates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Char16(pub u16);

impl Char16 {
    /// Returns the code unit as a `char`, or `None` for a surrogate.
    #[must_use]
    pub fn to_char(self) -> Option<char> {
        char::from_u32(u32::from(self.0))
    }
}

impl TryFrom<char> for Char16 {
    type Error = crate::Error;

    /// Encodes a character as one UTF-16 code unit.
    ///
    /// Characters outside the Basic Multilingual Plane need two units and are rejected.
    fn try_from(c: char) -> crate::Result<Self> {
        let mut units = [0u16; 2];
        match *c.encode_utf16(&mut units) {
            [unit] => Ok(Self(unit)),
            _ => Err(crate::Error::out_of_range(
                crate::TypeTag::Char16,
                i128::from(u32::from(c)),
            )),
        }
    }
}

impl fmt::Display for Char16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_char() {
            Some(c) => write!(f, "{c}"),
            None => write!(f, "\\u{{{:04x}}}", self.0),
        }
    }
}

/// A 128-bit globally unique identifier in its conventional field split.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Guid {
    /// First 32 bits.
    pub data1: u32,
    /// Next 16 bits.
    pub data2: u16,
    /// Next 16 bits.
    pub data3: u16,
    /// Final 64 bits, in byte order.
    pub data4: [u8; 8],
}

impl Guid {
    /// Creates a GUID from its fields.
    #[must_use]
    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// Splits a 128-bit integer (most significant bits first) into GUID fields.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_u128(value: u128) -> Self {
        let tail = (value as u64).to_be_bytes();
        Self {
            data1: (value >> 96) as u32,
            data2: (value >> 80) as u16,
            data3: (value >> 64) as u16,
            data4: tail,
        }
    }

    /// Joins the fields back into a 128-bit integer.
    #[must_use]
    pub const fn to_u128(self) -> u128 {
        ((self.data1 as u128) << 96)
            | ((self.data2 as u128) << 80)
            | ((self.data3 as u128) << 64)
            | (u64::from_be_bytes(self.data4) as u128)
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.data4;
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.data1, self.data2, self.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
        )
    }
}

/// A 2D point.
#[derive(Copy, Clone, Debug, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A 2D size.
#[derive(Copy, Clone, Debug, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A 2D rectangle given by its origin and extent.
#[derive(Copy, Clone, Debug, Default)]
pub struct Rect {
    /// Horizontal coordinate of the origin.
    pub x: f64,
    /// Vertical coordinate of the origin.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from an origin point and a size.
    #[must_use]
    pub const fn from_parts(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Returns the origin corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the extent.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

// Bitwise float equality keeps Eq reflexive (NaN == NaN) and consistent with Hash.

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl PartialEq for Size {
    fn eq(&self, other: &Self) -> bool {
        self.width.to_bits() == other.width.to_bits()
            && self.height.to_bits() == other.height.to_bits()
    }
}

impl Eq for Size {}

impl Hash for Size {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.to_bits().hash(state);
        self.height.to_bits().hash(state);
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        self.origin() == other.origin() && self.size() == other.size()
    }
}

impl Eq for Rect {}

impl Hash for Rect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.origin().hash(state);
        self.size().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.origin(), self.size())
    }
}
