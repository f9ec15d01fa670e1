//! Boxed typed values for propbox.
//!
//! This crate provides:
//! - [`BoxedValue`] - An immutable, type-tagged container for one value
//! - `create_*` boxing constructors, one per shape, with range checking for integers
//! - `get_*` typed retrieval and the [`Unbox`] trait, failing with `TypeMismatch`
//! - [`Object`] - Opaque shared object references
//!
//! # Example
//!
//! ```
//! use propbox_engine::{BoxedValue, Rect, TypeTag};
//!
//! let v = BoxedValue::create_uint8(250).unwrap();
//! assert_eq!(v.value_type(), TypeTag::UInt8);
//! assert_eq!(v.get_uint8().unwrap(), 250);
//! assert!(v.get_int16().is_err());
//!
//! let r = BoxedValue::create_rect(Rect::new(2.0, 4.0, 6.0, 8.0));
//! assert_eq!(r.value_type().code(), 19);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod boxing;
pub mod object;
pub mod unboxing;
pub mod value;

pub use object::Object;
pub use unboxing::Unbox;
pub use value::{BoxedValue, Payload};

pub use propbox_foundation::{
    Char16, DateTime, Error, ErrorContext, ErrorKind, Guid, Point, Rect, Result, Size, TimeSpan,
    TypeTag,
};
