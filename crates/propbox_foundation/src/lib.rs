//! Type tags, compound records, and errors for propbox.
//!
//! This crate provides:
//! - [`TypeTag`] - The closed registry of boxable shapes and their stable codes
//! - [`Char16`], [`DateTime`], [`TimeSpan`], [`Guid`], [`Point`], [`Size`], [`Rect`] - Compound records
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod structs;
pub mod tag;

pub use error::{Error, ErrorContext, ErrorKind};
pub use structs::{Char16, DateTime, Guid, Point, Rect, Size, TimeSpan};
pub use tag::TypeTag;

/// Result type for propbox operations.
pub type Result<T> = std::result::Result<T, Error>;
