//! Propbox - Type-tagged boxed values
//!
//! This crate re-exports all layers of the Propbox system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: propbox_runtime    — Apartment lifecycle, tracing
//! Layer 1: propbox_engine     — BoxedValue creation, inspection, retrieval
//! Layer 0: propbox_foundation — Core types (TypeTag, compound records, Error)
//! ```

pub use propbox_engine as engine;
pub use propbox_foundation as foundation;
pub use propbox_runtime as runtime;
