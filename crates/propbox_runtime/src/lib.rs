//! Scoped runtime context for propbox.
//!
//! This crate provides:
//! - [`Apartment`] - The per-thread context guard that brackets boxing and retrieval
//! - [`ApartmentConfig`] - Threading model and tracing configuration
//! - [`Tracer`] - Opt-in tracing of boxing activity

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod apartment;
pub mod config;
pub mod trace;

pub use apartment::Apartment;
pub use config::{ApartmentConfig, ApartmentKind};
pub use trace::{
    TraceBuffer, TraceBufferStats, TraceEvent, TraceOutput, TraceRecord, Tracer, TracerConfig,
};
