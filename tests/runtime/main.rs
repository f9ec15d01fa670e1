//! Integration tests for Layer 2: Runtime
//!
//! Tests for the apartment lifecycle, conformance inside a live apartment,
//! and tracing.

mod apartment;
mod tracing;
