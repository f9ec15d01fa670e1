//! Integration tests for Layer 1: Engine
//!
//! Tests for BoxedValue creation, inspection, retrieval, and mismatch rejection.

mod boxing;
mod equality;
mod mismatch;
