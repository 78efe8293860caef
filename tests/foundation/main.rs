//! Integration tests for Layer 0: Foundation
//!
//! Tests for interning, tag sets, and error types.

mod interning;
mod tagsets;
