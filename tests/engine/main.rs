//! Integration tests for Layer 2: Engine
//!
//! Tests for patterns, filters, guards, and case dispatch.
