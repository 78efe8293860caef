//! Integration tests for Layer 1: Graph
//!
//! Tests for sentence construction and the relation graph.

mod sentences;
