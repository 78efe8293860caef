//! Syntagma - capability-typed structural matching and binding
//!
//! This crate re-exports all layers of the Syntagma system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: syntagma_engine     — Patterns, filters, guards, case dispatch
//! Layer 1: syntagma_graph      — Sentence element arena, relation edges
//! Layer 0: syntagma_foundation — Core types (TagId, TagSet, ElementId, Error)
//! ```

pub use syntagma_engine as engine;
pub use syntagma_foundation as foundation;
pub use syntagma_graph as graph;
