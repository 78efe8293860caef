//! Core types for the Syntagma matcher.
//!
//! This crate provides:
//! - [`ElementId`] - Reference identity for sentence elements
//! - [`TagId`] / [`RelationId`] - Interned capability tags and relation kinds
//! - [`TagSet`] - Bitset of capability tags for fast conjunctive checks
//! - [`Error`] - Rich error types with context
//! - [`SyVec`] - Persistent vector with structural sharing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod element;
pub mod error;
pub mod intern;
pub mod tagset;

pub use collections::SyVec;
pub use element::ElementId;
pub use error::{Error, ErrorContext, ErrorKind};
pub use intern::{Interner, RelationId, TagId};
pub use tagset::TagSet;

/// Convenience result type for Syntagma operations.
pub type Result<T> = std::result::Result<T, Error>;
