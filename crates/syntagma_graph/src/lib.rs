//! Sentence storage for the Syntagma matcher.
//!
//! This crate provides:
//! - [`Sentence`] - One sentence's ordered element arena plus its relation graph
//! - [`Element`] - A tagged syntactic unit (word or phrase)
//! - [`Relation`] - A semantic edge established by a binding action

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod relation;
pub mod sentence;

pub use relation::{Relation, RelationStore};
pub use sentence::{Element, Sentence};
