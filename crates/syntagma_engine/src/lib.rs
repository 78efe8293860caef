//! Structural pattern matching and binding for Syntagma.
//!
//! This crate provides:
//! - [`Pattern`] - Ordered capability-tag templates with arity validation
//! - [`MatchContext`] - Per-sentence view, filter, guard, and acceptance state
//! - [`Case`] / [`MatchExpression`] - Declaration-ordered dispatch of
//!   (pattern, binding action) pairs
//! - [`Matched`] - Positional, capability-checked captures handed to actions

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bind;
pub mod case;
pub mod context;
pub mod filter;
pub mod pattern;

pub use bind::{BindingAction, CapRef, Matched};
pub use case::{Case, MatchExpression, MatchReport};
pub use context::MatchContext;
pub use filter::{FilterStack, Guard};
pub use pattern::{CheckOutcome, Mismatch, Pattern};
