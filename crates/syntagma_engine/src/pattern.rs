//! Structural templates over capability tags.
//!
//! A [`Pattern`] is an ordered, runtime-length list of capability tags. The
//! applicability check is strictly positional and prefix-anchored: tag *i*
//! must be satisfied by the element at position *i* of the filtered view.
//! There is no gap-skipping, reordering, or sliding-window search.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use syntagma_foundation::{ElementId, Error, Interner, Result, TagId};
use syntagma_graph::Sentence;

/// An immutable ordered list of required capability tags.
///
/// Serializes as its tag list; deserialization re-runs the arity check, so
/// a malformed pattern cannot enter through the wire either.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<TagId>", into = "Vec<TagId>"))]
pub struct Pattern {
    tags: Vec<TagId>,
}

impl Pattern {
    /// Minimum supported pattern arity.
    pub const MIN_ARITY: usize = 2;

    /// Maximum supported pattern arity.
    pub const MAX_ARITY: usize = 20;

    /// Creates a pattern from a list of capability tags.
    ///
    /// # Errors
    /// Returns [`ErrorKind::PatternArity`](syntagma_foundation::ErrorKind::PatternArity)
    /// if the list is shorter than [`MIN_ARITY`](Self::MIN_ARITY) or longer
    /// than [`MAX_ARITY`](Self::MAX_ARITY). Malformed patterns are rejected
    /// at declaration time, never silently ignored.
    pub fn new(tags: Vec<TagId>) -> Result<Self> {
        if tags.len() < Self::MIN_ARITY || tags.len() > Self::MAX_ARITY {
            return Err(Error::pattern_arity(
                Self::MIN_ARITY,
                Self::MAX_ARITY,
                tags.len(),
            ));
        }
        Ok(Self { tags })
    }

    /// Creates a pattern from tag names, interning them as needed.
    ///
    /// # Errors
    /// Same arity constraints as [`new`](Self::new).
    pub fn parse(names: &[&str], interner: &mut Interner) -> Result<Self> {
        let tags = names.iter().map(|n| interner.intern_tag(n)).collect();
        Self::new(tags)
    }

    /// Returns the pattern's arity.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Always false; a pattern has at least [`MIN_ARITY`](Self::MIN_ARITY) tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Returns the required tags in positional order.
    #[must_use]
    pub fn tags(&self) -> &[TagId] {
        &self.tags
    }

    /// Returns the tag required at `position`.
    #[must_use]
    pub fn tag_at(&self, position: usize) -> Option<TagId> {
        self.tags.get(position).copied()
    }

    /// Checks this pattern against the prefix of `view`.
    ///
    /// Succeeds iff the view holds at least `len()` elements and, for every
    /// position `i`, the element at `i` satisfies the tag at `i`.
    /// Conjunctive, ordered, all-or-nothing.
    #[must_use]
    pub fn matches_prefix(&self, view: &[ElementId], sentence: &Sentence) -> bool {
        if view.len() < self.tags.len() {
            return false;
        }
        self.tags
            .iter()
            .zip(view.iter())
            .all(|(&tag, &id)| sentence.satisfies(id, tag))
    }

    /// Checks this pattern against the prefix of `view`, reporting where
    /// and why a failed check failed.
    #[must_use]
    pub fn explain_prefix(&self, view: &[ElementId], sentence: &Sentence) -> CheckOutcome {
        if view.len() < self.tags.len() {
            return CheckOutcome::failed(Mismatch::ViewTooShort {
                needed: self.tags.len(),
                actual: view.len(),
            });
        }

        for (position, (&tag, &id)) in self.tags.iter().zip(view.iter()).enumerate() {
            if !sentence.satisfies(id, tag) {
                return CheckOutcome::failed(Mismatch::TagUnsatisfied {
                    position,
                    required: tag,
                    element: id,
                });
            }
        }

        CheckOutcome::matched()
    }
}

impl TryFrom<Vec<TagId>> for Pattern {
    type Error = Error;

    fn try_from(tags: Vec<TagId>) -> Result<Self> {
        Self::new(tags)
    }
}

impl From<Pattern> for Vec<TagId> {
    fn from(pattern: Pattern) -> Self {
        pattern.tags
    }
}

// =============================================================================
// Check Explanation Types
// =============================================================================

/// Reason why an applicability check failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mismatch {
    /// The filtered view holds fewer elements than the pattern requires.
    ViewTooShort {
        /// The pattern's arity.
        needed: usize,
        /// The view's length.
        actual: usize,
    },

    /// An element did not satisfy the tag required at its position.
    TagUnsatisfied {
        /// The first failing pattern position (0-based).
        position: usize,
        /// The capability tag required there.
        required: TagId,
        /// The element that fell short.
        element: ElementId,
    },
}

/// Result of explaining an applicability check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Did the prefix match?
    pub matched: bool,
    /// Why the check failed, if it did.
    pub failure: Option<Mismatch>,
}

impl CheckOutcome {
    /// Creates a successful outcome.
    #[must_use]
    pub fn matched() -> Self {
        Self {
            matched: true,
            failure: None,
        }
    }

    /// Creates a failed outcome with the given reason.
    #[must_use]
    pub fn failed(reason: Mismatch) -> Self {
        Self {
            matched: false,
            failure: Some(reason),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
