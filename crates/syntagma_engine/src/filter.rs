//! The filter stack and one-shot guard.
//!
//! Both are small owned state machines, one set per match context, so
//! sentences can be matched concurrently without interference.

use syntagma_foundation::TagSet;

/// Ordered exclusion predicates narrowing which elements later checks see.
///
/// An element is hidden iff it carries any tag of any active exclusion set
/// (visible elements "lack ALL of these tags"). Once-exclusions apply to
/// exactly the next executed applicability check and are then discarded
/// regardless of outcome; all-exclusions persist for the stack's life.
#[derive(Debug, Default)]
pub struct FilterStack {
    once: Vec<TagSet>,
    all: Vec<TagSet>,
}

impl FilterStack {
    /// Creates an empty filter stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an exclusion for the next executed check only. Multiple
    /// queued once-exclusions combine for that one check.
    pub fn push_once(&mut self, tags: TagSet) {
        self.once.push(tags);
    }

    /// Adds an exclusion active for every subsequent check.
    pub fn push_all(&mut self, tags: TagSet) {
        self.all.push(tags);
    }

    /// Returns the combined exclusion set for one applicability check,
    /// draining the queued once-exclusions.
    pub fn take_for_check(&mut self) -> TagSet {
        let mut excluded = TagSet::new();
        for tags in self.once.drain(..) {
            excluded = excluded.union(&tags);
        }
        for tags in &self.all {
            excluded = excluded.union(tags);
        }
        excluded
    }

    /// Returns the combined exclusion set without consuming anything.
    #[must_use]
    pub fn peek(&self) -> TagSet {
        self.once
            .iter()
            .chain(self.all.iter())
            .fold(TagSet::new(), |acc, tags| acc.union(tags))
    }

    /// Returns true if no exclusions are active or queued.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.once.is_empty() && self.all.is_empty()
    }
}

/// A single-slot boolean gate over the next dispatch attempt.
///
/// Set by a `when`-style call; cleared when the next attempt consults it,
/// whether or not that attempt fired. Attempts made with no guard set
/// proceed unconditionally.
#[derive(Debug, Default)]
pub struct Guard {
    condition: Option<bool>,
}

impl Guard {
    /// Creates an unset guard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the guard with a condition. A second `set` before the guard is
    /// consumed replaces the pending condition.
    pub fn set(&mut self, condition: bool) {
        self.condition = Some(condition);
    }

    /// Consumes the pending condition, if any. One-shot: after this call
    /// the guard is unset.
    pub fn take(&mut self) -> Option<bool> {
        self.condition.take()
    }

    /// Returns true if a condition is pending.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.condition.is_some()
    }
}
