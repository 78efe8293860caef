//! Per-sentence matching session.
//!
//! A [`MatchContext`] owns the mutable state of one matching attempt: the
//! view of not-yet-consumed elements, the active filters, the one-shot
//! guard, and the acceptance flag. It is created per attempt, discarded when
//! the chain completes, and never shared across sentences.

use syntagma_foundation::{ElementId, ErrorKind, Result, SyVec, TagSet};
use syntagma_graph::Sentence;

use crate::bind::Matched;
use crate::case::Case;
use crate::filter::{FilterStack, Guard};

/// Mutable per-sentence matching session.
pub struct MatchContext<'s> {
    sentence: &'s mut Sentence,
    /// Elements not yet consumed, in surface order. Filters narrow this
    /// further per check; consumption removes matched elements for good.
    remaining: SyVec<ElementId>,
    filters: FilterStack,
    guard: Guard,
    accepted: bool,
}

impl<'s> MatchContext<'s> {
    /// Creates a fresh context over one sentence. The initial view is the
    /// full sequence.
    #[must_use]
    pub fn new(sentence: &'s mut Sentence) -> Self {
        let remaining = sentence.ids().collect();
        Self {
            sentence,
            remaining,
            filters: FilterStack::new(),
            guard: Guard::new(),
            accepted: false,
        }
    }

    /// Read access to the sentence, for guard predicates and inspection.
    #[must_use]
    pub fn sentence(&self) -> &Sentence {
        self.sentence
    }

    /// Returns the outcome of the most recent dispatch.
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// Returns the number of not-yet-consumed elements, ignoring filters.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Returns the view the next check would see, without consuming queued
    /// once-filters.
    #[must_use]
    pub fn visible(&self) -> Vec<ElementId> {
        let excluded = self.filters.peek();
        self.apply_exclusion(&excluded)
    }

    /// Queues an exclusion filter for the next executed check only.
    pub fn filter_once(&mut self, tags: TagSet) -> &mut Self {
        self.filters.push_once(tags);
        self
    }

    /// Adds an exclusion filter for the remainder of this context's life.
    pub fn filter_all(&mut self, tags: TagSet) -> &mut Self {
        self.filters.push_all(tags);
        self
    }

    /// Arms the guard: the next dispatch is attempted only if `condition`
    /// holds and nothing has been accepted yet; the guard then clears
    /// regardless of outcome.
    pub fn when(&mut self, condition: bool) -> &mut Self {
        self.guard.set(condition);
        self
    }

    /// Consuming dispatch: on success the matched prefix is removed from
    /// the view, so the next case sees only the tail.
    ///
    /// Returns true if the case fired.
    ///
    /// # Errors
    /// Propagates errors raised by the binding action.
    pub fn dispatch(&mut self, case: &Case) -> Result<bool> {
        self.attempt(case, true)
    }

    /// Non-consuming dispatch: the check runs against the full filtered
    /// view and the view is left unchanged even on success.
    ///
    /// Returns true if the case fired.
    ///
    /// # Errors
    /// Propagates errors raised by the binding action.
    pub fn try_dispatch(&mut self, case: &Case) -> Result<bool> {
        self.attempt(case, false)
    }

    fn apply_exclusion(&self, excluded: &TagSet) -> Vec<ElementId> {
        self.remaining
            .iter()
            .filter(|&&id| {
                self.sentence
                    .get(id)
                    .is_some_and(|e| e.tags().is_disjoint(excluded))
            })
            .copied()
            .collect()
    }

    fn attempt(&mut self, case: &Case, consume: bool) -> Result<bool> {
        // The guard gates exactly this attempt and then clears. A
        // suppressed attempt runs no check, so queued once-filters stay
        // queued for the next executed check.
        if let Some(condition) = self.guard.take() {
            if !condition || self.accepted {
                return Ok(false);
            }
        }

        let excluded = self.filters.take_for_check();
        let view = self.apply_exclusion(&excluded);

        if !case.pattern().matches_prefix(&view, self.sentence) {
            self.accepted = false;
            return Ok(false);
        }

        let matched = match Matched::bind(case.pattern(), &view, self.sentence) {
            Ok(matched) => matched,
            // The capability model contradicted the check's own judgment:
            // fail this single case fast, never invoke the action, and let
            // the chain proceed.
            Err(e) if matches!(e.kind, ErrorKind::CapabilityMismatch { .. }) => {
                self.accepted = false;
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        case.fire(self.sentence, &matched)?;
        self.accepted = true;

        if consume {
            let consumed = matched.elements();
            self.remaining = self.remaining.retain(|id| !consumed.contains(id));
        }

        Ok(true)
    }
}
