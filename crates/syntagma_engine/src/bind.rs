//! Typed captures handed to binding actions.
//!
//! On a successful applicability check the matcher re-verifies each matched
//! element against the capability its position requires and builds a
//! [`Matched`] capture. The bound action receives the capture together with
//! mutable access to the sentence graph; it establishes relations, the
//! matcher neither inspects nor reverts them.

use syntagma_foundation::{ElementId, Error, Result, TagId};
use syntagma_graph::Sentence;

use crate::pattern::Pattern;

/// One matched element, downcast to the capability its pattern position
/// required.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CapRef {
    element: ElementId,
    tag: TagId,
}

impl CapRef {
    /// Returns the matched element's identity.
    #[must_use]
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Returns the capability this reference is typed as.
    #[must_use]
    pub fn tag(&self) -> TagId {
        self.tag
    }
}

/// The positional captures of one successful case, in pattern order.
#[derive(Clone, Debug)]
pub struct Matched {
    slots: Vec<CapRef>,
}

impl Matched {
    /// Builds a capture from the first `pattern.len()` elements of `view`,
    /// re-verifying each element against its required capability.
    ///
    /// # Errors
    /// - [`IndexOutOfBounds`](syntagma_foundation::ErrorKind::IndexOutOfBounds)
    ///   if the view is shorter than the pattern (the caller's applicability
    ///   check should have ruled this out).
    /// - [`CapabilityMismatch`](syntagma_foundation::ErrorKind::CapabilityMismatch)
    ///   if an element no longer satisfies its required tag; the dispatcher
    ///   fails that single case fast rather than invoking the action with an
    ///   invalid reference.
    pub fn bind(pattern: &Pattern, view: &[ElementId], sentence: &Sentence) -> Result<Self> {
        if view.len() < pattern.len() {
            return Err(Error::index_out_of_bounds(pattern.len(), view.len()));
        }

        let mut slots = Vec::with_capacity(pattern.len());
        for (&tag, &element) in pattern.tags().iter().zip(view.iter()) {
            if !sentence.satisfies(element, tag) {
                return Err(Error::capability_mismatch(element, tag));
            }
            slots.push(CapRef { element, tag });
        }

        Ok(Self { slots })
    }

    /// Returns the number of captured elements (the pattern's arity).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if nothing was captured. Never true for captures built
    /// by [`bind`](Self::bind).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Gets the capture at a pattern position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&CapRef> {
        self.slots.get(position)
    }

    /// Gets the element at a pattern position.
    ///
    /// # Errors
    /// Returns an error for an out-of-range position.
    pub fn element(&self, position: usize) -> Result<ElementId> {
        self.slots
            .get(position)
            .map(CapRef::element)
            .ok_or_else(|| Error::index_out_of_bounds(position, self.slots.len()))
    }

    /// Gets the element at a pattern position, asserting the capability it
    /// was matched as.
    ///
    /// # Errors
    /// Returns an error for an out-of-range position or if the slot was
    /// typed as a different capability.
    pub fn require(&self, position: usize, tag: TagId) -> Result<ElementId> {
        let slot = self
            .slots
            .get(position)
            .ok_or_else(|| Error::index_out_of_bounds(position, self.slots.len()))?;
        if slot.tag != tag {
            return Err(Error::capability_mismatch(slot.element, tag));
        }
        Ok(slot.element)
    }

    /// Iterates the captures in pattern order.
    pub fn iter(&self) -> impl Iterator<Item = &CapRef> {
        self.slots.iter()
    }

    /// Returns the captured element ids in pattern order.
    #[must_use]
    pub fn elements(&self) -> Vec<ElementId> {
        self.slots.iter().map(CapRef::element).collect()
    }
}

/// A relation-establishing callback bound to a pattern.
///
/// Invoked with the sentence graph and the positional captures, at most once
/// per case per chain execution.
pub type BindingAction = Box<dyn Fn(&mut Sentence, &Matched) -> Result<()> + Send + Sync>;
