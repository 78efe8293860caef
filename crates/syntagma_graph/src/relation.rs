//! Semantic relation edges between elements.
//!
//! Binding actions establish relations ("set subject of verbal X to entity
//! Y", "join conjunctive C's operands") by appending edges here. The matcher
//! itself never reads this store; it exists for downstream consumers and for
//! observing binding effects in tests.

use syntagma_foundation::{ElementId, RelationId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One directed semantic edge between two elements.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Relation {
    /// The kind of relation (subject, object, conjoined, ...).
    pub kind: RelationId,
    /// The element the relation originates from.
    pub source: ElementId,
    /// The element the relation points to.
    pub target: ElementId,
}

/// Append-only store of relation edges for one sentence.
///
/// A sentence's relation graph is tiny (a handful of edges), so a flat list
/// with linear scans beats any index.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RelationStore {
    edges: Vec<Relation>,
}

impl RelationStore {
    /// Creates an empty relation store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an edge. Duplicate edges are kept; callers that care about
    /// idempotence check [`has_link`](Self::has_link) first.
    pub fn link(&mut self, kind: RelationId, source: ElementId, target: ElementId) {
        self.edges.push(Relation {
            kind,
            source,
            target,
        });
    }

    /// Returns true if an edge of `kind` from `source` to `target` exists.
    #[must_use]
    pub fn has_link(&self, kind: RelationId, source: ElementId, target: ElementId) -> bool {
        self.edges
            .iter()
            .any(|r| r.kind == kind && r.source == source && r.target == target)
    }

    /// Returns the targets of all edges of `kind` from `source`, in
    /// insertion order.
    #[must_use]
    pub fn linked(&self, kind: RelationId, source: ElementId) -> Vec<ElementId> {
        self.edges
            .iter()
            .filter(|r| r.kind == kind && r.source == source)
            .map(|r| r.target)
            .collect()
    }

    /// Iterates all edges originating from `source`.
    pub fn outgoing(&self, source: ElementId) -> impl Iterator<Item = &Relation> {
        self.edges.iter().filter(move |r| r.source == source)
    }

    /// Returns all edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Relation] {
        &self.edges
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if no edges have been established.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
