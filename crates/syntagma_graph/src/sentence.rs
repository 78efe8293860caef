//! One sentence's ordered element arena.
//!
//! The upstream pipeline (tokenizer, tagger, phrase builder) constructs a
//! [`Sentence`] by pushing elements in surface order with their capability
//! tags already assigned. From the matcher's perspective elements are
//! immutable; only the relation graph grows as binding actions fire.

use std::sync::Arc;

use syntagma_foundation::{ElementId, Error, RelationId, Result, TagId, TagSet};

use crate::relation::{Relation, RelationStore};

/// One syntactic unit (word or phrase) in a sentence's flattened sequence.
#[derive(Clone, Debug)]
pub struct Element {
    id: ElementId,
    tags: TagSet,
    text: Arc<str>,
}

impl Element {
    /// Returns this element's identity.
    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Returns the capability tags this element satisfies.
    #[must_use]
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Returns true if this element satisfies the given capability tag.
    #[must_use]
    pub fn satisfies(&self, tag: TagId) -> bool {
        self.tags.contains(tag)
    }

    /// Returns the surface text of this element.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// An ordered, finite sequence of elements for one sentence, plus the
/// semantic relations established among them.
///
/// The matcher narrows only a *view* over this sequence; the sequence
/// itself never shrinks or reorders.
#[derive(Clone, Debug, Default)]
pub struct Sentence {
    elements: Vec<Element>,
    relations: RelationStore,
}

impl Sentence {
    /// Creates an empty sentence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element with the given surface text and capability tags,
    /// returning its identity.
    ///
    /// # Panics
    ///
    /// Panics if the sentence exceeds `u32::MAX` elements.
    pub fn push(&mut self, text: impl Into<Arc<str>>, tags: TagSet) -> ElementId {
        let index = u32::try_from(self.elements.len()).expect("too many elements");
        let id = ElementId::new(index);
        self.elements.push(Element {
            id,
            tags,
            text: text.into(),
        });
        id
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the sentence has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Gets an element by identity.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.index() as usize)
    }

    /// Gets an element by identity, erroring if it does not belong to this
    /// sentence.
    ///
    /// # Errors
    /// Returns [`ErrorKind::ElementNotFound`](syntagma_foundation::ErrorKind::ElementNotFound)
    /// for a foreign id.
    pub fn element(&self, id: ElementId) -> Result<&Element> {
        self.get(id).ok_or_else(|| Error::element_not_found(id))
    }

    /// Returns true if the element satisfies the given capability tag.
    ///
    /// Foreign ids satisfy nothing.
    #[must_use]
    pub fn satisfies(&self, id: ElementId, tag: TagId) -> bool {
        self.get(id).is_some_and(|e| e.satisfies(tag))
    }

    /// Iterates the elements in surface order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Iterates the element ids in surface order.
    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements.iter().map(Element::id)
    }

    // =========================================================================
    // Relation Graph
    // =========================================================================

    /// Establishes a relation of `kind` from `source` to `target`.
    ///
    /// # Errors
    /// Returns an error if either endpoint does not belong to this sentence.
    pub fn link(&mut self, kind: RelationId, source: ElementId, target: ElementId) -> Result<()> {
        self.element(source)?;
        self.element(target)?;
        self.relations.link(kind, source, target);
        Ok(())
    }

    /// Returns true if a relation of `kind` from `source` to `target` exists.
    #[must_use]
    pub fn has_link(&self, kind: RelationId, source: ElementId, target: ElementId) -> bool {
        self.relations.has_link(kind, source, target)
    }

    /// Returns the targets of all relations of `kind` from `source`.
    #[must_use]
    pub fn linked(&self, kind: RelationId, source: ElementId) -> Vec<ElementId> {
        self.relations.linked(kind, source)
    }

    /// Returns all established relations in insertion order.
    #[must_use]
    pub fn relations(&self) -> &[Relation] {
        self.relations.edges()
    }
}
