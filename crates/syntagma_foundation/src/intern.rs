//! String interning for capability tags and relation kinds.
//!
//! Tags and relation kinds are interned to enable fast equality comparison
//! and compact bitset indices. The common grammatical roles are reserved and
//! pre-interned at fixed indices so patterns built against different
//! interners still agree on them.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interned capability tag identifier.
///
/// A capability tag names a grammatical role an element may satisfy,
/// like `entity` or `verbal`. The tag set is open; new tags may be
/// interned at any time.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagId(pub(crate) u32);

impl TagId {
    /// Returns the raw index of this tag.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    // =========================================================================
    // Reserved Tags
    // =========================================================================
    // These are always interned at startup with fixed indices.

    /// Reserved tag for entities (nouns, noun phrases): `entity`
    pub const ENTITY: TagId = TagId(0);

    /// Reserved tag for verbal elements: `verbal`
    pub const VERBAL: TagId = TagId(1);

    /// Reserved tag for conjunctions: `conjunctive`
    pub const CONJUNCTIVE: TagId = TagId(2);

    /// Reserved tag for descriptors (adjectivals): `descriptor`
    pub const DESCRIPTOR: TagId = TagId(3);

    /// Reserved tag for adverbial elements: `adverbial`
    pub const ADVERBIAL: TagId = TagId(4);

    /// Reserved tag for prepositions: `prepositional`
    pub const PREPOSITIONAL: TagId = TagId(5);

    /// Reserved tag for pronouns: `pronoun`
    pub const PRONOUN: TagId = TagId(6);
}

impl fmt::Debug for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TagId({})", self.0)
    }
}

/// Interned relation kind identifier.
///
/// Relation kinds name the semantic edges binding actions establish,
/// like `subject` or `conjoined`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RelationId(pub(crate) u32);

impl RelationId {
    /// Returns the raw index of this relation kind.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    // =========================================================================
    // Reserved Relation Kinds
    // =========================================================================

    /// Reserved relation for a verbal's subject: `subject`
    pub const SUBJECT: RelationId = RelationId(0);

    /// Reserved relation for a verbal's object: `object`
    pub const OBJECT: RelationId = RelationId(1);

    /// Reserved relation for a descriptor modifying an element: `modifies`
    pub const MODIFIES: RelationId = RelationId(2);

    /// Reserved relation joining conjoined operands: `conjoined`
    pub const CONJOINED: RelationId = RelationId(3);

    /// Reserved relation for a preposition's object: `object-of-preposition`
    pub const OBJECT_OF_PREPOSITION: RelationId = RelationId(4);
}

impl fmt::Debug for RelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RelationId({})", self.0)
    }
}

/// Interner for capability tags and relation kinds.
///
/// Maps strings to unique IDs and back. It is not thread-safe; clone one
/// per worker once all shared names are interned.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interner {
    /// String storage (shared across tags and relation kinds).
    strings: Vec<Arc<str>>,
    /// Map from string to index.
    string_to_index: HashMap<Arc<str>, u32>,
    /// Tag indices (subset of strings that are tags).
    tags: Vec<u32>,
    /// Map from tag string to `TagId`.
    tag_map: HashMap<Arc<str>, TagId>,
    /// Relation indices (subset of strings that are relation kinds).
    relations: Vec<u32>,
    /// Map from relation string to `RelationId`.
    relation_map: HashMap<Arc<str>, RelationId>,
}

impl Interner {
    /// Reserved tags that are pre-interned at startup.
    const RESERVED_TAGS: &'static [&'static str] = &[
        "entity",        // TagId(0) = ENTITY
        "verbal",        // TagId(1) = VERBAL
        "conjunctive",   // TagId(2) = CONJUNCTIVE
        "descriptor",    // TagId(3) = DESCRIPTOR
        "adverbial",     // TagId(4) = ADVERBIAL
        "prepositional", // TagId(5) = PREPOSITIONAL
        "pronoun",       // TagId(6) = PRONOUN
    ];

    /// Reserved relation kinds that are pre-interned at startup.
    const RESERVED_RELATIONS: &'static [&'static str] = &[
        "subject",               // RelationId(0) = SUBJECT
        "object",                // RelationId(1) = OBJECT
        "modifies",              // RelationId(2) = MODIFIES
        "conjoined",             // RelationId(3) = CONJOINED
        "object-of-preposition", // RelationId(4) = OBJECT_OF_PREPOSITION
    ];

    /// Creates a new interner with reserved tags and relations pre-interned.
    #[must_use]
    pub fn new() -> Self {
        let mut interner = Self::default();

        for (i, &tag) in Self::RESERVED_TAGS.iter().enumerate() {
            let id = interner.intern_tag(tag);
            debug_assert_eq!(
                id.0 as usize, i,
                "Reserved tag '{}' should have index {}, got {}",
                tag, i, id.0
            );
        }

        for (i, &rel) in Self::RESERVED_RELATIONS.iter().enumerate() {
            let id = interner.intern_relation(rel);
            debug_assert_eq!(
                id.0 as usize, i,
                "Reserved relation '{}' should have index {}, got {}",
                rel, i, id.0
            );
        }

        interner
    }

    /// Interns a string, returning its index.
    fn intern_string(&mut self, s: &str) -> u32 {
        if let Some(&idx) = self.string_to_index.get(s) {
            return idx;
        }

        let idx = u32::try_from(self.strings.len()).expect("too many interned strings");
        let arc: Arc<str> = s.into();
        self.strings.push(arc.clone());
        self.string_to_index.insert(arc, idx);
        idx
    }

    /// Gets a string by its index.
    #[must_use]
    fn get_string(&self, idx: u32) -> Option<&str> {
        self.strings.get(idx as usize).map(AsRef::as_ref)
    }

    /// Interns a capability tag, returning its [`TagId`].
    ///
    /// # Panics
    ///
    /// Panics if the number of interned tags exceeds `u32::MAX`.
    pub fn intern_tag(&mut self, s: &str) -> TagId {
        if let Some(&id) = self.tag_map.get(s) {
            return id;
        }

        let string_idx = self.intern_string(s);
        let tag_idx = u32::try_from(self.tags.len()).expect("too many tags");
        self.tags.push(string_idx);

        let id = TagId(tag_idx);
        let arc: Arc<str> = s.into();
        self.tag_map.insert(arc, id);
        id
    }

    /// Gets the string for a capability tag.
    #[must_use]
    pub fn get_tag(&self, id: TagId) -> Option<&str> {
        self.tags
            .get(id.0 as usize)
            .and_then(|&idx| self.get_string(idx))
    }

    /// Interns a relation kind, returning its [`RelationId`].
    ///
    /// # Panics
    ///
    /// Panics if the number of interned relation kinds exceeds `u32::MAX`.
    pub fn intern_relation(&mut self, s: &str) -> RelationId {
        if let Some(&id) = self.relation_map.get(s) {
            return id;
        }

        let string_idx = self.intern_string(s);
        let relation_idx = u32::try_from(self.relations.len()).expect("too many relation kinds");
        self.relations.push(string_idx);

        let id = RelationId(relation_idx);
        let arc: Arc<str> = s.into();
        self.relation_map.insert(arc, id);
        id
    }

    /// Gets the string for a relation kind.
    #[must_use]
    pub fn get_relation(&self, id: RelationId) -> Option<&str> {
        self.relations
            .get(id.0 as usize)
            .and_then(|&idx| self.get_string(idx))
    }

    /// Returns the number of interned tags.
    #[must_use]
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Returns the number of interned relation kinds.
    #[must_use]
    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }
}
