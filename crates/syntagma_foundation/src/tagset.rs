//! Bitsets of capability tags.
//!
//! Each element carries an explicit [`TagSet`] so applicability checks are
//! conjunctive bit tests rather than repeated dynamic lookups.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::intern::TagId;

const BITS_PER_BLOCK: usize = 64;

/// A set of capability tags, stored as a growable bitset over tag indices.
///
/// Cloning is cheap for realistic tag universes (a handful of 64-bit
/// blocks). Tag membership, subset, and disjointness tests are O(blocks).
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagSet {
    blocks: Vec<u64>,
}

impl TagSet {
    /// Creates an empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tag set from a slice of tags.
    #[must_use]
    pub fn of(tags: &[TagId]) -> Self {
        let mut set = Self::new();
        for &tag in tags {
            set.insert(tag);
        }
        set
    }

    fn position(tag: TagId) -> (usize, u64) {
        let index = tag.index() as usize;
        (index / BITS_PER_BLOCK, 1 << (index % BITS_PER_BLOCK))
    }

    /// Adds a tag to the set. Returns true if it was not already present.
    pub fn insert(&mut self, tag: TagId) -> bool {
        let (block, mask) = Self::position(tag);
        if block >= self.blocks.len() {
            self.blocks.resize(block + 1, 0);
        }
        let present = self.blocks[block] & mask != 0;
        self.blocks[block] |= mask;
        !present
    }

    /// Returns true if the set contains the tag.
    #[must_use]
    pub fn contains(&self, tag: TagId) -> bool {
        let (block, mask) = Self::position(tag);
        self.blocks.get(block).is_some_and(|b| b & mask != 0)
    }

    /// Returns true if every tag in `other` is also in this set.
    #[must_use]
    pub fn contains_all(&self, other: &TagSet) -> bool {
        for (i, &bits) in other.blocks.iter().enumerate() {
            if self.blocks.get(i).copied().unwrap_or(0) & bits != bits {
                return false;
            }
        }
        true
    }

    /// Returns true if the two sets share no tags.
    #[must_use]
    pub fn is_disjoint(&self, other: &TagSet) -> bool {
        self.blocks
            .iter()
            .zip(other.blocks.iter())
            .all(|(a, b)| a & b == 0)
    }

    /// Returns a new set containing tags from both sets.
    #[must_use]
    pub fn union(&self, other: &TagSet) -> Self {
        let mut blocks = vec![0; self.blocks.len().max(other.blocks.len())];
        for (i, slot) in blocks.iter_mut().enumerate() {
            *slot = self.blocks.get(i).copied().unwrap_or(0)
                | other.blocks.get(i).copied().unwrap_or(0);
        }
        Self { blocks }
    }

    /// Returns true if the set contains no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|&b| b == 0)
    }

    /// Returns the number of tags in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Iterates the tags in the set in index order.
    pub fn iter(&self) -> impl Iterator<Item = TagId> + '_ {
        self.blocks.iter().enumerate().flat_map(|(block, &bits)| {
            (0..BITS_PER_BLOCK).filter_map(move |bit| {
                if bits & (1 << bit) != 0 {
                    let index =
                        u32::try_from(block * BITS_PER_BLOCK + bit).expect("tag index overflow");
                    Some(TagId(index))
                } else {
                    None
                }
            })
        })
    }
}

impl FromIterator<TagId> for TagSet {
    fn from_iter<I: IntoIterator<Item = TagId>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl fmt::Debug for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
