//! Integration tests for tag set algebra.

use proptest::prelude::*;
use syntagma_foundation::{Interner, TagId, TagSet};

#[test]
fn multi_role_elements_satisfy_every_role() {
    // A pronoun is also an entity for matching purposes.
    let pronoun = TagSet::of(&[TagId::ENTITY, TagId::PRONOUN]);

    assert!(pronoun.contains(TagId::ENTITY));
    assert!(pronoun.contains(TagId::PRONOUN));
    assert!(!pronoun.contains(TagId::VERBAL));
}

#[test]
fn exclusion_is_any_overlap() {
    let element = TagSet::of(&[TagId::ENTITY, TagId::DESCRIPTOR]);
    let excluded = TagSet::of(&[TagId::DESCRIPTOR]);

    // Visible iff the element lacks ALL excluded tags.
    assert!(!element.is_disjoint(&excluded));
    assert!(element.is_disjoint(&TagSet::of(&[TagId::VERBAL])));
}

proptest! {
    #[test]
    fn union_preserves_membership(names in prop::collection::vec("[a-z]{1,8}", 0..16)) {
        let mut interner = Interner::new();
        let set: TagSet = names.iter().map(|n| interner.intern_tag(n)).collect();

        let with_verbal = set.union(&TagSet::of(&[TagId::VERBAL]));
        prop_assert!(with_verbal.contains(TagId::VERBAL));
        prop_assert!(with_verbal.contains_all(&set));
    }

    #[test]
    fn contains_all_matches_member_check(
        a in prop::collection::vec("[a-z]{1,6}", 0..12),
        b in prop::collection::vec("[a-z]{1,6}", 0..12),
    ) {
        let mut interner = Interner::new();
        let tags_a: Vec<TagId> = a.iter().map(|n| interner.intern_tag(n)).collect();
        let tags_b: Vec<TagId> = b.iter().map(|n| interner.intern_tag(n)).collect();
        let sa = TagSet::of(&tags_a);
        let sb = TagSet::of(&tags_b);

        let expected = tags_b.iter().all(|t| sa.contains(*t));
        prop_assert_eq!(sa.contains_all(&sb), expected);
    }
}
