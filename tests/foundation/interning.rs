//! Integration tests for tag and relation interning.

use syntagma_foundation::{Interner, RelationId, TagId};

#[test]
fn reserved_tags_are_stable_across_interners() {
    let a = Interner::new();
    let b = Interner::new();

    assert_eq!(a.get_tag(TagId::VERBAL), b.get_tag(TagId::VERBAL));
    assert_eq!(
        a.get_relation(RelationId::CONJOINED),
        b.get_relation(RelationId::CONJOINED)
    );
}

#[test]
fn custom_tags_extend_the_open_set() {
    let mut interner = Interner::new();
    let reserved = interner.tag_count();

    let gerund = interner.intern_tag("gerund");
    let particle = interner.intern_tag("particle");

    assert_ne!(gerund, particle);
    assert_eq!(interner.tag_count(), reserved + 2);
    assert_eq!(interner.get_tag(gerund), Some("gerund"));
}

#[test]
fn clones_share_interned_vocabulary() {
    // One worker per sentence clones the interner after shared names are
    // interned; ids stay valid in every clone.
    let mut interner = Interner::new();
    let topic = interner.intern_tag("topic");

    let workers: Vec<Interner> = (0..4).map(|_| interner.clone()).collect();
    for worker in &workers {
        assert_eq!(worker.get_tag(topic), Some("topic"));
    }
}
