//! Integration tests for sentence storage and relations.

use syntagma_foundation::{ElementId, RelationId, TagId, TagSet};
use syntagma_graph::Sentence;

fn analyzed_sentence() -> Sentence {
    // "the quick dog chases a cat"
    let mut s = Sentence::new();
    s.push("quick", TagSet::of(&[TagId::DESCRIPTOR]));
    s.push("dog", TagSet::of(&[TagId::ENTITY]));
    s.push("chases", TagSet::of(&[TagId::VERBAL]));
    s.push("cat", TagSet::of(&[TagId::ENTITY]));
    s
}

#[test]
fn elements_keep_surface_order_and_identity() {
    let s = analyzed_sentence();

    let texts: Vec<&str> = s.elements().map(|e| e.text()).collect();
    assert_eq!(texts, vec!["quick", "dog", "chases", "cat"]);

    // Reference identity: positions map to stable ids.
    let ids: Vec<ElementId> = s.ids().collect();
    assert_eq!(s.get(ids[2]).unwrap().text(), "chases");
}

#[test]
fn tags_are_fixed_at_construction() {
    let s = analyzed_sentence();
    let ids: Vec<ElementId> = s.ids().collect();

    assert!(s.satisfies(ids[0], TagId::DESCRIPTOR));
    assert!(s.satisfies(ids[1], TagId::ENTITY));
    assert!(!s.satisfies(ids[1], TagId::VERBAL));
}

#[test]
fn relation_graph_grows_under_links() {
    let mut s = analyzed_sentence();
    let ids: Vec<ElementId> = s.ids().collect();
    let (descriptor, dog, chases, cat) = (ids[0], ids[1], ids[2], ids[3]);

    s.link(RelationId::MODIFIES, descriptor, dog).unwrap();
    s.link(RelationId::SUBJECT, chases, dog).unwrap();
    s.link(RelationId::OBJECT, chases, cat).unwrap();

    assert_eq!(s.linked(RelationId::SUBJECT, chases), vec![dog]);
    assert_eq!(s.linked(RelationId::OBJECT, chases), vec![cat]);
    assert_eq!(s.relations().len(), 3);

    // Elements themselves are untouched by linking.
    assert_eq!(s.len(), 4);
    assert!(s.satisfies(dog, TagId::ENTITY));
}

#[test]
fn links_to_foreign_elements_are_rejected() {
    let mut s = analyzed_sentence();
    let dog = s.ids().nth(1).unwrap();

    let foreign = ElementId::new(99);

    assert!(s.link(RelationId::SUBJECT, dog, foreign).is_err());
    assert!(s.relations().is_empty());
}
