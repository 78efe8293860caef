//! Sentence-level matching scenarios exercising the full stack.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use syntagma_engine::{MatchExpression, Pattern};
use syntagma_foundation::{ElementId, RelationId, TagId, TagSet};
use syntagma_graph::Sentence;

#[test]
fn conjoined_subjects_with_prepositional_phrase() {
    // "dogs and cats chase mice in gardens"
    // [Entity, Conjunctive, Entity, Verbal, Entity, Prepositional, Entity]
    let mut sentence = Sentence::new();
    let dogs = sentence.push("dogs", TagSet::of(&[TagId::ENTITY]));
    let and = sentence.push("and", TagSet::of(&[TagId::CONJUNCTIVE]));
    let cats = sentence.push("cats", TagSet::of(&[TagId::ENTITY]));
    let chase = sentence.push("chase", TagSet::of(&[TagId::VERBAL]));
    let mice = sentence.push("mice", TagSet::of(&[TagId::ENTITY]));
    let in_ = sentence.push("in", TagSet::of(&[TagId::PREPOSITIONAL]));
    let gardens = sentence.push("gardens", TagSet::of(&[TagId::ENTITY]));

    let pattern = Pattern::new(vec![
        TagId::ENTITY,
        TagId::CONJUNCTIVE,
        TagId::ENTITY,
        TagId::VERBAL,
        TagId::ENTITY,
        TagId::PREPOSITIONAL,
        TagId::ENTITY,
    ])
    .unwrap();

    let invocations = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&invocations);
    let expected = vec![dogs, and, cats, chase, mice, in_, gardens];
    let expr = MatchExpression::new().case(pattern, move |sentence, matched| {
        counter.fetch_add(1, Ordering::SeqCst);
        assert_eq!(matched.elements(), expected);

        let conj = matched.require(1, TagId::CONJUNCTIVE)?;
        let verbal = matched.require(3, TagId::VERBAL)?;
        let prep = matched.require(5, TagId::PREPOSITIONAL)?;
        sentence.link(RelationId::CONJOINED, conj, matched.element(0)?)?;
        sentence.link(RelationId::CONJOINED, conj, matched.element(2)?)?;
        sentence.link(RelationId::SUBJECT, verbal, conj)?;
        sentence.link(RelationId::OBJECT, verbal, matched.element(4)?)?;
        sentence.link(RelationId::OBJECT_OF_PREPOSITION, prep, matched.element(6)?)?;
        Ok(())
    });

    let report = expr.run(&mut sentence).unwrap();
    assert!(report.accepted);
    assert_eq!(report.fired, 1);
    assert_eq!(invocations.load(Ordering::SeqCst), 1);

    assert_eq!(sentence.linked(RelationId::CONJOINED, and), vec![dogs, cats]);
    assert!(sentence.has_link(RelationId::SUBJECT, chase, and));
    assert!(sentence.has_link(RelationId::OBJECT, chase, mice));
    assert!(sentence.has_link(RelationId::OBJECT_OF_PREPOSITION, in_, gardens));
}

#[test]
fn persistent_filter_matches_at_filtered_position_zero() {
    // "red dog runs" with descriptors excluded for the whole chain: the
    // match lands on the filtered prefix [dog, runs], not raw position 0.
    let mut sentence = Sentence::new();
    let red = sentence.push("red", TagSet::of(&[TagId::DESCRIPTOR]));
    let dog = sentence.push("dog", TagSet::of(&[TagId::ENTITY]));
    let runs = sentence.push("runs", TagSet::of(&[TagId::VERBAL]));

    let pattern = Pattern::new(vec![TagId::ENTITY, TagId::VERBAL]).unwrap();
    let expr = MatchExpression::new()
        .filter_all(TagSet::of(&[TagId::DESCRIPTOR]))
        .case(pattern, move |sentence, matched| {
            assert_ne!(matched.element(0)?, red);
            sentence.link(
                RelationId::SUBJECT,
                matched.element(1)?,
                matched.element(0)?,
            )
        });

    let report = expr.run(&mut sentence).unwrap();
    assert!(report.accepted);
    assert!(sentence.has_link(RelationId::SUBJECT, runs, dog));
}

#[test]
fn chain_decomposes_one_sentence_into_spans() {
    // "dog runs quickly cat sleeps": a consuming chain peels noun-verb
    // spans left to right while adverbials stay hidden.
    let mut sentence = Sentence::new();
    sentence.push("dog", TagSet::of(&[TagId::ENTITY]));
    sentence.push("runs", TagSet::of(&[TagId::VERBAL]));
    sentence.push("quickly", TagSet::of(&[TagId::ADVERBIAL]));
    sentence.push("cat", TagSet::of(&[TagId::ENTITY]));
    sentence.push("sleeps", TagSet::of(&[TagId::VERBAL]));

    let pattern = || Pattern::new(vec![TagId::ENTITY, TagId::VERBAL]).unwrap();
    let link = |s: &mut Sentence, m: &syntagma_engine::Matched| {
        s.link(RelationId::SUBJECT, m.element(1)?, m.element(0)?)
    };

    let expr = MatchExpression::new()
        .filter_all(TagSet::of(&[TagId::ADVERBIAL]))
        .case(pattern(), link)
        .case(pattern(), link);

    let report = expr.run(&mut sentence).unwrap();
    assert_eq!(report.fired, 2);

    let ids: Vec<ElementId> = sentence.ids().collect();
    assert!(sentence.has_link(RelationId::SUBJECT, ids[1], ids[0]));
    assert!(sentence.has_link(RelationId::SUBJECT, ids[4], ids[3]));
}

#[test]
fn one_expression_serves_parallel_sentences() {
    // Each worker owns its sentence and context; the expression is shared.
    let pattern = Pattern::new(vec![TagId::ENTITY, TagId::VERBAL]).unwrap();
    let expr = Arc::new(MatchExpression::new().case(pattern, |s, m| {
        s.link(RelationId::SUBJECT, m.element(1)?, m.element(0)?)
    }));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let expr = Arc::clone(&expr);
            thread::spawn(move || {
                let mut sentence = Sentence::new();
                sentence.push("dog", TagSet::of(&[TagId::ENTITY]));
                sentence.push("runs", TagSet::of(&[TagId::VERBAL]));
                let report = expr.run(&mut sentence).unwrap();
                (report.accepted, sentence.relations().len())
            })
        })
        .collect();

    for handle in handles {
        let (accepted, relations) = handle.join().unwrap();
        assert!(accepted);
        assert_eq!(relations, 1);
    }
}

#[test]
fn declaration_error_commits_nothing() {
    // A malformed pattern surfaces before any sentence is touched.
    assert!(Pattern::new(vec![TagId::ENTITY]).is_err());
    assert!(Pattern::new(vec![TagId::ENTITY; 21]).is_err());
}
