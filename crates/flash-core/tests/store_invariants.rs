//! Store-level laws exercised through the public API:
//! - both indexes stay one-to-one with the cards under any add/remove sequence
//! - export followed by import reproduces the store
//! - quiz rotation visits every card once per round

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use rstest::rstest;

use flash_core::{Card, CardError, CardStore};

#[derive(Debug, Clone, Copy)]
enum Op {
    Add(&'static str, &'static str),
    TryAdd(&'static str, &'static str),
    Remove(&'static str),
    Ask,
    Miss(&'static str),
}

fn apply(store: &mut CardStore, op: Op) {
    match op {
        Op::Add(term, definition) => {
            store.add(Card::new(term, definition));
        }
        Op::TryAdd(term, definition) => {
            let _ = store.try_add(Card::new(term, definition));
        }
        Op::Remove(term) => {
            let _ = store.remove(term);
        }
        Op::Ask => {
            if let Ok(term) = store.next_quiz_term().map(str::to_owned) {
                store.record_quiz_access(&term);
            }
        }
        Op::Miss(term) => {
            let _ = store.record_mistake(term);
        }
    }
}

fn assert_indexes_agree(store: &CardStore) {
    let cards: Vec<&Card> = store.iter().collect();
    assert_eq!(cards.len(), store.len());

    let terms: HashSet<&str> = cards.iter().map(|card| card.term()).collect();
    let definitions: HashSet<&str> = cards.iter().map(|card| card.definition()).collect();
    assert_eq!(terms.len(), store.len(), "terms are unique");
    assert_eq!(definitions.len(), store.len(), "definitions are unique");

    for card in cards {
        let by_term = store.by_term(card.term()).expect("term resolves");
        let by_definition = store
            .by_definition(card.definition())
            .expect("definition resolves");
        assert!(by_term.same_pair(card));
        assert!(by_definition.same_pair(card));
        assert_eq!(by_term.error_count(), card.error_count());
    }
}

#[rstest]
#[case::plain_inserts(vec![Op::Add("a", "1"), Op::Add("b", "2"), Op::Add("c", "3")])]
#[case::replace_term(vec![Op::Add("a", "1"), Op::Add("a", "2"), Op::Add("b", "1")])]
#[case::steal_definition(vec![Op::Add("a", "1"), Op::Add("b", "2"), Op::Add("c", "1"), Op::Add("b", "1")])]
#[case::rejected_duplicates(vec![Op::TryAdd("a", "1"), Op::TryAdd("a", "2"), Op::TryAdd("b", "1"), Op::TryAdd("b", "2")])]
#[case::remove_and_reuse(vec![
    Op::Add("a", "1"), Op::Add("b", "2"), Op::Remove("a"), Op::Remove("a"),
    Op::Add("c", "1"), Op::Add("a", "3"), Op::Remove("b"), Op::Add("d", "2"),
])]
#[case::asks_interleaved(vec![
    Op::Add("a", "1"), Op::Ask, Op::Add("b", "2"), Op::Ask, Op::Miss("a"),
    Op::Remove("b"), Op::Ask, Op::Add("b", "1"), Op::Ask, Op::Miss("b"),
])]
#[case::remove_everything(vec![Op::Add("a", "1"), Op::Add("b", "2"), Op::Remove("b"), Op::Remove("a"), Op::Ask])]
fn indexes_stay_consistent(#[case] ops: Vec<Op>) {
    let mut store = CardStore::new();
    for op in ops {
        apply(&mut store, op);
        assert_indexes_agree(&store);
    }
}

#[test]
fn indexes_stay_consistent_under_generated_sequences() {
    const TERMS: [&str; 5] = ["a", "b", "c", "d", "e"];
    const DEFINITIONS: [&str; 5] = ["1", "2", "3", "4", "5"];

    for seed in 1..=64_u64 {
        let mut state = seed;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            usize::try_from(state % 1024).unwrap_or(0)
        };

        let mut store = CardStore::new();
        for _ in 0..200 {
            let term = TERMS[next() % TERMS.len()];
            let definition = DEFINITIONS[next() % DEFINITIONS.len()];
            let op = match next() % 5 {
                0 => Op::Add(term, definition),
                1 => Op::TryAdd(term, definition),
                2 => Op::Remove(term),
                3 => Op::Ask,
                _ => Op::Miss(term),
            };
            apply(&mut store, op);
            assert_indexes_agree(&store);
        }
    }
}

#[test]
fn export_then_import_is_lossless() {
    let mut original = CardStore::new();
    original.add(Card::with_errors("dog", "animal", 2));
    original.add(Card::with_errors("tree", "plant", 0));
    original.add(Card::with_errors("France", "Paris, \"the capital\"", 5));
    original.add(Card::with_errors("{braces}", "line\nbreak", 1));
    original.add(Card::new("", "empty term"));
    original.record_quiz_access("dog");

    let lines = original.export_to();
    let mut restored = CardStore::new();
    let loaded = restored.import_from(&lines).unwrap();

    assert_eq!(loaded, original.len());
    let snapshot = |store: &CardStore| {
        store
            .iter()
            .map(|card| {
                (
                    card.term().to_owned(),
                    card.definition().to_owned(),
                    card.error_count(),
                )
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(snapshot(&restored), snapshot(&original));
    assert_eq!(restored.export_to(), lines);
}

#[test]
fn import_into_populated_store_replaces_by_term() {
    let mut source = CardStore::new();
    source.add(Card::with_errors("dog", "canine", 4));
    let lines = source.export_to();

    let mut target = CardStore::new();
    target.add(Card::new("dog", "animal"));
    target.add(Card::new("tree", "plant"));
    target.import_from(&lines).unwrap();

    assert_eq!(target.len(), 2);
    assert_eq!(target.by_term("dog").map(Card::definition), Some("canine"));
    assert_eq!(target.by_term("dog").map(Card::error_count), Some(4));
    assert!(target.by_definition("animal").is_none());
    assert_indexes_agree(&target);
}

#[test]
fn malformed_import_reports_line_and_rolls_back() {
    let mut store = CardStore::new();
    store.add(Card::new("dog", "animal"));
    let lines = vec![
        Card::new("tree", "plant").encode(),
        String::new(),
        "Card{term='x', definition='y', errorCount=0}".to_owned(),
    ];

    let err = store.import_from(&lines).unwrap_err();

    assert!(matches!(err, CardError::MalformedRecord { line: 3, .. }));
    assert_eq!(store.len(), 1);
    assert!(!store.contains_term("tree"));
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
#[case(13)]
fn each_round_asks_every_card_once(#[case] size: usize) {
    let mut store = CardStore::new();
    for i in 0..size {
        store.add(Card::new(format!("term-{i}"), format!("definition-{i}")));
    }

    for _round in 0..3 {
        let mut seen = HashSet::new();
        for _ in 0..size {
            let term = store.next_quiz_term().unwrap().to_owned();
            store.record_quiz_access(&term);
            assert!(seen.insert(term), "term repeated within a round");
        }
        assert_eq!(seen.len(), size);
    }
}

#[test]
fn quiz_on_empty_store_is_an_error() {
    let store = CardStore::new();
    assert_eq!(store.next_quiz_term(), Err(CardError::Empty));
}

#[test]
fn grading_three_outcomes_through_public_api() {
    let mut store = CardStore::new();
    store.try_add(Card::new("dog", "animal")).unwrap();
    store.try_add(Card::new("tree", "plant")).unwrap();

    assert!(store.grade("dog", "animal").unwrap().is_correct());
    assert_eq!(store.by_term("dog").map(Card::error_count), Some(0));

    let verdict = store.grade("dog", "plant").unwrap();
    assert_eq!(
        verdict,
        flash_core::Verdict::DefinitionOfOther {
            expected: "animal".into(),
            other_term: "tree".into(),
        }
    );
    assert_eq!(store.by_term("dog").map(Card::error_count), Some(1));

    let verdict = store.grade("dog", "rock").unwrap();
    assert_eq!(
        verdict,
        flash_core::Verdict::Wrong {
            expected: "animal".into()
        }
    );
    assert_eq!(store.by_term("dog").map(Card::error_count), Some(2));
}
