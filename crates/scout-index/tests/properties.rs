//! Property tests for indexing and ranking invariants.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::sync::Arc;

use proptest::prelude::*;
use scout_document::{Document, DocumentKind, DocumentStore};
use scout_index::{Corpus, QueryEngine, Scorer, WeightedScorer, tokenize};

/// Vocabulary mixing case, short words, and shared prefixes.
const WORDS: &[&str] = &[
    "Acme", "acme", "Corp", "Lead", "Scorer", "Scoring", "CRM", "Report", "ops", "AI", "Q3",
    "Migration", "Globex", "Pipeline", "Renewal", "Dashboard",
];

fn word() -> impl Strategy<Value = String> {
    prop::sample::select(WORDS).prop_map(String::from)
}

fn phrase(min: usize, max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(word(), min..=max).prop_map(|words| words.join(" "))
}

fn kind() -> impl Strategy<Value = DocumentKind> {
    prop::sample::select(DocumentKind::ALL.to_vec())
}

fn documents() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(
        (
            kind(),
            phrase(1, 4),
            phrase(0, 3),
            prop::collection::vec(word(), 0..=3),
        ),
        1..12,
    )
    .prop_map(|records| {
        records
            .into_iter()
            .enumerate()
            .map(|(i, (kind, title, subtitle, tags))| {
                Document::new(i as u64, kind, title)
                    .with_subtitle(subtitle)
                    .with_tags(tags)
            })
            .collect()
    })
}

fn engine(docs: Vec<Document>) -> QueryEngine {
    QueryEngine::new(Arc::new(Corpus::new(DocumentStore::new(docs).unwrap())))
}

proptest! {
    #[test]
    fn every_document_term_finds_its_document(docs in documents()) {
        let engine = engine(docs);
        let corpus = engine.corpus();
        for (position, doc) in corpus.store().iter().enumerate() {
            for term in tokenize(&doc.searchable_text()) {
                prop_assert!(corpus.index().lookup(&[term.as_str()]).contains(&position));
            }
        }
    }

    #[test]
    fn title_substrings_are_always_recalled(
        docs in documents(),
        pick in any::<prop::sample::Index>(),
        start in any::<prop::sample::Index>(),
        len in 3usize..=24,
        uppercase in any::<bool>(),
    ) {
        let position = pick.index(docs.len());
        let chars: Vec<char> = docs[position].title.chars().collect();
        prop_assume!(chars.len() >= 3);
        let from = start.index(chars.len() - 2);
        let to = (from + len).min(chars.len());
        let substring: String = chars[from..to].iter().collect();
        // Fragments made only of words under the minimum length never match.
        prop_assume!(!tokenize(&substring).is_empty());
        let query = if uppercase { substring.to_uppercase() } else { substring };
        let title = docs[position].title.clone();

        let results = engine(docs).run(&query);
        prop_assert!(
            results.iter().any(|r| r.position == position),
            "title {:?} contains {:?} but was not returned",
            title,
            query
        );
    }

    #[test]
    fn exact_title_outranks_non_prefix_titles(
        docs in documents(),
        pick in any::<prop::sample::Index>(),
    ) {
        let position = pick.index(docs.len());
        let query = docs[position].title.to_uppercase();
        let scorer = WeightedScorer::default();
        let exact = scorer.score(&docs[position], &query);
        let lowered = query.to_lowercase();

        for other in &docs {
            let title = other.title.to_lowercase();
            if title == lowered || title.starts_with(&lowered) {
                continue;
            }
            prop_assert!(exact > scorer.score(other, &query));
        }
    }

    #[test]
    fn ranking_is_sorted_and_deterministic(docs in documents(), query in phrase(1, 3)) {
        let engine = engine(docs);
        let first = engine.run(&query);
        prop_assert_eq!(&first, &engine.run(&query));
        for pair in first.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].position < pair[1].position);
            }
        }
    }
}
