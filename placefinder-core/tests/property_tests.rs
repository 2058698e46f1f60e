//! Property-based tests for extraction invariants

use placefinder_core::{Config, PlaceFinder, SegmentationMode, TraceEvent};
use proptest::prelude::*;

const CONNECTORS: [&str; 4] = ["of", "the", "and", "for"];

/// Sentence-like text: capitalized words, connectors, lowercase words,
/// punctuation and assorted whitespace
fn sentence_text() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        4 => "[A-Z][a-z]{0,7}",
        2 => prop::sample::select(CONNECTORS.to_vec()).prop_map(str::to_string),
        2 => "[a-z]{1,8}",
        1 => "[.,;!?0-9]",
        1 => prop::sample::select(vec!["The", "Then", "I", "May", "Of"]).prop_map(str::to_string),
    ];
    let separator = prop_oneof![6 => Just(" "), 1 => Just("  "), 1 => Just("\n"), 1 => Just("")];

    prop::collection::vec((piece, separator), 0..40).prop_map(|parts| {
        parts
            .into_iter()
            .flat_map(|(piece, sep)| [piece, sep.to_string()])
            .collect()
    })
}

fn finder(mode: SegmentationMode, use_pos: bool) -> PlaceFinder {
    let config = Config::builder()
        .segmentation(mode)
        .use_pos(use_pos)
        .build()
        .unwrap();
    PlaceFinder::with_config(config).unwrap()
}

fn modes() -> impl Strategy<Value = SegmentationMode> {
    prop_oneof![
        Just(SegmentationMode::Character),
        Just(SegmentationMode::Token),
        Just(SegmentationMode::Hybrid),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_arbitrary_unicode_terminates(text in "\\PC{0,200}", use_pos in any::<bool>()) {
        // Property: any input finishes with a well-formed trace
        let analysis = finder(SegmentationMode::Hybrid, use_pos).analyze(&text);

        let events = analysis.events();
        prop_assert!(
            matches!(events.first(), Some(TraceEvent::ScanStarted { .. })),
            "trace must start with ScanStarted"
        );
        prop_assert!(
            matches!(events.last(), Some(TraceEvent::ScanFinished { .. })),
            "trace must end with ScanFinished"
        );
    }

    #[test]
    fn prop_keys_respect_filter_rules(
        text in sentence_text(),
        mode in modes(),
        use_pos in any::<bool>(),
    ) {
        let analysis = finder(mode, use_pos).analyze(&text);

        for key in analysis.places.keys() {
            let words: Vec<&str> = key.split(' ').collect();

            prop_assert!(key.chars().count() >= 2, "too short: {key:?}");
            prop_assert!(words.iter().all(|w| !w.is_empty()), "empty word in {key:?}");
            prop_assert!(
                key.chars().next().is_some_and(char::is_uppercase),
                "must start capitalized: {key:?}"
            );

            let mut sorted = words.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), words.len(), "repeated word in {:?}", key);

            if words.len() > 1 {
                let last = words[words.len() - 1].to_lowercase();
                prop_assert!(!CONNECTORS.contains(&last.as_str()), "trailing connector: {key:?}");
            }
        }
    }

    #[test]
    fn prop_independent_instances_agree(text in sentence_text(), mode in modes()) {
        let mut first = finder(mode, true);
        let mut second = finder(mode, true);

        prop_assert_eq!(first.find_places(&text), second.find_places(&text));
        prop_assert_eq!(first.trace(), second.trace());
    }

    #[test]
    fn prop_counts_match_raw_occurrences(text in sentence_text(), use_pos in any::<bool>()) {
        let analysis = finder(SegmentationMode::Character, use_pos).analyze(&text);

        // Every occurrence of a string gets the same verdict, so a surviving
        // key counts all of its raw occurrences
        for (key, count) in &analysis.places {
            let raw = analysis.raw_candidates.iter().filter(|c| *c == key).count();
            prop_assert_eq!(*count, raw, "count mismatch for {:?}", key);
        }
        prop_assert!(analysis.total_occurrences() <= analysis.raw_candidates.len());
    }

    #[test]
    fn prop_one_char_step_per_character(text in sentence_text()) {
        let analysis = finder(SegmentationMode::Character, true).analyze(&text);

        let steps = analysis
            .events()
            .iter()
            .filter(|e| matches!(e, TraceEvent::CharStep { .. }))
            .count();
        let expected = if text.trim().is_empty() { 0 } else { text.chars().count() };
        prop_assert_eq!(steps, expected);
    }
}
