//! Invariants of document and query keys.

use compkeys::{Config, Filters, IndexKeys, Indexes, MAX_COMPOSITE_INDEX_LABELS, MAX_INDEXES_SIZE};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

const LABELS: [&str; 5] = ["l0", "l1", "l2", "l3", "l4"];

fn token_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-cA-Cé]{1,3}").unwrap()
}

/// A document: for each label, up to two tokens.
fn document_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(token_strategy(), 0..3), LABELS.len())
}

/// Composite labels: a subsequence of LABELS.
fn config_strategy() -> impl Strategy<Value = Config> {
    (prop::sample::subsequence(LABELS.to_vec(), 0..=LABELS.len()), any::<bool>(), any::<bool>())
        .prop_map(|(labels, ignore_case, save_no_filters_index)| Config {
            composite_idx_labels: labels.into_iter().map(String::from).collect(),
            ignore_case,
            save_no_filters_index,
        })
}

fn index_keys(conf: &Config, doc: &[Vec<String>]) -> IndexKeys {
    let mut idx = Indexes::new(conf);
    for (label, tokens) in LABELS.iter().zip(doc) {
        idx.add(label, tokens);
    }
    idx.must_build()
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Any query made of one value per label, drawn from the document's own
    /// values, looks up only keys the document stored.
    #[test]
    fn prop_query_keys_are_stored(
        conf in config_strategy(),
        doc in document_strategy(),
        picks in prop::collection::vec((any::<bool>(), any::<prop::sample::Index>()), LABELS.len()),
    ) {
        let stored = index_keys(&conf, &doc);

        let mut query = Filters::new(&conf);
        for ((label, tokens), (include, pick)) in LABELS.iter().zip(&doc).zip(&picks) {
            if *include && !tokens.is_empty() {
                query.add(label, [pick.get(tokens)]);
            }
        }
        let lookup = query.must_build();

        prop_assert!(lookup.is_subset(&stored), "{:?} ⊄ {:?}", lookup, stored);
    }

    #[test]
    fn prop_ignore_case_folds_tokens(doc in document_strategy()) {
        let conf = Config { ignore_case: true, ..Config::DEFAULT };
        for key in index_keys(&conf, &doc) {
            prop_assert_eq!(key.to_lowercase(), key);
        }
    }

    /// With case folding on, a document built from its upper-case, lower-case
    /// or original tokens stores the same keys, and so does a query.
    #[test]
    fn prop_ignore_case_builds_are_identical(conf in config_strategy(), doc in document_strategy()) {
        let conf = Config { ignore_case: true, ..conf };
        let upper: Vec<Vec<String>> = doc
            .iter()
            .map(|tokens| tokens.iter().map(|t| t.to_uppercase()).collect())
            .collect();
        let lower: Vec<Vec<String>> = doc
            .iter()
            .map(|tokens| tokens.iter().map(|t| t.to_lowercase()).collect())
            .collect();

        let original = index_keys(&conf, &doc);
        prop_assert_eq!(&index_keys(&conf, &upper), &original);
        prop_assert_eq!(&index_keys(&conf, &lower), &original);

        let query_keys = |doc: &[Vec<String>]| {
            let mut query = Filters::new(&conf);
            for (label, tokens) in LABELS.iter().zip(doc) {
                if let Some(first) = tokens.first() {
                    query.add(label, [first]);
                }
            }
            query.must_build()
        };
        let original = query_keys(&doc);
        prop_assert_eq!(&query_keys(&upper), &original);
        prop_assert_eq!(&query_keys(&lower), &original);
    }

    #[test]
    fn prop_insertion_order_is_irrelevant(conf in config_strategy(), doc in document_strategy()) {
        let forward = index_keys(&conf, &doc);

        let mut idx = Indexes::new(&conf);
        for (label, tokens) in LABELS.iter().zip(&doc).rev() {
            for token in tokens.iter().rev() {
                idx.add(label, [token]);
            }
        }
        prop_assert_eq!(idx.must_build(), forward);
    }

    #[test]
    fn prop_size_boundary(extra in 0usize..3) {
        let n = MAX_INDEXES_SIZE - 1 + extra;
        let mut idx = Indexes::default();
        idx.add("label", (0..n).map(|i| i.to_string()));
        prop_assert_eq!(idx.build().is_ok(), n <= MAX_INDEXES_SIZE);
    }

    #[test]
    fn prop_label_count_boundary(n in 0usize..12) {
        let conf = Config::with_composite_labels((0..n).map(|i| format!("l{}", i)));
        prop_assert_eq!(conf.validate().is_ok(), n <= MAX_COMPOSITE_INDEX_LABELS);
        prop_assert_eq!(Filters::new(&conf).build().is_ok(), n <= MAX_COMPOSITE_INDEX_LABELS);
    }
}
