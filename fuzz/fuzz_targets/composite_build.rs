// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for document and query builds.
//!
//! Random label lists, flags and token sets go through both builders. A build
//! may fail with a limit or configuration error, but it must never panic, and
//! a successful query must only ask for keys the document stored.

#![no_main]

use arbitrary::Arbitrary;
use compkeys::{Config, Filters, Indexes, MAX_COMPOSITE_INDEX_LABELS, MAX_INDEXES_SIZE};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    /// Number of composite labels, possibly over the limit
    composite: u8,
    ignore_case: bool,
    save_no_filters_index: bool,
    /// (label index, token) pairs for the document
    doc: Vec<(u8, String)>,
    /// Which document pairs the query reuses
    query: Vec<u8>,
}

fn label(i: u8) -> String {
    format!("l{}", i % 12)
}

fuzz_target!(|input: Input| {
    let conf = Config {
        composite_idx_labels: (0..input.composite % 12).map(label).collect(),
        ignore_case: input.ignore_case,
        save_no_filters_index: input.save_no_filters_index,
    };
    let doc: Vec<(String, String)> = input
        .doc
        .iter()
        .take(32)
        .map(|(l, t)| (label(*l), t.chars().take(16).collect()))
        .collect();

    let mut idx = Indexes::new(&conf);
    for (l, t) in &doc {
        idx.add(l, [t]);
    }

    let stored = match idx.build() {
        Ok(keys) => keys,
        Err(e) => {
            // INVARIANT 1: errors are limit or configuration errors, never panics
            assert!(
                e.is_limit_exceeded()
                    || conf.composite_idx_labels.len() > MAX_COMPOSITE_INDEX_LABELS
            );
            return;
        }
    };

    // INVARIANT 2: a successful build respects the size limit
    assert!(stored.len() <= MAX_INDEXES_SIZE);

    // One value per label, taken from the document
    let mut filters = Filters::new(&conf);
    let mut seen = std::collections::BTreeSet::new();
    for pick in input.query.iter().take(8) {
        if doc.is_empty() {
            break;
        }
        let (l, t) = &doc[*pick as usize % doc.len()];
        if seen.insert(l.clone()) {
            filters.add(l, [t]);
        }
    }

    // INVARIANT 3: every query key is stored by the document
    if let Ok(lookup) = filters.build() {
        assert!(lookup.is_subset(&stored), "{:?} not in {:?}", lookup, stored);
    }
});
