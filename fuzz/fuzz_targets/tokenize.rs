// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the tokenizers.
//!
//! Arbitrary UTF-8 (combining marks, control characters, lone spaces) must
//! never panic, and every token must be a non-empty run of whole characters
//! taken from a single word.

#![no_main]

use compkeys::{bigrams, biunigrams, prefixes, suffixes};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    // Cap length to keep prefix/suffix sets small
    let text: String = text.chars().take(256).collect();
    let words: Vec<&str> = text.split(' ').filter(|w| !w.is_empty()).collect();

    // INVARIANT 1: bigrams are two characters inside one word
    for gram in bigrams(&text) {
        assert_eq!(gram.chars().count(), 2);
        assert!(words.iter().any(|w| w.contains(gram.as_str())));
    }

    // INVARIANT 2: biunigrams extend bigrams
    let all = biunigrams(&text);
    assert!(bigrams(&text).is_subset(&all));

    // INVARIANT 3: prefixes and suffixes are anchored to a word
    for p in prefixes(&text) {
        assert!(words.iter().any(|w| w.starts_with(p.as_str())));
    }
    for s in suffixes(&text) {
        assert!(words.iter().any(|w| w.ends_with(s.as_str())));
    }

    // INVARIANT 4: no token is empty or contains the word separator
    for token in all {
        assert!(!token.is_empty() && !token.contains(' '));
    }
});
