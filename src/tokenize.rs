// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning strings into token sets.
//!
//! Words are split on ASCII space only; tabs, newlines and other whitespace are
//! ordinary characters. Consecutive spaces never produce empty words. All
//! tokenizers work on Unicode scalar values, so a multi-byte character is
//! always a whole unit.
//!
//! | Function     | `"abc d"`                              |
//! |--------------|----------------------------------------|
//! | `bigrams`    | `ab bc`                                |
//! | `biunigrams` | `ab bc a b c d`                        |
//! | `prefixes`   | `a ab abc d`                           |
//! | `suffixes`   | `c bc abc d`                           |
//!
//! Results are sets; callers must not rely on their iteration order.

use std::collections::BTreeSet;

/// Word separator. Only ASCII space splits words.
const WORD_SEPARATOR: char = ' ';

fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split(WORD_SEPARATOR).filter(|w| !w.is_empty())
}

/// Every pair of adjacent characters that does not straddle a space.
pub fn bigrams(s: &str) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    for word in words(s) {
        let mut chars = word.chars();
        let Some(mut prev) = chars.next() else {
            continue;
        };
        for c in chars {
            let mut bigram = String::with_capacity(prev.len_utf8() + c.len_utf8());
            bigram.push(prev);
            bigram.push(c);
            tokens.insert(bigram);
            prev = c;
        }
    }
    tokens
}

/// [`bigrams`] plus every non-space character on its own.
pub fn biunigrams(s: &str) -> BTreeSet<String> {
    let mut tokens = bigrams(s);
    tokens.extend(
        s.chars()
            .filter(|&c| c != WORD_SEPARATOR)
            .map(String::from),
    );
    tokens
}

/// Every non-empty prefix of every word.
pub fn prefixes(s: &str) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    for word in words(s) {
        for (end, c) in word.char_indices() {
            tokens.insert(word[..end + c.len_utf8()].to_string());
        }
    }
    tokens
}

/// Every non-empty suffix of every word.
pub fn suffixes(s: &str) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    for word in words(s) {
        for (start, _) in word.char_indices() {
            tokens.insert(word[start..].to_string());
        }
    }
    tokens
}

/// Number of Unicode scalar values in `s`.
#[inline]
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}
