// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Composite index construction.
//!
//! A store that cannot intersect several single-label scans cheaply (a zig-zag
//! merge) can still answer `label1 = a AND label3 = c` with one exact-match
//! lookup if every document also carries a key combining both tokens. This
//! module generates those keys.
//!
//! # Bit assignment
//!
//! Bit `i` of a mask stands for `labels[i]`. Tokens inside a key are joined in
//! the same order, lowest bit first. For `["label1", "label2", "label3"]`:
//!
//! ```text
//!       label3 label2 label1
//!  3      0      1      1     "3 a;b"
//!  5      1      0      1     "5 a;c"
//!  6      1      1      0     "6 b;c"
//!  7      1      1      1     "7 a;b;c"
//! ```
//!
//! Persisted keys depend on this mapping. Never reorder it.
//!
//! # Modes
//!
//! - [`Mode::Index`] enumerates every mask with at least two bits set and
//!   emits the full token cross product for each. A single-bit mask is never
//!   emitted; the plain `<label> <token>` key already covers it.
//! - [`Mode::Filter`] builds only the mask of labels that actually carry a
//!   token, and emits a combination only when it consumes a `(label, token)`
//!   pair no earlier combination consumed. A query with one value per label
//!   therefore produces exactly one key.

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::config::check_composite_labels;
use crate::contracts::check_composite_key;
use crate::error::Result;
use crate::types::{composite_key, IndexKeys, LabelTokenMap, COMPOSITE_TOKEN_SEPARATOR};

/// Which side of the lookup the keys are built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Keys stored with a document.
    Index,
    /// Keys looked up by a query.
    Filter,
}

/// Mask of the composite labels that have at least one token.
pub fn filter_mask(labels: &[String], tokens: &LabelTokenMap) -> u8 {
    labels
        .iter()
        .enumerate()
        .filter(|(_, label)| tokens.get(*label).is_some_and(|set| !set.is_empty()))
        .fold(0u8, |mask, (bit, _)| mask | (1 << bit))
}

/// Generate composite keys for `labels` from `tokens`.
///
/// Returns [`Error::Configuration`](crate::Error::Configuration) before doing
/// any work if `labels` is longer than
/// [`MAX_COMPOSITE_INDEX_LABELS`](crate::MAX_COMPOSITE_INDEX_LABELS).
pub fn composite_keys(labels: &[String], tokens: &LabelTokenMap, mode: Mode) -> Result<IndexKeys> {
    check_composite_labels(labels)?;

    let mut expansion = Expansion::new(labels, tokens, mode);
    match mode {
        Mode::Index => {
            let end = 1u16 << labels.len();
            for mask in 3..end {
                // INVARIANT: single-bit masks are never emitted
                if mask & (mask - 1) == 0 {
                    continue;
                }
                expansion.run(mask as u8);
            }
        }
        Mode::Filter => {
            let mask = filter_mask(labels, tokens);
            // INVARIANT: a single-label query is served by the plain key
            if mask.count_ones() >= 2 {
                expansion.run(mask);
            }
        }
    }

    debug!(
        "composite {:?}: {} labels, {} keys",
        mode,
        labels.len(),
        expansion.keys.len()
    );
    Ok(expansion.keys)
}

/// Recursive cross-product state for one `composite_keys` call.
struct Expansion<'a> {
    levels: Vec<Option<&'a BTreeSet<String>>>,
    mode: Mode,
    /// Per label, tokens already consumed by an emitted path (filter mode).
    used: Vec<BTreeSet<&'a str>>,
    joined: String,
    keys: IndexKeys,
}

impl<'a> Expansion<'a> {
    fn new(labels: &[String], tokens: &'a LabelTokenMap, mode: Mode) -> Self {
        Expansion {
            levels: labels.iter().map(|label| tokens.get(label)).collect(),
            mode,
            used: vec![BTreeSet::new(); labels.len()],
            joined: String::with_capacity(64),
            keys: IndexKeys::new(),
        }
    }

    fn run(&mut self, mask: u8) {
        trace!("expanding mask {:#010b}", mask);
        self.joined.clear();
        self.expand(mask, 0, false);
    }

    fn expand(&mut self, mask: u8, level: usize, mut some_new: bool) {
        if level == self.levels.len() {
            self.emit(mask, some_new);
            return;
        }

        if mask & (1 << level) == 0 {
            self.expand(mask, level + 1, some_new);
            return;
        }

        // A missing label has no tokens, so no path through this mask survives.
        let Some(tokens) = self.levels[level] else {
            return;
        };

        for token in tokens {
            let restore = self.joined.len();
            if !self.joined.is_empty() {
                self.joined.push(COMPOSITE_TOKEN_SEPARATOR);
            }
            self.joined.push_str(token);

            if self.mode == Mode::Filter && self.used[level].insert(token.as_str()) {
                some_new = true;
            }

            self.expand(mask, level + 1, some_new);
            self.joined.truncate(restore);
        }
    }

    fn emit(&mut self, mask: u8, some_new: bool) {
        if self.mode == Mode::Filter && !some_new {
            return;
        }
        let key = composite_key(mask, &self.joined);
        check_composite_key(&key, mask);
        self.keys.insert(key);
    }
}
