// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The shapes that flow between builders, the composite engine and callers.
//!
//! # Key formats
//!
//! | Kind       | Shape                                   | Example     |
//! |------------|-----------------------------------------|-------------|
//! | Simple     | `<label> <token>`                       | `status ok` |
//! | Composite  | `<bitmask> <token1>;<token2>;...`       | `5 a;c`     |
//! | IN filter  | `<bitmask>` (used as a token)           | `13`        |
//! | No filters | `__NF__`                                | `__NF__`    |
//!
//! The bitmask is decimal with no leading zeros. These strings are what ends up
//! persisted next to documents, so every detail here is a compatibility
//! contract.

use std::collections::{BTreeMap, BTreeSet};

/// Index key written when a build has nothing else to say.
pub const INDEX_NO_FILTERS: &str = "__NF__";

/// Maximum number of keys a single build may emit.
pub const MAX_INDEXES_SIZE: usize = 512;

/// Maximum number of labels in a composite label list.
pub const MAX_COMPOSITE_INDEX_LABELS: usize = 8;

/// Separator between tokens inside a composite key.
pub const COMPOSITE_TOKEN_SEPARATOR: char = ';';

/// Separator between the label (or bitmask) and the token(s) of a key.
pub const KEY_SEPARATOR: char = ' ';

/// Label → deduplicated token set.
///
/// Ordered so that every build is deterministic. Semantically both levels
/// are sets.
pub type LabelTokenMap = BTreeMap<String, BTreeSet<String>>;

/// The set of keys returned by a build.
pub type IndexKeys = BTreeSet<String>;

/// A single allocated IN bit. Always an exact power of two.
pub type Bit = u16;

/// Format a simple `<label> <token>` key.
#[inline]
pub fn simple_key(label: &str, token: &str) -> String {
    let mut key = String::with_capacity(label.len() + token.len() + 1);
    key.push_str(label);
    key.push(KEY_SEPARATOR);
    key.push_str(token);
    key
}

/// Format a composite `<mask> <joined>` key.
#[inline]
pub fn composite_key(mask: u8, joined_tokens: &str) -> String {
    format!("{}{}{}", mask, KEY_SEPARATOR, joined_tokens)
}
