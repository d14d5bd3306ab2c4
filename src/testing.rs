//! Fixture builders for label maps and expected key sets.
//!
//! Compiled into the library (hidden from docs) so that unit and
//! integration tests share one definition.

#![doc(hidden)]

use crate::types::{IndexKeys, LabelTokenMap};

/// Owned label list from string literals.
pub fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Build a label → token map from `(label, tokens)` pairs.
pub fn label_map<'a, T>(entries: &[(&str, T)]) -> LabelTokenMap
where
    T: AsRef<[&'a str]>,
{
    let mut map = LabelTokenMap::new();
    for (label, tokens) in entries {
        let set = map.entry(label.to_string()).or_default();
        set.extend(tokens.as_ref().iter().map(|t| t.to_string()));
    }
    map
}

/// Key set from string literals.
pub fn keys(items: &[&str]) -> IndexKeys {
    items.iter().map(|s| s.to_string()).collect()
}

/// Key set made of `<label> <token>` for every token.
pub fn prefixed<I, S>(label: &str, tokens: I) -> IndexKeys
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|t| format!("{} {}", label, t.as_ref()))
        .collect()
}

/// `n` single-token labels named `label0 ..`, for size limit tests.
pub fn numbered_labels(n: usize) -> Vec<(String, String)> {
    (0..n)
        .map(|i| (format!("label{}", i), "abc".to_string()))
        .collect()
}
