// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! JSON input for the command line: one object of labelled values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{Filters, Indexes, Value};

/// A labelled document or query, as read from JSON.
///
/// ```json
/// {
///   "status": "open",
///   "tags": ["rust", "db"],
///   "priority": 2,
///   "title": {"tokenizer": "bigrams", "value": "fix parser"}
/// }
/// ```
pub type DocumentInput = BTreeMap<String, FieldInput>;

/// How a single label's value is turned into tokens.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tokenizer {
    /// The value's tokens as-is.
    #[default]
    Raw,
    Bigrams,
    Biunigrams,
    Prefixes,
    Suffixes,
}

/// One label's value.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum FieldInput {
    Tokenized {
        #[serde(default)]
        tokenizer: Tokenizer,
        value: String,
    },
    Plain(serde_json::Value),
}

impl FieldInput {
    /// The tokenizer to apply, `Raw` for plain values.
    pub fn tokenizer(&self) -> Tokenizer {
        match self {
            FieldInput::Tokenized { tokenizer, .. } => *tokenizer,
            FieldInput::Plain(_) => Tokenizer::Raw,
        }
    }

    /// Convert a JSON value into a typed [`Value`]. `null` yields `None`.
    pub fn to_value(&self) -> Result<Option<Value>, String> {
        match self {
            FieldInput::Tokenized { value, .. } => Ok(Some(Value::Str(value.clone()))),
            FieldInput::Plain(json) => json_to_value(json),
        }
    }
}

fn json_to_value(json: &serde_json::Value) -> Result<Option<Value>, String> {
    use serde_json::Value as Json;

    match json {
        Json::Null => Ok(None),
        Json::Bool(b) => Ok(Some(Value::Bool(*b))),
        Json::String(s) => Ok(Some(Value::Str(s.clone()))),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Some(Value::Int(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Some(Value::UInt(u)))
            } else {
                Ok(n.as_f64().map(Value::Float))
            }
        }
        Json::Array(items) => {
            let mut tokens = Vec::with_capacity(items.len());
            for item in items {
                match json_to_value(item)? {
                    Some(Value::List(_)) => return Err("nested arrays are not supported".into()),
                    Some(value) => tokens.extend(value.tokens()),
                    None => {}
                }
            }
            Ok(Some(Value::List(tokens)))
        }
        Json::Object(_) => Err("objects must have the form {\"tokenizer\", \"value\"}".into()),
    }
}

/// Feed every field of `doc` into a document-side builder.
pub fn apply_to_indexes(idx: &mut Indexes<'_>, doc: &DocumentInput) -> Result<(), String> {
    for (label, field) in doc {
        match field {
            FieldInput::Tokenized { tokenizer, value } => {
                match tokenizer {
                    Tokenizer::Raw => idx.add(label, [value]),
                    Tokenizer::Bigrams => idx.add_bigrams(label, value),
                    Tokenizer::Biunigrams => idx.add_biunigrams(label, value),
                    Tokenizer::Prefixes => idx.add_prefixes(label, value),
                    Tokenizer::Suffixes => idx.add_suffixes(label, value),
                };
            }
            FieldInput::Plain(json) => {
                if let Some(value) = plain_value(label, json)? {
                    idx.add_value(label, value);
                }
            }
        }
    }
    Ok(())
}

/// Feed every field of `query` into a query-side builder. Prefix and suffix
/// fields are looked up whole.
pub fn apply_to_filters(filters: &mut Filters<'_>, query: &DocumentInput) -> Result<(), String> {
    for (label, field) in query {
        match field {
            FieldInput::Tokenized { tokenizer, value } => {
                match tokenizer {
                    Tokenizer::Raw => filters.add(label, [value]),
                    Tokenizer::Bigrams => filters.add_bigrams(label, value),
                    Tokenizer::Biunigrams => filters.add_biunigrams(label, value),
                    Tokenizer::Prefixes => filters.add_prefix(label, value),
                    Tokenizer::Suffixes => filters.add_suffix(label, value),
                };
            }
            FieldInput::Plain(json) => {
                if let Some(value) = plain_value(label, json)? {
                    filters.add_value(label, value);
                }
            }
        }
    }
    Ok(())
}

fn plain_value(label: &str, json: &serde_json::Value) -> Result<Option<Value>, String> {
    json_to_value(json).map_err(|e| format!("label '{}': {}", label, e))
}
