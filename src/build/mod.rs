// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! File-driven key generation behind the `compkeys` binary.
//!
//! Each entry point reads JSON from disk, runs the library builders and hands
//! back the keys; printing is left to the caller.

pub mod document;

use std::fs;
use std::path::Path;

use log::debug;

use crate::{Bit, Config, Filters, InBuilder, IndexKeys, Indexes};

pub use document::*;

/// Read and validate a configuration file. `None` yields the default config.
pub fn load_config(path: Option<&Path>) -> Result<Config, String> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
    let config =
        Config::from_json(&raw).map_err(|e| format!("Invalid config JSON: {}", e))?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Read a labelled JSON object.
pub fn load_document(path: &Path) -> Result<DocumentInput, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&raw).map_err(|e| format!("Invalid document JSON: {}", e))
}

/// Keys to store with the document at `input`.
pub fn run_index(input: &Path, config: Option<&Path>) -> Result<IndexKeys, String> {
    let config = load_config(config)?;
    let doc = load_document(input)?;
    debug!("index: {} fields from {}", doc.len(), input.display());

    let mut idx = Indexes::new(&config);
    apply_to_indexes(&mut idx, &doc)?;
    idx.build().map_err(|e| e.to_string())
}

/// Keys to look up for the query at `input`.
pub fn run_filter(input: &Path, config: Option<&Path>) -> Result<IndexKeys, String> {
    let config = load_config(config)?;
    let query = load_document(input)?;
    debug!("filter: {} fields from {}", query.len(), input.display());

    let mut filters = Filters::new(&config);
    apply_to_filters(&mut filters, &query)?;
    filters.build().map_err(|e| e.to_string())
}

/// Result of an IN-query walk-through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InKeys {
    /// Allocated bit per value, in allocation order.
    pub bits: Vec<(String, Bit)>,
    /// Tokens to store with the document.
    pub doc: Vec<String>,
    /// Token to look up.
    pub query: String,
}

/// Allocate one bit per value, then compute the document's IN tokens for the
/// values it holds and the query token for the values it asks about.
pub fn run_in(values: &[String], doc: &[String], query: &[String]) -> Result<InKeys, String> {
    if values.len() > InBuilder::capacity() as usize {
        return Err(format!(
            "{} values exceed the {} available bits",
            values.len(),
            InBuilder::capacity()
        ));
    }

    let mut builder = InBuilder::new();
    let bits: Vec<(String, Bit)> = values
        .iter()
        .map(|v| (v.clone(), builder.new_bit()))
        .collect();

    let lookup = |wanted: &[String]| -> Result<Vec<Bit>, String> {
        wanted
            .iter()
            .map(|w| {
                bits.iter()
                    .find(|(v, _)| v == w)
                    .map(|(_, bit)| *bit)
                    .ok_or_else(|| format!("unknown value '{}'", w))
            })
            .collect()
    };

    let doc_bits = lookup(doc)?;
    let query_bits = lookup(query)?;

    Ok(InKeys {
        doc: builder.indexes_for(&doc_bits),
        query: builder.filter_for(&query_bits),
        bits,
    })
}
