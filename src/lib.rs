// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Secondary index keys for document stores that only do exact-match lookups.
//!
//! Label pieces of a document, run them through a tokenizer, and persist the
//! returned keys next to the document. At query time the same builders produce
//! the key(s) to look up. Multi-label queries are answered by one composite key
//! instead of a zig-zag merge across several single-label scans.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌──────────────────┐   ┌──────────────┐
//! │ tokenize.rs │──▶│ indexes.rs   │──▶│  composite.rs    │──▶│ IndexKeys    │
//! │  value.rs   │   │ filters.rs   │   │ (bitmask power   │   │ (≤ 512 keys) │
//! │ (tokens)    │   │ (label→set)  │   │  set expansion)  │   │              │
//! └─────────────┘   └──────────────┘   └──────────────────┘   └──────────────┘
//!        ▲                  │
//!        │                  ▼
//! ┌─────────────┐   ┌──────────────┐
//! │   bits.rs   │   │  config.rs   │
//! │ (IN masks)  │   │  error.rs    │
//! └─────────────┘   └──────────────┘
//! ```
//!
//! | Module       | Responsibility                                      |
//! |--------------|-----------------------------------------------------|
//! | `tokenize`   | bigrams, biunigrams, prefixes, suffixes             |
//! | `value`      | typed values → canonical token strings              |
//! | `indexes`    | document-side builder                               |
//! | `filters`    | query-side builder                                  |
//! | `composite`  | composite key generation                            |
//! | `bits`       | IN bit allocation                                   |
//! | `config`     | composite labels, case folding, sentinel            |
//! | `contracts`  | debug-mode invariant checks                         |
//! | `build`      | JSON document input for the `compkeys` binary       |
//!
//! # Usage
//!
//! ```
//! use compkeys::{Config, Filters, Indexes};
//!
//! let conf = Config::with_composite_labels(["status", "owner"]);
//! conf.validate().unwrap();
//!
//! let mut doc = Indexes::new(&conf);
//! doc.add("status", ["open"]).add("owner", ["alice"]).add_bigrams("title", "fix it");
//! let stored = doc.build().unwrap();
//!
//! let mut query = Filters::new(&conf);
//! query.add("status", ["open"]).add("owner", ["alice"]);
//! let lookup = query.build().unwrap();
//!
//! assert_eq!(lookup.iter().collect::<Vec<_>>(), vec!["3 open;alice"]);
//! assert!(lookup.is_subset(&stored));
//! ```

mod accumulator;
pub mod bits;
pub mod build;
pub mod composite;
mod config;
pub mod contracts;
mod error;
mod filters;
mod indexes;
pub mod testing;
pub mod tokenize;
mod types;
mod value;

pub use accumulator::Accumulator;
pub use bits::InBuilder;
pub use composite::{composite_keys, filter_mask, Mode};
pub use config::Config;
pub use error::{Error, Result};
pub use filters::Filters;
pub use indexes::Indexes;
pub use tokenize::{bigrams, biunigrams, prefixes, suffixes};
pub use types::{
    composite_key, simple_key, Bit, IndexKeys, LabelTokenMap, COMPOSITE_TOKEN_SEPARATOR,
    INDEX_NO_FILTERS, KEY_SEPARATOR, MAX_COMPOSITE_INDEX_LABELS, MAX_INDEXES_SIZE,
};
pub use value::{format_float, unix_nanos, Value};
