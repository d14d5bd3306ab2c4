// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document-side key builder.
//!
//! A stored document must carry every key a query could probe, so `Indexes`
//! emits all plain keys, every composite key, and the "no filters" sentinel
//! whenever it is enabled.
//!
//! ```ignore
//! let conf = Config::with_composite_labels(["status", "owner"]);
//! let mut idx = Indexes::new(&conf);
//! idx.add("status", ["open"])
//!     .add("owner", ["alice"])
//!     .add_bigrams("title", "fix parser");
//!
//! let keys = idx.build()?; // "status open", "owner alice", "3 open;alice", "title fi", ...
//! ```

use log::debug;

use crate::accumulator::{check_size, must, Accumulator, DEFAULT_CONFIG};
use crate::composite::{composite_keys, Mode};
use crate::config::Config;
use crate::error::Result;
use crate::tokenize::{bigrams, biunigrams, prefixes, suffixes};
use crate::types::{IndexKeys, LabelTokenMap, INDEX_NO_FILTERS};
use crate::value::Value;

/// Extra indexes to store with a document.
#[derive(Debug, Clone)]
pub struct Indexes<'c> {
    acc: Accumulator<'c>,
}

impl Default for Indexes<'static> {
    fn default() -> Self {
        Indexes::new(&DEFAULT_CONFIG)
    }
}

impl<'c> Indexes<'c> {
    pub fn new(conf: &'c Config) -> Self {
        Indexes {
            acc: Accumulator::new(conf),
        }
    }

    /// Add raw tokens.
    pub fn add<I, S>(&mut self, label: &str, tokens: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.acc.add(label, tokens);
        self
    }

    pub fn add_bigrams(&mut self, label: &str, s: &str) -> &mut Self {
        self.add(label, bigrams(s))
    }

    pub fn add_biunigrams(&mut self, label: &str, s: &str) -> &mut Self {
        self.add(label, biunigrams(s))
    }

    pub fn add_prefixes(&mut self, label: &str, s: &str) -> &mut Self {
        self.add(label, prefixes(s))
    }

    pub fn add_suffixes(&mut self, label: &str, s: &str) -> &mut Self {
        self.add(label, suffixes(s))
    }

    /// Add a typed value: one token per list element, timestamps as epoch
    /// nanoseconds, anything else via `Display`.
    pub fn add_value(&mut self, label: &str, value: impl Into<Value>) -> &mut Self {
        self.add(label, value.into().tokens())
    }

    pub fn config(&self) -> &'c Config {
        self.acc.config()
    }

    pub fn tokens(&self) -> &LabelTokenMap {
        self.acc.tokens()
    }

    pub fn is_empty(&self) -> bool {
        self.acc.is_empty()
    }

    /// Build the keys to save. Does not consume or modify the builder.
    pub fn build(&self) -> Result<IndexKeys> {
        let conf = self.acc.config();
        let mut built = self.acc.simple_keys(&[]);

        if conf.composite_idx_labels.len() > 1 {
            let composite =
                composite_keys(&conf.composite_idx_labels, self.acc.tokens(), Mode::Index)?;
            built.extend(composite);
        }

        // Every document answers a query with no filters.
        if conf.save_no_filters_index {
            built.insert(INDEX_NO_FILTERS.to_string());
        }

        debug!(
            "indexes: {} labels -> {} keys",
            self.acc.tokens().len(),
            built.len()
        );
        check_size(built)
    }

    /// [`build`](Self::build) for callers that treat a limit violation as a bug.
    ///
    /// # Panics
    /// Panics on any build error.
    pub fn must_build(&self) -> IndexKeys {
        must(self.build())
    }
}
