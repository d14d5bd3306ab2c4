// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query-side key builder.
//!
//! `Filters` produces the key(s) a query looks up. Query values are not
//! tokenized the way stored values are: a prefix query is itself one prefix,
//! and a substring query only needs its bigrams, since a stored document
//! carries every bigram it contains.
//!
//! When two or more composite labels carry a value, the composite key alone
//! answers the query and the plain keys of those labels are dropped. Otherwise
//! the plain keys stay, because documents never store a single-label composite
//! key.

use log::debug;

use crate::accumulator::{check_size, must, Accumulator, DEFAULT_CONFIG};
use crate::composite::{composite_keys, Mode};
use crate::config::Config;
use crate::error::Result;
use crate::tokenize::{bigrams, char_len};
use crate::types::{IndexKeys, LabelTokenMap, INDEX_NO_FILTERS};
use crate::value::Value;

/// Keys to look up for a query.
#[derive(Debug, Clone)]
pub struct Filters<'c> {
    acc: Accumulator<'c>,
}

impl Default for Filters<'static> {
    fn default() -> Self {
        Filters::new(&DEFAULT_CONFIG)
    }
}

impl<'c> Filters<'c> {
    pub fn new(conf: &'c Config) -> Self {
        Filters {
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

    /// Substring query. A single character is looked up as-is, which matches
    /// documents indexed with [`Indexes::add_biunigrams`](crate::Indexes::add_biunigrams).
    pub fn add_bigrams(&mut self, label: &str, s: &str) -> &mut Self {
        self.add_biunigrams(label, s)
    }

    pub fn add_biunigrams(&mut self, label: &str, s: &str) -> &mut Self {
        match char_len(s) {
            0 => self,
            1 => self.add(label, [s]),
            _ => self.add(label, bigrams(s)),
        }
    }

    /// Prefix query: the whole string is one prefix token.
    pub fn add_prefix(&mut self, label: &str, s: &str) -> &mut Self {
        self.add(label, [s])
    }

    /// Suffix query: the whole string is one suffix token.
    pub fn add_suffix(&mut self, label: &str, s: &str) -> &mut Self {
        self.add(label, [s])
    }

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

    /// Build the keys to look up. Does not consume or modify the builder.
    pub fn build(&self) -> Result<IndexKeys> {
        let conf = self.acc.config();
        let labels = &conf.composite_idx_labels;

        let composite = if labels.len() > 1 {
            composite_keys(labels, self.acc.tokens(), Mode::Filter)?
        } else {
            IndexKeys::new()
        };

        let exclude: &[String] = if composite.is_empty() { &[] } else { labels };
        let mut built = self.acc.simple_keys(exclude);
        built.extend(composite);

        if conf.save_no_filters_index && built.is_empty() {
            built.insert(INDEX_NO_FILTERS.to_string());
        }

        debug!(
            "filters: {} labels -> {} keys",
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
