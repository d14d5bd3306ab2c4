// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Label → token set accumulation shared by [`Indexes`](crate::Indexes) and
//! [`Filters`](crate::Filters).

use log::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{simple_key, IndexKeys, LabelTokenMap, MAX_INDEXES_SIZE};

/// Used by builders created without a configuration.
pub(crate) static DEFAULT_CONFIG: Config = Config::DEFAULT;

/// Deduplicated tokens per label, case-folded according to the configuration.
#[derive(Debug, Clone)]
pub struct Accumulator<'c> {
    tokens: LabelTokenMap,
    conf: &'c Config,
}

impl<'c> Accumulator<'c> {
    pub fn new(conf: &'c Config) -> Self {
        Accumulator {
            tokens: LabelTokenMap::new(),
            conf,
        }
    }

    /// Insert `tokens` under `label`. Re-adding a token is a no-op, and empty
    /// tokens are ignored.
    pub fn add<I, S>(&mut self, label: &str, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            let token = token.as_ref();
            if token.is_empty() {
                continue;
            }
            let token = if self.conf.ignore_case {
                token.to_lowercase()
            } else {
                token.to_string()
            };

            // Avoid allocating the label for every token once it exists.
            match self.tokens.get_mut(label) {
                Some(set) => {
                    set.insert(token);
                }
                None => {
                    self.tokens.entry(label.to_string()).or_default().insert(token);
                }
            }
        }
    }

    pub fn config(&self) -> &'c Config {
        self.conf
    }

    pub fn tokens(&self) -> &LabelTokenMap {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// `<label> <token>` for every pair whose label is not in `exclude`.
    pub fn simple_keys(&self, exclude: &[String]) -> IndexKeys {
        self.tokens
            .iter()
            .filter(|(label, _)| !exclude.contains(*label))
            .flat_map(|(label, tokens)| tokens.iter().map(move |token| simple_key(label, token)))
            .collect()
    }
}

/// Final step of every build: enforce [`MAX_INDEXES_SIZE`].
pub(crate) fn check_size(keys: IndexKeys) -> Result<IndexKeys> {
    // INVARIANT: no build returns more than MAX_INDEXES_SIZE keys
    if keys.len() > MAX_INDEXES_SIZE {
        debug!("rejecting build: {} keys", keys.len());
        return Err(Error::LimitExceeded {
            size: keys.len(),
            max: MAX_INDEXES_SIZE,
        });
    }
    Ok(keys)
}

/// Turn a build error into a panic for the `must_*` calling convention.
pub(crate) fn must<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}
