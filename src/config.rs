// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Builder configuration.
//!
//! A `Config` is constructed by the caller, validated once, then shared
//! read-only by every builder that uses it. There is no global mutable
//! default: builders created without a configuration use [`Config::DEFAULT`].
//!
//! Configurations are plain serde structs so they can live in a JSON file:
//!
//! ```json
//! {
//!   "compositeIdxLabels": ["status", "owner"],
//!   "ignoreCase": true,
//!   "saveNoFiltersIndex": false
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::MAX_COMPOSITE_INDEX_LABELS;

/// Extra index configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Labels combined into composite indexes. Order is significant: the
    /// first label is the lowest bit of every composite bitmask.
    #[serde(alias = "composite_idx_labels")]
    pub composite_idx_labels: Vec<String>,
    /// Lowercase every token on insertion.
    #[serde(alias = "ignore_case")]
    pub ignore_case: bool,
    /// Emit [`INDEX_NO_FILTERS`](crate::INDEX_NO_FILTERS).
    #[serde(alias = "save_no_filters_index")]
    pub save_no_filters_index: bool,
}

impl Config {
    /// Configuration used when a builder is created without one.
    pub const DEFAULT: Config = Config {
        composite_idx_labels: Vec::new(),
        ignore_case: false,
        save_no_filters_index: false,
    };

    /// Configuration with the given composite labels and default flags.
    pub fn with_composite_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Config {
            composite_idx_labels: labels.into_iter().map(Into::into).collect(),
            ..Config::DEFAULT
        }
    }

    /// Parse a configuration from JSON. The result is not validated.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Check the composite label count. Idempotent.
    pub fn validate(&self) -> Result<&Self> {
        check_composite_labels(&self.composite_idx_labels)?;
        Ok(self)
    }

    /// Like [`validate`](Self::validate), but an invalid configuration is a
    /// programming error.
    ///
    /// # Panics
    /// Panics if the composite label list is longer than
    /// [`MAX_COMPOSITE_INDEX_LABELS`].
    pub fn must_validate(&self) -> &Self {
        match self.validate() {
            Ok(conf) => conf,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Shared by [`Config::validate`] and the composite engine, which re-checks in
/// case validation was skipped.
pub(crate) fn check_composite_labels(labels: &[String]) -> Result<()> {
    if labels.len() > MAX_COMPOSITE_INDEX_LABELS {
        return Err(Error::Configuration {
            labels: labels.len(),
            max: MAX_COMPOSITE_INDEX_LABELS,
        });
    }
    Ok(())
}
