// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by configuration validation and key building.
//!
//! There are only two ways a build can fail, and both are deterministic: the
//! same inputs and configuration always fail the same way. Nothing here is
//! retryable. Bit allocator exhaustion is not an error; it panics.

use std::fmt;

/// Error type for configuration and limit violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The composite label list is longer than the engine can enumerate.
    Configuration { labels: usize, max: usize },
    /// A single build emitted more keys than a document may carry.
    LimitExceeded { size: usize, max: usize },
}

impl Error {
    /// True for errors caused by an invalid [`Config`](crate::Config).
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration { .. })
    }

    /// True for errors caused by the key-count ceiling.
    pub fn is_limit_exceeded(&self) -> bool {
        matches!(self, Error::LimitExceeded { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration { labels, max } => {
                write!(
                    f,
                    "composite_idx_labels size {} exceeds {}",
                    labels, max
                )
            }
            Error::LimitExceeded { size, max } => {
                write!(f, "index size {} exceeds {}", size, max)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
