// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the compkeys command-line interface.
//!
//! `index` and `filter` print the keys for a labelled JSON object, `validate`
//! checks a configuration file, and `in` walks through IN-query bit keys.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "compkeys",
    about = "Secondary and composite index keys for exact-match stores",
    version
)]
pub struct Cli {
    /// Log build details to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the keys to store with a document
    Index {
        /// JSON object of label -> value
        #[arg(short, long)]
        input: PathBuf,

        /// Configuration file (composite labels, case folding, sentinel)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the keys to look up for a query
    Filter {
        /// JSON object of label -> value
        #[arg(short, long)]
        input: PathBuf,

        /// Configuration file (composite labels, case folding, sentinel)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Check a configuration file
    Validate {
        /// Configuration file
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Allocate IN bits and print document and query keys
    In {
        /// Every value the field can take, in bit order
        #[arg(long, value_delimiter = ',', required = true)]
        values: Vec<String>,

        /// Values held by the document
        #[arg(long, value_delimiter = ',')]
        doc: Vec<String>,

        /// Values the query accepts
        #[arg(long, value_delimiter = ',')]
        query: Vec<String>,
    },
}
