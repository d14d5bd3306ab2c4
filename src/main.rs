// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use compkeys::build::{load_config, run_filter, run_in, run_index};
use compkeys::IndexKeys;

mod cli;
use cli::{Cli, Commands};

/// Level directive for `-v` occurrences: none → warn, `-v` → debug, `-vv` → trace.
fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Route the library's `log::*` output through a stderr fmt subscriber.
fn init_logging(verbose: u8) {
    // Bridge `log` crate → tracing; ok() in case already initialized
    tracing_log::LogTracer::init().ok();

    let filter = EnvFilter::try_new(level_for(verbose)).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Index { input, config } => {
            let keys = run_index(&input, config.as_deref())
                .map_err(|e| anyhow!(e))
                .with_context(|| format!("building document keys for {}", input.display()))?;
            print_keys(&keys);
        }
        Commands::Filter { input, config } => {
            let keys = run_filter(&input, config.as_deref())
                .map_err(|e| anyhow!(e))
                .with_context(|| format!("building query keys for {}", input.display()))?;
            print_keys(&keys);
        }
        Commands::Validate { config } => {
            let conf = load_config(Some(config.as_path()))
                .map_err(|e| anyhow!(e))
                .with_context(|| format!("validating {}", config.display()))?;
            eprintln!(
                "✓ {} composite labels, ignore_case={}, save_no_filters_index={}",
                conf.composite_idx_labels.len(),
                conf.ignore_case,
                conf.save_no_filters_index
            );
        }
        Commands::In { values, doc, query } => {
            let keys = run_in(&values, &doc, &query).map_err(|e| anyhow!(e))?;
            for (value, bit) in &keys.bits {
                println!("bit {} {}", value, bit);
            }
            for key in &keys.doc {
                println!("doc {}", key);
            }
            println!("query {}", keys.query);
        }
    }
    Ok(())
}

fn print_keys(keys: &IndexKeys) {
    for key in keys {
        println!("{}", key);
    }
}
