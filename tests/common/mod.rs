//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use compkeys::{Config, IndexKeys};
use tempfile::TempDir;

// Re-export canonical test utilities from compkeys::testing
pub use compkeys::testing::{keys, label_map, labels, numbered_labels, prefixed};

/// Composite labels used by the scenario tests.
pub const SCENARIO_LABELS: [&str; 3] = ["label1", "label2", "label3"];

/// Configuration with [`SCENARIO_LABELS`] as composite labels.
pub fn scenario_config() -> Config {
    Config::with_composite_labels(SCENARIO_LABELS)
}

/// Write `contents` to `name` inside `dir` and return the path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write fixture");
    path
}

/// Temporary directory holding a document and optionally a config file.
pub struct Fixture {
    pub dir: TempDir,
    pub input: PathBuf,
    pub config: Option<PathBuf>,
}

pub fn fixture(input: &str, config: Option<&str>) -> Fixture {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_file(dir.path(), "input.json", input);
    let config = config.map(|c| write_file(dir.path(), "config.json", c));
    Fixture { dir, input, config }
}

/// Every key in `keys` must have a well-formed shape.
pub fn assert_keys_well_formed(keys: &IndexKeys) {
    for key in keys {
        if key == compkeys::INDEX_NO_FILTERS {
            continue;
        }
        let (head, rest) = key
            .split_once(compkeys::KEY_SEPARATOR)
            .unwrap_or_else(|| panic!("key without separator: {:?}", key));
        assert!(!head.is_empty(), "empty label or mask in {:?}", key);
        assert!(!rest.is_empty(), "empty token in {:?}", key);
    }
}
