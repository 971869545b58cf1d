//! Ladder table loader.
//!
//! Tables are plain [`LadderTable`] data in RON or TOML. Loading only parses;
//! invariants are checked when the registry is built.

use std::path::Path;

use ladder_core::LadderTable;

use crate::loaders::{LoadResult, read_file};

/// Loader for ladder tables from RON or TOML files.
pub struct LadderTableLoader;

impl LadderTableLoader {
    /// Load a table, picking the format from the file extension
    /// (`.ron` or `.toml`).
    pub fn load(path: &Path) -> LoadResult<LadderTable> {
        let content = read_file(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => Self::from_ron_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ => Err(anyhow::anyhow!(
                "Unsupported ladder table format: {} (expected .ron or .toml)",
                path.display()
            )),
        }
    }

    pub fn from_ron_str(content: &str) -> LoadResult<LadderTable> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse ladder RON: {}", e))
    }

    pub fn from_toml_str(content: &str) -> LoadResult<LadderTable> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse ladder TOML: {}", e))
    }

    /// The catalogue shipped with this crate (`data/ladders.ron`).
    pub fn bundled() -> LoadResult<LadderTable> {
        Self::from_ron_str(include_str!("../../data/ladders.ron"))
    }
}
