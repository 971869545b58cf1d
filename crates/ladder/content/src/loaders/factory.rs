//! Content factory for building a ladder registry from data files.

use std::path::PathBuf;

use ladder_core::{LadderConfig, LadderRegistry, LadderTable};

use crate::loaders::{ConfigLoader, LadderTableLoader, LoadResult};

/// Loads ladder content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── ladders.ron   (or ladders.toml)
/// ```
///
/// Missing files fall back to [`LadderConfig::default`] and the bundled table.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load ladder configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<LadderConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(LadderConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the ladder table from `ladders.ron`, else `ladders.toml`.
    pub fn load_table(&self) -> LoadResult<LadderTable> {
        for name in ["ladders.ron", "ladders.toml"] {
            let path = self.data_dir.join(name);
            if path.exists() {
                return LadderTableLoader::load(&path);
            }
        }
        LadderTableLoader::bundled()
    }

    /// Load config and table, then validate them into a registry.
    pub fn build_registry(&self) -> LoadResult<LadderRegistry> {
        let config = self.load_config()?;
        let table = self.load_table()?;
        LadderRegistry::build(&table, config).map_err(|e| {
            anyhow::anyhow!(
                "Invalid ladder table in {}: {}",
                self.data_dir.display(),
                e
            )
        })
    }
}
