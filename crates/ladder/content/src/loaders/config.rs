//! Ladder configuration loader.

use std::path::Path;

use ladder_core::LadderConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for ladder configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> LoadResult<LadderConfig> {
        let content = read_file(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> LoadResult<LadderConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_toggle() {
        let config = ConfigLoader::from_toml_str("combine_buffs = false").unwrap();
        assert!(!config.combine_buffs);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = ConfigLoader::from_toml_str("").unwrap();
        assert_eq!(config, LadderConfig::default());
    }

    #[test]
    fn rejects_wrong_type() {
        assert!(ConfigLoader::from_toml_str("combine_buffs = \"yes\"").is_err());
    }
}
