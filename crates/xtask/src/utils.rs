//! Utility functions for xtask commands

use anyhow::{Context, Result, bail};
use std::path::Path;

use ladder_content::ContentFactory;
use ladder_core::{LadderConfig, LadderRegistry, LadderTable};

/// Environment variable overriding `combine_buffs`.
pub const COMBINE_BUFFS_ENV: &str = "LADDER_COMBINE_BUFFS";

/// Applies the environment override (if any) on top of `config`.
pub fn config_from_env(config: LadderConfig) -> Result<LadderConfig> {
    match std::env::var(COMBINE_BUFFS_ENV) {
        Ok(raw) => Ok(LadderConfig::with_combine_buffs(parse_flag(&raw).with_context(
            || format!("Invalid {COMBINE_BUFFS_ENV} value"),
        )?)),
        Err(std::env::VarError::NotPresent) => Ok(config),
        Err(e) => Err(e).with_context(|| format!("Failed to read {COMBINE_BUFFS_ENV}")),
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got {other:?}"),
    }
}

/// Loads the table and config from `data_dir` (bundled content when
/// omitted), applies the environment override and builds the registry.
pub fn load_registry(data_dir: Option<&Path>) -> Result<(LadderTable, LadderRegistry)> {
    let (table, config) = match data_dir {
        Some(dir) => {
            let factory = ContentFactory::new(dir);
            (factory.load_table()?, factory.load_config()?)
        }
        None => (
            ladder_content::LadderTableLoader::bundled()?,
            LadderConfig::default(),
        ),
    };
    let config = config_from_env(config)?;

    let registry = LadderRegistry::build(&table, config).context("Failed to build registry")?;
    Ok((table, registry))
}
