//! Validate a ladder table file by building a registry from it.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use ladder_content::LadderTableLoader;
use ladder_core::{LadderConfig, LadderRegistry};

use crate::utils;

/// Check that a ladder table file builds a registry
#[derive(Parser)]
pub struct Validate {
    /// Ladder table file (.ron or .toml)
    #[arg(value_name = "FILE")]
    path: PathBuf,
}

impl Validate {
    pub fn execute(self) -> Result<()> {
        if !self.path.exists() {
            anyhow::bail!("Ladder table not found: {}", self.path.display());
        }

        let table = LadderTableLoader::load(&self.path)?;
        let config = utils::config_from_env(LadderConfig::default())?;
        let registry = LadderRegistry::build(&table, config)
            .with_context(|| format!("Invalid ladder table: {}", self.path.display()))?;

        println!(
            "{} {}",
            style("Valid:").bold().green(),
            self.path.display()
        );
        println!("  Ladders: {}", registry.kinds().count());
        println!("  Aliases: {}", registry.aliases().count());
        println!(
            "  Axis relations: {}",
            registry
                .kinds()
                .filter(|kind| registry.axis(*kind).is_on_axis())
                .count()
        );
        println!(
            "  Paired ladders: {}",
            registry
                .kinds()
                .filter(|kind| registry.pair(*kind).is_some())
                .count()
        );

        Ok(())
    }
}
