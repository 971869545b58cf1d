//! Print the ladders, aliases and relations a registry was built from.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use ladder_core::{LadderRegistry, LadderSet, LadderTable};

use crate::utils;

/// Print every ladder, alias and relation of a registry
#[derive(Parser)]
pub struct Inspect {
    /// Content directory with config.toml and ladders.ron/ladders.toml
    /// If not provided, uses the bundled ladder table
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One block per ladder with tiers, aliases and relations
    Summary,
    /// The raw ladder table as JSON
    Json,
}

impl Inspect {
    pub fn execute(self) -> Result<()> {
        let (table, registry) = utils::load_registry(self.data_dir.as_deref())?;

        match self.format {
            OutputFormat::Summary => print_summary(&registry),
            OutputFormat::Json => print_json(&table)?,
        }

        Ok(())
    }
}

fn print_summary(registry: &LadderRegistry) {
    let mode = if registry.config().combine_buffs {
        "combined"
    } else {
        "split"
    };
    println!("{}", style("=== Ladder Registry ===").bold().green());
    println!("{} {}", style("Buff mode:").bold().cyan(), mode);
    println!();

    for kind in registry.kinds() {
        let Ok(ladder) = registry.ladder(kind) else {
            continue;
        };
        println!(
            "{} ({}, tiers {}..={})",
            style(kind).bold().yellow(),
            kind.category(),
            ladder.min_tier(),
            ladder.max_tier()
        );

        let tiers: Vec<String> = ladder
            .positions()
            .iter()
            .enumerate()
            .map(|(index, marker)| format!("{:+}:{}", ladder.tier_of_index(index), marker))
            .collect();
        println!("  Positions: {}", tiers.join(" "));

        let aliases: Vec<&str> = registry
            .aliases()
            .filter(|(_, target)| *target == kind)
            .map(|(alias, _)| alias)
            .collect();
        if !aliases.is_empty() {
            println!("  Aliases: {}", aliases.join(", "));
        }

        let axis = registry.axis(kind);
        if axis.is_on_axis() {
            println!("  Strong against: {}", format_set(axis.strong));
            println!("  Weak against: {}", format_set(axis.weak));
        }

        if let Some(pair) = registry.pair(kind) {
            println!(
                "  Reinforcing: {}, offsetting: {}",
                pair.reinforcing, pair.offsetting
            );
        }
        println!();
    }
}

fn format_set(set: LadderSet) -> String {
    let names: Vec<String> = set.kinds().map(|kind| kind.to_string()).collect();
    if names.is_empty() {
        "-".to_owned()
    } else {
        names.join(", ")
    }
}

fn print_json(table: &LadderTable) -> Result<()> {
    let json =
        serde_json::to_string_pretty(table).context("Failed to serialize ladder table to JSON")?;
    println!("{}", json);
    Ok(())
}
