//! Resolve one tier delta against a scratch battler.
//!
//! Useful for checking how a ladder table and a set of resistances interact
//! without running a battle.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;
use std::sync::Arc;

use ladder_core::{ResolutionResult, StateId, TierOutcome};
use runtime::{BattlerState, LadderRuntime};

use crate::utils;

/// Resolve one tier delta against a scratch battler
#[derive(Parser)]
pub struct Resolve {
    /// Ladder name or alias (e.g., sad, atk, speed)
    #[arg(value_name = "LADDER")]
    ladder: String,

    /// Signed number of tiers to move (e.g., 2, -3)
    #[arg(value_name = "DELTA", allow_hyphen_values = true)]
    delta: i32,

    /// Marker the battler currently holds on this ladder
    #[arg(long, value_name = "MARKER")]
    from: Option<u16>,

    /// Markers the battler resists (comma separated)
    #[arg(short, long, value_name = "MARKERS", value_delimiter = ',')]
    resist: Vec<u16>,

    /// Content directory with config.toml and ladders.ron/ladders.toml
    /// If not provided, uses the bundled ladder table
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Print the resolution as JSON
    #[arg(long)]
    json: bool,
}

impl Resolve {
    pub fn execute(self) -> Result<()> {
        let (_, registry) = utils::load_registry(self.data_dir.as_deref())?;
        let runtime = LadderRuntime::new(Arc::new(registry));

        let mut battler = BattlerState::new(0)
            .with_markers(self.from.map(StateId))
            .with_resistances(self.resist.iter().copied().map(StateId));

        let result = runtime
            .add_state_tier_named(&mut battler, &self.ladder, self.delta)
            .with_context(|| format!("Failed to resolve {} {:+}", self.ladder, self.delta))?;

        if self.json {
            let json = serde_json::to_string_pretty(&result)
                .context("Failed to serialize resolution to JSON")?;
            println!("{}", json);
        } else {
            print_result(&result);
        }

        Ok(())
    }
}

fn print_result(result: &ResolutionResult) {
    let outcome = match result.outcome {
        TierOutcome::Changed => style(result.outcome).bold().green(),
        TierOutcome::Pinned => style(result.outcome).bold().yellow(),
        TierOutcome::Unchanged => style(result.outcome).bold().red(),
    };

    println!("{} {}", style("Ladder:").bold().cyan(), result.kind);
    println!("{} {}", style("Outcome:").bold().cyan(), outcome);
    println!(
        "  Tier: {:+} -> {:+} (requested {:+}, applied {:+})",
        result.previous_tier,
        result.tier,
        result.requested,
        result.applied()
    );
    println!("  Marker: {} -> {}", result.previous, result.target);
    if result.was_resisted() {
        println!("  Fell back {} tier(s) past resisted markers", result.fallback_steps);
    }
}
