//! Run the simulation.

use anyhow::{Context, Result};
use colored::Colorize;
use formica_runtime::export::save_snapshot;
use formica_runtime::simulation::Simulation;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use crate::config;

pub fn run(ticks: u64, seed: Option<u64>, snapshot: Option<String>, verbose: bool) -> Result<()> {
    let mut sim_config = config::load()?;
    if seed.is_some() {
        sim_config.seed = seed;
    }

    let mut sim = Simulation::from_config(sim_config).context("Failed to build simulation")?;
    let initial = sim.stats();
    println!(
        "{} {} colonies, {} ants (seed {})",
        "→".blue(),
        initial.colonies.to_string().cyan(),
        initial.ants.to_string().cyan(),
        sim.seed().to_string().cyan()
    );

    let pb = ProgressBar::new(ticks);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ticks")?
            .progress_chars("#>-"),
    );

    let mut ant_steps = 0usize;
    for _ in 0..ticks {
        let report = sim.step();
        ant_steps += report.ants_stepped;
        if verbose {
            pb.println(format!("  tick {}: {} ants", report.tick, report.ants_stepped));
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");

    if let Some(path) = snapshot {
        save_snapshot(&sim, Path::new(&path))
            .with_context(|| format!("Failed to write snapshot: {}", path))?;
        println!("{} Snapshot written to {}", "→".blue(), path.cyan());
    }

    println!();
    println!("{} Simulation complete!", "✓".green().bold());
    println!("  Ticks: {}", sim.tick().to_string().green());
    println!("  Ant steps: {}", ant_steps.to_string().green());
    Ok(())
}
