//! Draw colony territories to SVG.

use anyhow::{Context, Result};
use colored::Colorize;
use formica_runtime::export::save_svg;
use formica_runtime::simulation::Simulation;
use std::path::Path;

use crate::config;

pub fn run(output: &str) -> Result<()> {
    let mut sim = Simulation::from_config(config::load()?).context("Failed to build simulation")?;
    let patches = sim.render();

    save_svg(sim.world(), Path::new(output))
        .with_context(|| format!("Failed to write {}", output))?;

    println!(
        "{} Drew {} territory cells for {} colonies to {}",
        "✓".green().bold(),
        patches.to_string().cyan(),
        sim.colonies().len().to_string().cyan(),
        output
    );
    Ok(())
}
