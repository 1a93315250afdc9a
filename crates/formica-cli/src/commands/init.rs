//! Write a default configuration file.

use anyhow::{bail, Result};
use colored::Colorize;
use formica_runtime::config::SimulationConfig;
use std::path::PathBuf;

use crate::config::{save, CONFIG_FILE};

pub fn run(path: Option<String>, force: bool) -> Result<()> {
    let dir = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    std::fs::create_dir_all(&dir)?;

    let config_path = dir.join(CONFIG_FILE);
    if config_path.exists() && !force {
        bail!(
            "{} already exists. Pass {} to overwrite it.",
            config_path.display(),
            "--force".cyan()
        );
    }

    save(&SimulationConfig::default(), &config_path)?;
    println!("{} Wrote {}", "✓".green().bold(), config_path.display());
    Ok(())
}
