//! Simulation configuration.
//!
//! Every field has a default, so a configuration file only needs to name
//! what it changes. Use [`SimulationConfig::validate`] before building a
//! simulation from hand-edited values.

use crate::colony::{validate_radius, DEFAULT_RADIUS};
use formica_core::error::{FormicaError, Result};
use serde::{Deserialize, Serialize};

/// Largest grid accepted, in cells.
pub const MAX_GRID_CELLS: usize = 1 << 24;

/// Configuration for the world and the colonies founded in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Grid width in cells (default: 50).
    pub width: usize,
    /// Grid height in cells (default: 50).
    pub height: usize,
    /// Whether the grid wraps at its edges (default: false).
    pub torus: bool,
    /// Seed for the world's random stream. `None` draws one at startup.
    pub seed: Option<u64>,
    /// Colonies to found, in order.
    pub colonies: Vec<ColonyConfig>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            torus: false,
            seed: None,
            colonies: vec![ColonyConfig::default()],
        }
    }
}

/// One colony to found at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColonyConfig {
    /// Pheromone layer for the colony's ants (default: 0).
    pub pheromone_id: usize,
    pub x: usize,
    pub y: usize,
    /// Ants created at founding (default: 100).
    pub ants: usize,
    /// Territory radius in cells (default: 1.0).
    pub radius: f64,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            pheromone_id: 0,
            x: 25,
            y: 25,
            ants: 100,
            radius: DEFAULT_RADIUS,
        }
    }
}

impl SimulationConfig {
    /// Check that the grid has a sane size and every colony fits on it.
    ///
    /// A territory radius may not exceed `width + height`; such a
    /// territory would already cover the whole grid.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FormicaError::invalid_config(
                "width/height",
                format!("grid must be at least 1x1, got {}x{}", self.width, self.height),
            ));
        }
        match self.width.checked_mul(self.height) {
            Some(cells) if cells <= MAX_GRID_CELLS => {}
            _ => {
                return Err(FormicaError::invalid_config(
                    "width/height",
                    format!(
                        "{}x{} grid exceeds {} cells",
                        self.width, self.height, MAX_GRID_CELLS
                    ),
                ))
            }
        }
        let max_radius = (self.width + self.height) as f64;
        for (i, colony) in self.colonies.iter().enumerate() {
            if let Err(e) = validate_radius(colony.radius) {
                return Err(FormicaError::invalid_config(
                    format!("colonies[{}].radius", i),
                    e.to_string(),
                ));
            }
            if colony.radius > max_radius {
                return Err(FormicaError::invalid_config(
                    format!("colonies[{}].radius", i),
                    format!("{} is larger than the grid allows ({})", colony.radius, max_radius),
                ));
            }
            if !self.torus && (colony.x >= self.width || colony.y >= self.height) {
                return Err(FormicaError::invalid_config(
                    format!("colonies[{}]", i),
                    format!(
                        "({}, {}) is outside the {}x{} grid",
                        colony.x, colony.y, self.width, self.height
                    ),
                ));
            }
        }
        Ok(())
    }
}
