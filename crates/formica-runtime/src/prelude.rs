//! Formica Runtime Prelude — convenient imports for common usage.
//!
//! ```rust
//! use formica_runtime::prelude::*;
//! ```

pub use crate::scheduler::RandomActivation;
pub use crate::grid::MultiGrid;
pub use crate::canvas::PatchCanvas;
pub use crate::world::World;
pub use crate::ant::Ant;
pub use crate::colony::{Colony, DEFAULT_RADIUS};
pub use crate::config::{ColonyConfig, SimulationConfig};
pub use crate::simulation::{Simulation, SimulationSnapshot, SimulationStats, TickReport};
pub use crate::export::{render_svg, save_snapshot, save_svg};

// Re-export from core
pub use formica_core::prelude::*;
