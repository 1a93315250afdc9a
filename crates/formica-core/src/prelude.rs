//! Formica Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use formica_core::prelude::*;
//! ```

pub use crate::types::{AgentId, GridPos, PheromoneId, Position, Tick};
pub use crate::patch::{Color, Patch, PatchId};
pub use crate::agent::Agent;
pub use crate::environment::{Canvas, Environment, SpatialGrid};
pub use crate::error::{FormicaError, Result};
