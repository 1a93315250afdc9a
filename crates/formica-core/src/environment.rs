//! Environment — the shared model every agent lives in.
//!
//! The environment owns a spatial grid agents are registered into and a
//! canvas that collects the patches drawn for visualization. It is shared
//! by all colonies but owned by none of them.

use crate::error::Result;
use crate::patch::{Patch, PatchId};
use crate::types::{AgentId, GridPos, Position};

/// A grid where each cell may hold any number of agents.
pub trait SpatialGrid {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Whether coordinates wrap around the edges.
    fn torus(&self) -> bool;

    /// Register an agent at a cell.
    ///
    /// Fails if the agent is already on the grid, or if the cell is out of
    /// bounds on a non-toroidal grid. Toroidal grids wrap the cell instead.
    fn place_agent(&mut self, id: AgentId, pos: GridPos) -> Result<GridPos>;

    /// Move a registered agent to another cell.
    fn move_agent(&mut self, id: AgentId, pos: GridPos) -> Result<GridPos>;

    /// Remove an agent from the grid, returning the cell it occupied.
    fn remove_agent(&mut self, id: AgentId) -> Result<GridPos>;

    /// All agents registered at a cell, in placement order.
    fn agents_at(&self, pos: GridPos) -> Vec<AgentId>;

    /// Where an agent is registered, if anywhere.
    fn position_of(&self, id: AgentId) -> Option<GridPos>;

    fn out_of_bounds(&self, pos: GridPos) -> bool {
        pos.x >= self.width() || pos.y >= self.height()
    }

    /// Number of agents registered on the grid.
    fn agent_count(&self) -> usize;
}

/// A plotting surface that accepts shape primitives.
pub trait Canvas {
    /// Add a patch to the surface and return its ID.
    fn add_patch(&mut self, patch: Patch) -> PatchId;

    fn patch(&self, id: &PatchId) -> Option<&Patch>;

    /// All patches, in the order they were added.
    fn patches(&self) -> Vec<&Patch>;

    fn patch_count(&self) -> usize;
}

/// The model shared by colonies: grid, canvas, and a random stream.
pub trait Environment {
    fn grid(&self) -> &dyn SpatialGrid;

    fn grid_mut(&mut self) -> &mut dyn SpatialGrid;

    /// Convert a grid position to plotting-array coordinates.
    fn grid_to_array(&self, pos: Position) -> Position;

    /// The plotting surface.
    fn canvas(&self) -> &dyn Canvas;

    fn canvas_mut(&mut self) -> &mut dyn Canvas;

    /// Draw a seed for a child scheduler from the environment's RNG.
    fn derive_seed(&mut self) -> u64;
}
