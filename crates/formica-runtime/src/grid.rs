//! MultiGrid — a spatial grid where cells hold any number of agents.

use formica_core::environment::SpatialGrid;
use formica_core::error::{FormicaError, Result};
use formica_core::types::{AgentId, GridPos};
use std::collections::HashMap;

/// A rectangular grid of cells, optionally wrapping at the edges.
#[derive(Debug, Clone)]
pub struct MultiGrid {
    width: usize,
    height: usize,
    torus: bool,
    /// Row-major cell contents, `y * width + x`.
    cells: Vec<Vec<AgentId>>,
    positions: HashMap<AgentId, GridPos>,
}

impl MultiGrid {
    pub fn new(width: usize, height: usize, torus: bool) -> Self {
        Self {
            width,
            height,
            torus,
            cells: vec![Vec::new(); width * height],
            positions: HashMap::new(),
        }
    }

    /// Wrap a cell onto a torus, or reject it on a bounded grid.
    fn resolve(&self, pos: GridPos) -> Result<GridPos> {
        if !self.out_of_bounds(pos) {
            return Ok(pos);
        }
        if self.torus && self.width > 0 && self.height > 0 {
            return Ok(GridPos::new(pos.x % self.width, pos.y % self.height));
        }
        Err(FormicaError::OutOfBounds {
            pos,
            width: self.width,
            height: self.height,
        })
    }

    fn index(&self, pos: GridPos) -> usize {
        pos.y * self.width + pos.x
    }

    /// Whether no agent occupies a cell.
    pub fn is_cell_empty(&self, pos: GridPos) -> bool {
        self.agents_at(pos).is_empty()
    }
}

impl SpatialGrid for MultiGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn torus(&self) -> bool {
        self.torus
    }

    fn place_agent(&mut self, id: AgentId, pos: GridPos) -> Result<GridPos> {
        if self.positions.contains_key(&id) {
            return Err(FormicaError::AlreadyPlaced(id));
        }
        let pos = self.resolve(pos)?;
        let idx = self.index(pos);
        self.cells[idx].push(id);
        self.positions.insert(id, pos);
        Ok(pos)
    }

    fn move_agent(&mut self, id: AgentId, pos: GridPos) -> Result<GridPos> {
        let target = self.resolve(pos)?;
        self.remove_agent(id)?;
        let idx = self.index(target);
        self.cells[idx].push(id);
        self.positions.insert(id, target);
        Ok(target)
    }

    fn remove_agent(&mut self, id: AgentId) -> Result<GridPos> {
        let pos = self
            .positions
            .remove(&id)
            .ok_or(FormicaError::AgentNotFound(id))?;
        let idx = self.index(pos);
        self.cells[idx].retain(|a| *a != id);
        Ok(pos)
    }

    fn agents_at(&self, pos: GridPos) -> Vec<AgentId> {
        match self.resolve(pos) {
            Ok(pos) => self.cells[self.index(pos)].clone(),
            Err(_) => Vec::new(),
        }
    }

    fn position_of(&self, id: AgentId) -> Option<GridPos> {
        self.positions.get(&id).copied()
    }

    fn agent_count(&self) -> usize {
        self.positions.len()
    }
}
