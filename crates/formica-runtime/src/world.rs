//! World — the shared environment colonies are placed into.
//!
//! The world owns the grid, the canvas, and the random stream child
//! schedulers are seeded from. Colonies borrow it while they act; none of
//! them own it.

use crate::canvas::PatchCanvas;
use crate::grid::MultiGrid;
use formica_core::environment::{Canvas, Environment, SpatialGrid};
use formica_core::types::Position;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct World {
    grid: MultiGrid,
    canvas: PatchCanvas,
    rng: ChaCha8Rng,
}

impl World {
    pub fn new(width: usize, height: usize, torus: bool, seed: u64) -> Self {
        Self {
            grid: MultiGrid::new(width, height, torus),
            canvas: PatchCanvas::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The concrete grid (for inspection beyond the trait surface).
    pub fn multigrid(&self) -> &MultiGrid {
        &self.grid
    }

    /// The concrete canvas.
    pub fn patch_canvas(&self) -> &PatchCanvas {
        &self.canvas
    }

    pub fn patch_canvas_mut(&mut self) -> &mut PatchCanvas {
        &mut self.canvas
    }
}

impl Environment for World {
    fn grid(&self) -> &dyn SpatialGrid {
        &self.grid
    }

    fn grid_mut(&mut self) -> &mut dyn SpatialGrid {
        &mut self.grid
    }

    /// Row 0 of the plotting array is the top row of the grid.
    fn grid_to_array(&self, pos: Position) -> Position {
        Position::new(pos.x, (self.grid.height() as f64 - 1.0) - pos.y)
    }

    fn canvas(&self) -> &dyn Canvas {
        &self.canvas
    }

    fn canvas_mut(&mut self) -> &mut dyn Canvas {
        &mut self.canvas
    }

    fn derive_seed(&mut self) -> u64 {
        self.rng.random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_to_array_flips_rows() {
        let world = World::new(10, 8, false, 0);
        assert_eq!(world.grid_to_array(Position::new(0.0, 0.0)), Position::new(0.0, 7.0));
        assert_eq!(world.grid_to_array(Position::new(3.0, 7.0)), Position::new(3.0, 0.0));
        assert_eq!(world.grid_to_array(Position::new(2.5, 1.5)), Position::new(2.5, 5.5));
    }

    #[test]
    fn derived_seeds_follow_world_seed() {
        let mut a = World::new(4, 4, false, 11);
        let mut b = World::new(4, 4, false, 11);
        let seeds_a: Vec<u64> = (0..3).map(|_| a.derive_seed()).collect();
        let seeds_b: Vec<u64> = (0..3).map(|_| b.derive_seed()).collect();
        assert_eq!(seeds_a, seeds_b);
        assert_ne!(seeds_a[0], seeds_a[1]);
    }
}
