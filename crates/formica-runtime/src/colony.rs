//! Colony — a nest with a territory and a population of ants.
//!
//! A colony registers itself on the shared grid when it is founded, owns a
//! randomly activated population of ants, and draws its territory onto the
//! shared canvas as one filled square per cell within its radius.
//!
//! Two operations are deliberately unavailable: changing the radius to a
//! different value, and removing the colony from the environment. Both
//! report [`FormicaError::NotImplemented`].

use crate::ant::Ant;
use crate::config::ColonyConfig;
use crate::scheduler::RandomActivation;
use formica_core::agent::Agent;
use formica_core::environment::Environment;
use formica_core::error::{FormicaError, Result};
use formica_core::patch::{Color, Patch, PatchId};
use formica_core::types::{AgentId, GridPos, PheromoneId, Position};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

/// Radius used when none is given.
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Fill and edge color of territory patches.
const TERRITORY_COLOR: Color = Color::RED;

pub struct Colony {
    id: AgentId,
    pheromone_id: PheromoneId,
    pos: GridPos,
    radius: f64,
    /// Ants requested at founding.
    num_agents: usize,
    ants: RandomActivation<Ant>,
    /// Source of ant and patch IDs, seeded from the environment.
    ids: ChaCha8Rng,
    /// Territory patches, filled on the first `update_vis` that yields any.
    patches: Vec<Patch>,
}

impl Colony {
    /// Found a colony of `n` ants at `pos` and register it on the grid.
    pub fn new(
        env: &mut dyn Environment,
        pheromone_id: PheromoneId,
        pos: GridPos,
        n: usize,
        radius: f64,
    ) -> Result<Self> {
        validate_radius(radius)?;

        let mut colony = Self {
            id: AgentId::from_seed(env.derive_seed()),
            pheromone_id,
            pos,
            radius,
            num_agents: n,
            ants: RandomActivation::new(env.derive_seed()),
            ids: ChaCha8Rng::seed_from_u64(env.derive_seed()),
            patches: Vec::new(),
        };

        // The grid may wrap the requested cell on a torus.
        colony.pos = env.grid_mut().place_agent(colony.id, pos)?;

        colony.add_ants(n);

        debug!(
            colony = %colony.id,
            pheromone = %pheromone_id,
            pos = %colony.pos,
            ants = n,
            radius,
            "founded colony"
        );
        Ok(colony)
    }

    /// Found a colony from its configuration entry.
    pub fn from_config(env: &mut dyn Environment, config: &ColonyConfig) -> Result<Self> {
        Self::new(
            env,
            PheromoneId(config.pheromone_id),
            GridPos::new(config.x, config.y),
            config.ants,
            config.radius,
        )
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn pheromone_id(&self) -> PheromoneId {
        self.pheromone_id
    }

    pub fn pos(&self) -> GridPos {
        self.pos
    }

    /// Move the colony to another cell.
    ///
    /// The cached territory patches are left as they are.
    pub fn set_position(&mut self, env: &mut dyn Environment, pos: GridPos) -> Result<()> {
        self.pos = env.grid_mut().move_agent(self.id, pos)?;
        Ok(())
    }

    /// Number of ants the colony was founded with.
    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    /// Number of ants currently in the colony.
    pub fn population(&self) -> usize {
        self.ants.len()
    }

    pub fn ants(&self) -> &RandomActivation<Ant> {
        &self.ants
    }

    /// Whether `pos` lies within the colony's territory.
    pub fn on_colony(&self, pos: Position) -> bool {
        Position::from(self.pos).distance_to(&pos) <= self.radius
    }

    /// Advance every ant by one tick, in random order.
    ///
    /// Returns the number of ants advanced.
    pub fn step(&mut self, env: &mut dyn Environment) -> usize {
        self.ants.step(env)
    }

    /// Add `n` new ants, indexed `0..n`.
    pub fn add_ants(&mut self, n: usize) {
        for i in 0..n {
            let id = AgentId::from_seed(self.ids.random());
            let ant = Ant::new(i, self).with_id(id);
            self.ants.add(ant);
        }
        debug!(colony = %self.id, added = n, population = self.ants.len(), "added ants");
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Change the territory radius.
    ///
    /// Setting the current value is a no-op. A negative or non-finite radius is rejected
    /// with [`FormicaError::InvalidRadius`]; any other value fails with
    /// [`FormicaError::NotImplemented`] because the drawn territory cannot
    /// follow a resize.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        validate_radius(radius)?;
        if self.radius != radius {
            warn!(colony = %self.id, from = self.radius, to = radius, "radius change requested");
            return Err(FormicaError::NotImplemented("changing a colony's radius"));
        }
        Ok(())
    }

    /// Draw the territory onto the canvas and return its patches.
    ///
    /// The first call that finds any territory cells creates one red 1x1
    /// square per cell, adds each to the canvas and caches them. Every
    /// later call returns that cache untouched, even if the colony has
    /// since moved.
    pub fn update_vis(&mut self, env: &mut dyn Environment) -> &[Patch] {
        if self.patches.is_empty() {
            let origin = Position::from(self.pos);
            let offsets = territory_offsets(self.radius);
            for dx in offsets.clone() {
                for dy in offsets.clone() {
                    let cell = origin.offset(dx, dy);
                    if !self.on_colony(cell) {
                        continue;
                    }
                    let patch = Patch::rectangle(env.grid_to_array(cell), 1.0, 1.0)
                        .with_linewidth(1.0)
                        .with_edge_color(TERRITORY_COLOR)
                        .with_face_color(TERRITORY_COLOR)
                        .with_fill(true)
                        .with_id(PatchId::from_seed(self.ids.random()));
                    env.canvas_mut().add_patch(patch.clone());
                    self.patches.push(patch);
                }
            }
            debug!(colony = %self.id, patches = self.patches.len(), "drew territory");
        }
        &self.patches
    }

    /// Remove the colony from the environment.
    ///
    /// Always fails: the grid registration and drawn patches stay in place.
    pub fn exit(&mut self, _env: &mut dyn Environment) -> Result<()> {
        warn!(colony = %self.id, "colony removal requested");
        Err(FormicaError::NotImplemented("removing a colony from the environment"))
    }
}

impl Agent for Colony {
    fn id(&self) -> AgentId {
        self.id
    }

    fn agent_type(&self) -> &str {
        "colony"
    }

    fn step(&mut self, env: &mut dyn Environment) {
        Colony::step(self, env);
    }
}

/// A radius must be finite and non-negative.
pub fn validate_radius(radius: f64) -> Result<()> {
    // NaN fails this comparison as well.
    if radius.is_finite() && radius >= 0.0 {
        Ok(())
    } else {
        Err(FormicaError::InvalidRadius(radius))
    }
}

/// Offsets `-r, -r + 1, ...` strictly below `r + 1`.
fn territory_offsets(radius: f64) -> impl Iterator<Item = f64> + Clone {
    let count = (2.0 * radius + 1.0).ceil() as u64;
    (0..count).map(move |i| -radius + i as f64)
}
