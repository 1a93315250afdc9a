//! Ant — a member of a colony's population.
//!
//! An ant knows its index within the batch it was created in, the colony
//! that owns it, and the pheromone layer it belongs to. Its per-tick
//! behavior is only aging; foraging and trail-laying live elsewhere.

use crate::colony::Colony;
use formica_core::agent::Agent;
use formica_core::environment::Environment;
use formica_core::types::{AgentId, GridPos, PheromoneId, Tick};

#[derive(Debug, Clone)]
pub struct Ant {
    id: AgentId,
    index: usize,
    colony: AgentId,
    pheromone_id: PheromoneId,
    home: GridPos,
    age: Tick,
}

impl Ant {
    /// Create the `index`-th ant of a batch belonging to `colony`.
    pub fn new(index: usize, colony: &Colony) -> Self {
        Self {
            id: AgentId::new(),
            index,
            colony: colony.id(),
            pheromone_id: colony.pheromone_id(),
            home: colony.pos(),
            age: 0,
        }
    }

    /// Replace the random ID, for reproducible runs.
    pub fn with_id(mut self, id: AgentId) -> Self {
        self.id = id;
        self
    }

    /// Index within the batch this ant was added in.
    ///
    /// Indices restart at zero for every batch, so they are not unique
    /// within a colony. Use [`Agent::id`] for identity.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The owning colony's ID.
    pub fn colony(&self) -> AgentId {
        self.colony
    }

    pub fn pheromone_id(&self) -> PheromoneId {
        self.pheromone_id
    }

    /// The colony's cell at the time this ant was created.
    pub fn home(&self) -> GridPos {
        self.home
    }

    /// How many ticks this ant has been stepped.
    pub fn age(&self) -> Tick {
        self.age
    }
}

impl Agent for Ant {
    fn id(&self) -> AgentId {
        self.id
    }

    fn agent_type(&self) -> &str {
        "ant"
    }

    fn step(&mut self, _env: &mut dyn Environment) {
        self.age += 1;
    }
}
