//! Simulation — a world and the colonies living in it.
//!
//! Each tick the colonies are themselves activated in random order, and
//! every colony in turn advances all of its ants.

use crate::colony::Colony;
use crate::config::SimulationConfig;
use crate::scheduler::RandomActivation;
use crate::world::World;
use formica_core::environment::Environment;
use formica_core::error::Result;
use formica_core::patch::Patch;
use formica_core::types::{AgentId, GridPos, PheromoneId, Tick};
use serde::Serialize;
use tracing::{debug, info};

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickReport {
    pub tick: Tick,
    pub colonies_stepped: usize,
    pub ants_stepped: usize,
}

/// Aggregate counters for the simulation.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationStats {
    pub tick: Tick,
    pub colonies: usize,
    pub ants: usize,
    pub patches: usize,
    pub grid_agents: usize,
}

/// A serializable view of one colony.
#[derive(Debug, Clone, Serialize)]
pub struct ColonySnapshot {
    pub id: AgentId,
    pub pheromone_id: PheromoneId,
    pub pos: GridPos,
    pub radius: f64,
    pub population: usize,
    pub ant_steps: Tick,
}

/// A complete serializable snapshot of the simulation at a point in time.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationSnapshot {
    pub tick: Tick,
    pub width: usize,
    pub height: usize,
    pub colonies: Vec<ColonySnapshot>,
    pub patches: Vec<Patch>,
    pub stats: SimulationStats,
}

pub struct Simulation {
    world: World,
    colonies: RandomActivation<Colony>,
    seed: u64,
}

impl Simulation {
    /// Build the world and found every configured colony.
    pub fn from_config(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut world = World::new(config.width, config.height, config.torus, seed);
        let mut colonies = RandomActivation::new(world.derive_seed());

        for colony_config in &config.colonies {
            colonies.add(Colony::from_config(&mut world, colony_config)?);
        }

        info!(
            width = config.width,
            height = config.height,
            colonies = colonies.len(),
            seed,
            "simulation ready"
        );

        Ok(Self {
            world,
            colonies,
            seed,
        })
    }

    /// Found an additional colony in the running simulation.
    pub fn found_colony(
        &mut self,
        pheromone_id: PheromoneId,
        pos: GridPos,
        ants: usize,
        radius: f64,
    ) -> Result<AgentId> {
        let colony = Colony::new(&mut self.world, pheromone_id, pos, ants, radius)?;
        let id = colony.id();
        self.colonies.add(colony);
        Ok(id)
    }

    /// Run a single tick.
    pub fn step(&mut self) -> TickReport {
        let per_colony = self
            .colonies
            .step_with(&mut self.world, |colony, env| colony.step(env));
        let colonies_stepped = per_colony.len();
        let ants_stepped: usize = per_colony.iter().sum();
        let report = TickReport {
            tick: self.colonies.steps(),
            colonies_stepped,
            ants_stepped,
        };
        debug!(tick = report.tick, ants = ants_stepped, "tick complete");
        report
    }

    /// Run the simulation for a fixed number of ticks.
    pub fn run(&mut self, ticks: u64) -> Vec<TickReport> {
        (0..ticks).map(|_| self.step()).collect()
    }

    /// Draw every colony's territory and return the number of patches on the canvas.
    pub fn render(&mut self) -> usize {
        for colony in self.colonies.agents_mut() {
            colony.update_vis(&mut self.world);
        }
        self.world.canvas().patch_count()
    }

    /// Ticks completed so far.
    pub fn tick(&self) -> Tick {
        self.colonies.steps()
    }

    /// The seed the world was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Total ants across all colonies.
    pub fn population(&self) -> usize {
        self.colonies.agents().iter().map(Colony::population).sum()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn colonies(&self) -> &[Colony] {
        self.colonies.agents()
    }

    pub fn colony(&self, id: AgentId) -> Option<&Colony> {
        self.colonies.get(id)
    }

    pub fn stats(&self) -> SimulationStats {
        SimulationStats {
            tick: self.tick(),
            colonies: self.colonies.len(),
            ants: self.population(),
            patches: self.world.canvas().patch_count(),
            grid_agents: self.world.grid().agent_count(),
        }
    }

    pub fn snapshot(&self) -> SimulationSnapshot {
        let colonies = self
            .colonies
            .agents()
            .iter()
            .map(|c| ColonySnapshot {
                id: c.id(),
                pheromone_id: c.pheromone_id(),
                pos: c.pos(),
                radius: c.radius(),
                population: c.population(),
                ant_steps: c.ants().steps(),
            })
            .collect();

        SimulationSnapshot {
            tick: self.tick(),
            width: self.world.width(),
            height: self.world.height(),
            colonies,
            patches: self.world.canvas().patches().into_iter().cloned().collect(),
            stats: self.stats(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColonyConfig;

    fn config() -> SimulationConfig {
        SimulationConfig {
            width: 30,
            height: 30,
            torus: false,
            seed: Some(7),
            colonies: vec![
                ColonyConfig { pheromone_id: 0, x: 5, y: 5, ants: 10, radius: 1.0 },
                ColonyConfig { pheromone_id: 1, x: 20, y: 20, ants: 4, radius: 2.0 },
            ],
        }
    }

    #[test]
    fn builds_configured_colonies() {
        let sim = Simulation::from_config(config()).unwrap();
        assert_eq!(sim.colonies().len(), 2);
        assert_eq!(sim.population(), 14);
        assert_eq!(sim.stats().grid_agents, 2);
        assert_eq!(sim.seed(), 7);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut bad = config();
        bad.colonies[1].x = 30;
        assert!(Simulation::from_config(bad).is_err());
    }

    #[test]
    fn tick_reports_every_ant() {
        let mut sim = Simulation::from_config(config()).unwrap();
        let reports = sim.run(3);
        assert_eq!(reports.len(), 3);
        assert!(reports.iter().all(|r| r.colonies_stepped == 2 && r.ants_stepped == 14));
        assert_eq!(reports[2].tick, 3);
        assert!(sim
            .colonies()
            .iter()
            .flat_map(|c| c.ants().agents())
            .all(|a| a.age() == 3));
    }

    #[test]
    fn reported_ant_steps_match_ant_ages() {
        let mut sim = Simulation::from_config(config()).unwrap();
        let mut reported = sim.run(2).iter().map(|r| r.ants_stepped).sum::<usize>();
        sim.found_colony(PheromoneId(3), GridPos::new(2, 2), 5, 1.0).unwrap();
        reported += sim.run(3).iter().map(|r| r.ants_stepped).sum::<usize>();

        let aged: u64 = sim
            .colonies()
            .iter()
            .flat_map(|c| c.ants().agents())
            .map(|a| a.age())
            .sum();
        assert_eq!(reported as u64, aged);
        assert_eq!(reported, 14 * 5 + 5 * 3);
    }

    #[test]
    fn render_draws_each_territory_once() {
        let mut sim = Simulation::from_config(config()).unwrap();
        let first = sim.render();
        // radius 1 -> 5 cells, radius 2 -> 13 cells
        assert_eq!(first, 18);
        assert_eq!(sim.render(), 18);
    }

    #[test]
    fn found_colony_joins_the_schedule() {
        let mut sim = Simulation::from_config(config()).unwrap();
        let id = sim.found_colony(PheromoneId(2), GridPos::new(1, 1), 3, 0.0).unwrap();
        assert_eq!(sim.colony(id).map(Colony::population), Some(3));
        assert_eq!(sim.step().ants_stepped, 17);
    }

    #[test]
    fn snapshot_serializes() {
        let mut sim = Simulation::from_config(config()).unwrap();
        sim.render();
        sim.step();
        let snapshot = sim.snapshot();
        assert_eq!(snapshot.tick, 1);
        assert_eq!(snapshot.patches.len(), 18);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["colonies"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["stats"]["ants"], 14);
    }
}
