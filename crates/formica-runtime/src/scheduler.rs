//! Random activation — the scheduler that advances a population.
//!
//! Every step visits each agent exactly once, in an order reshuffled from
//! the scheduler's own seeded RNG. Two schedulers built from the same seed
//! with the same agents activate them in the same order.

use formica_core::agent::Agent;
use formica_core::environment::Environment;
use formica_core::types::{AgentId, Tick};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A scheduler that activates all of its agents once per step, in random order.
pub struct RandomActivation<A: Agent> {
    agents: Vec<A>,
    rng: ChaCha8Rng,
    steps: Tick,
    time: f64,
}

impl<A: Agent> RandomActivation<A> {
    pub fn new(seed: u64) -> Self {
        Self {
            agents: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            steps: 0,
            time: 0.0,
        }
    }

    /// Add an agent to the schedule.
    pub fn add(&mut self, agent: A) {
        self.agents.push(agent);
    }

    /// Remove an agent by ID, returning it if it was scheduled.
    pub fn remove(&mut self, id: AgentId) -> Option<A> {
        let idx = self.agents.iter().position(|a| a.id() == id)?;
        Some(self.agents.remove(idx))
    }

    pub fn get(&self, id: AgentId) -> Option<&A> {
        self.agents.iter().find(|a| a.id() == id)
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut A> {
        self.agents.iter_mut().find(|a| a.id() == id)
    }

    /// Number of scheduled agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Scheduled agents, in the order they were added.
    pub fn agents(&self) -> &[A] {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut [A] {
        &mut self.agents
    }

    /// Steps completed so far.
    pub fn steps(&self) -> Tick {
        self.steps
    }

    /// Model time; advances by one per step.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Draw a fresh activation order from the RNG.
    fn shuffled_order(&mut self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.agents.len()).collect();
        order.shuffle(&mut self.rng);
        order
    }

    /// Activate every agent once in a fresh random order.
    ///
    /// Returns the number of agents activated.
    pub fn step(&mut self, env: &mut dyn Environment) -> usize {
        self.step_with(env, |agent, env| agent.step(env)).len()
    }

    /// Like [`step`](Self::step), but activates each agent through `activate`
    /// and collects what it returns, in activation order.
    pub fn step_with<R, F>(&mut self, env: &mut dyn Environment, mut activate: F) -> Vec<R>
    where
        F: FnMut(&mut A, &mut dyn Environment) -> R,
    {
        let order = self.shuffled_order();
        let mut results = Vec::with_capacity(order.len());
        for idx in order {
            results.push(activate(&mut self.agents[idx], &mut *env));
        }
        self.steps += 1;
        self.time += 1.0;
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::World;

    struct Probe {
        id: AgentId,
        log: std::rc::Rc<std::cell::RefCell<Vec<u64>>>,
        tag: u64,
        activations: usize,
    }

    impl Agent for Probe {
        fn id(&self) -> AgentId {
            self.id
        }

        fn agent_type(&self) -> &str {
            "probe"
        }

        fn step(&mut self, _env: &mut dyn Environment) {
            self.activations += 1;
            self.log.borrow_mut().push(self.tag);
        }
    }

    fn schedule(seed: u64, n: u64) -> (RandomActivation<Probe>, std::rc::Rc<std::cell::RefCell<Vec<u64>>>) {
        let log = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut sched = RandomActivation::new(seed);
        for tag in 0..n {
            sched.add(Probe {
                id: AgentId::from_seed(tag),
                log: log.clone(),
                tag,
                activations: 0,
            });
        }
        (sched, log)
    }

    #[test]
    fn every_agent_activated_once_per_step() {
        let mut world = World::new(5, 5, false, 1);
        let (mut sched, log) = schedule(3, 20);

        assert_eq!(sched.step(&mut world), 20);
        assert_eq!(sched.step(&mut world), 20);

        assert_eq!(log.borrow().len(), 40);
        assert!(sched.agents().iter().all(|p| p.activations == 2));
        assert_eq!(sched.steps(), 2);
        assert_eq!(sched.time(), 2.0);
    }

    #[test]
    fn same_seed_same_order() {
        let mut world = World::new(5, 5, false, 1);
        let (mut a, log_a) = schedule(99, 12);
        let (mut b, log_b) = schedule(99, 12);
        for _ in 0..3 {
            a.step(&mut world);
            b.step(&mut world);
        }
        assert_eq!(*log_a.borrow(), *log_b.borrow());
    }

    #[test]
    fn order_is_reshuffled_between_steps() {
        let mut world = World::new(5, 5, false, 1);
        let (mut sched, log) = schedule(5, 30);
        for _ in 0..4 {
            sched.step(&mut world);
        }
        let log = log.borrow();
        let rounds: Vec<&[u64]> = log.chunks(30).collect();
        assert!(rounds.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn step_with_collects_one_result_per_agent() {
        let mut world = World::new(5, 5, false, 1);
        let (mut sched, _) = schedule(2, 6);
        let mut tags = sched.step_with(&mut world, |probe, env| {
            probe.step(env);
            probe.tag
        });
        tags.sort();
        assert_eq!(tags, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(sched.steps(), 1);
        assert!(sched.agents().iter().all(|p| p.activations == 1));
    }

    #[test]
    fn remove_and_lookup() {
        let (mut sched, _) = schedule(1, 3);
        let id = AgentId::from_seed(1);
        assert!(sched.get(id).is_some());
        assert!(sched.remove(id).is_some());
        assert!(sched.get(id).is_none());
        assert!(sched.remove(id).is_none());
        assert_eq!(sched.len(), 2);
    }

    #[test]
    fn empty_schedule_still_counts_steps() {
        let mut world = World::new(2, 2, false, 1);
        let (mut sched, _) = schedule(1, 0);
        assert!(sched.is_empty());
        assert_eq!(sched.step(&mut world), 0);
        assert_eq!(sched.steps(), 1);
    }
}
