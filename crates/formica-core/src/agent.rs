//! Agent — anything a scheduler can advance.
//!
//! Colonies and ants are both agents. A scheduler owns its agents and
//! hands each one the shared environment when it is activated, so agents
//! never hold a reference to the model themselves.

use crate::environment::Environment;
use crate::types::AgentId;

/// A unit of behavior that is activated once per scheduler step.
pub trait Agent {
    /// The agent's unique identity.
    fn id(&self) -> AgentId;

    /// The agent's type name (for display and logging).
    fn agent_type(&self) -> &str;

    /// Execute one tick of the agent's behavior.
    ///
    /// The scheduler calls this exactly once per step, in whatever order
    /// it chose for that step.
    fn step(&mut self, env: &mut dyn Environment);
}
