//! # Formica Runtime
//!
//! Colonies, ants, scheduling and the shared world.
//!
//! A [`World`](world::World) owns the grid and the canvas. Each
//! [`Colony`](colony::Colony) owns a randomly activated population of
//! [`Ant`](ant::Ant)s, and a [`Simulation`](simulation::Simulation) ties a
//! world to a scheduler of colonies.

pub mod scheduler;
pub mod grid;
pub mod canvas;
pub mod world;
pub mod ant;
pub mod colony;
pub mod config;
pub mod simulation;
pub mod export;
pub mod prelude;
