//! # Formica Core
//!
//! Core traits and types for the formica ant colony simulation.
//!
//! This crate defines the small framework surface a colony is built on:
//!
//! - **Agent** — anything a scheduler can advance by one tick
//! - **SpatialGrid** — the shared grid agents are registered into
//! - **Canvas** — the plotting surface that collects rectangle patches
//! - **Environment** — the model that owns the grid and the canvas
//!
//! ## Quick Start
//!
//! ```rust
//! use formica_core::prelude::*;
//!
//! let nest = GridPos::new(4, 4);
//! let probe = Position::new(5.0, 4.0);
//! assert_eq!(Position::from(nest).distance_to(&probe), 1.0);
//!
//! // Deterministic IDs for tests and replays
//! let id = AgentId::from_seed(42);
//! assert_eq!(id, AgentId::from_seed(42));
//! ```

pub mod types;
pub mod patch;
pub mod agent;
pub mod environment;
pub mod error;
pub mod prelude;
