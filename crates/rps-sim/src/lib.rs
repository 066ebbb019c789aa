//! Simulation engine for the rock-paper-scissors ecosystem.
//!
//! Owns the hecs world of pieces, runs the movement, collision, and
//! termination systems once per tick, and produces GameStateSnapshots for
//! the host.

pub mod driver;
pub mod engine;
pub mod store;
pub mod systems;

pub use driver::Advance;
pub use engine::{SimConfig, SimulationEngine};
pub use rps_core as core;
