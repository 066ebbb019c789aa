//! Headless host for the rock-paper-scissors simulation.
//!
//! This crate wires the simulation engine to a frame-paced game loop thread,
//! a text command surface, and structured logging.

pub mod config;
pub mod game_loop;
pub mod host;
pub mod input;
pub mod state;

pub use rps_core as core;
