//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; it lives in components or in the engine.

pub mod collision;
pub mod movement;
pub mod snapshot;
pub mod termination;
