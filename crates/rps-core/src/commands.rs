//! Host configuration actions sent to the simulation.
//!
//! Commands are queued and applied at the next tick boundary, so they never
//! interleave with a tick in progress.

use serde::{Deserialize, Serialize};

/// All host actions the engine accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Re-spawn all populations with `count` pieces per kind. Keeps the
    /// current speed multiplier. Rejected when `count` is below the minimum.
    SetPopulationCount { count: u32 },
    /// Scale every live velocity by `factor`.
    IncreaseSpeed { factor: f64 },
    /// Reset the speed multiplier and re-spawn with the last population size.
    Restart,
}
