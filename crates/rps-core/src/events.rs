//! Events emitted by the simulation for host feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Things that happened during the last tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Populations were (re)spawned.
    Initialized { population_size: u32 },
    /// Pieces of `kind` were removed by their predator this tick.
    Eliminated { kind: Kind, count: u32 },
    /// Two populations became empty; emitted once per run.
    RunDecided { verdict: Verdict },
    /// A queued command failed validation and was dropped.
    CommandRejected { reason: String },
}
