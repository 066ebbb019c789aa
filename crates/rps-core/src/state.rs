//! Game state snapshot: everything a renderer needs after each tick.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Bounds, Position, SimTime};

/// Complete visible state handed to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: RunPhase,
    pub bounds: Bounds,
    pub counts: PopulationCounts,
    pub pieces: Vec<PieceView>,
    /// Set once two populations are empty.
    pub verdict: Option<Verdict>,
    /// Multiplier that the next initialization will use.
    pub speed_multiplier: f64,
    pub population_size: u32,
    pub events: Vec<SimEvent>,
}

/// A piece as drawn on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieceView {
    pub kind: Kind,
    pub position: Position,
}

/// Live population sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationCounts {
    pub rock: u32,
    pub paper: u32,
    pub scissors: u32,
}

impl PopulationCounts {
    pub fn new(rock: u32, paper: u32, scissors: u32) -> Self {
        Self {
            rock,
            paper,
            scissors,
        }
    }

    pub fn get(&self, kind: Kind) -> u32 {
        match kind {
            Kind::Rock => self.rock,
            Kind::Paper => self.paper,
            Kind::Scissors => self.scissors,
        }
    }

    pub fn get_mut(&mut self, kind: Kind) -> &mut u32 {
        match kind {
            Kind::Rock => &mut self.rock,
            Kind::Paper => &mut self.paper,
            Kind::Scissors => &mut self.scissors,
        }
    }

    pub fn total(&self) -> u32 {
        self.rock + self.paper + self.scissors
    }
}

/// Overlay text, e.g. `🪨 3   📄 0   ✂️ 12`.
impl fmt::Display for PopulationCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}   {} {}   {} {}",
            Kind::Rock.icon(),
            self.rock,
            Kind::Paper.icon(),
            self.paper,
            Kind::Scissors.icon(),
            self.scissors
        )
    }
}
