//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Piece kind. Fixed at spawn; never changes for the lifetime of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Kind {
    Rock,
    Paper,
    Scissors,
}

impl Kind {
    /// All kinds in spawn order.
    pub const ALL: [Kind; 3] = [Kind::Rock, Kind::Paper, Kind::Scissors];

    /// The kind that removes this one on contact.
    pub fn predator(self) -> Kind {
        match self {
            Kind::Rock => Kind::Paper,
            Kind::Paper => Kind::Scissors,
            Kind::Scissors => Kind::Rock,
        }
    }

    /// The kind this one removes on contact.
    pub fn prey(self) -> Kind {
        match self {
            Kind::Rock => Kind::Scissors,
            Kind::Paper => Kind::Rock,
            Kind::Scissors => Kind::Paper,
        }
    }

    /// Icon drawn for this kind.
    pub fn icon(self) -> &'static str {
        match self {
            Kind::Rock => "🪨",
            Kind::Paper => "📄",
            Kind::Scissors => "✂️",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Rock => "rock",
            Kind::Paper => "paper",
            Kind::Scissors => "scissors",
        };
        f.write_str(name)
    }
}

/// Outcome derived from the current population sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Verdict {
    /// One kind has strictly more pieces than each of the others.
    Winner { kind: Kind },
    /// Two or more kinds share the largest count.
    Draw,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Winner { kind } => write!(f, "{kind} wins {}", kind.icon()),
            Verdict::Draw => f.write_str("no winner, draw"),
        }
    }
}

/// Run lifecycle. "Decided" is not a phase: it is derived from counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Populations freshly spawned, no tick run yet.
    #[default]
    Initialized,
    /// At least one tick has run since the last (re)initialization.
    Running,
}
