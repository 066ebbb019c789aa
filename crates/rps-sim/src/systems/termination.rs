//! Termination and verdict evaluation. Read-only over population counts.

use rps_core::enums::{Kind, Verdict};
use rps_core::state::PopulationCounts;

/// Population pairs whose joint extinction ends a run, in check order.
pub const TERMINAL_PAIRS: [(Kind, Kind); 3] = [
    (Kind::Rock, Kind::Scissors),
    (Kind::Rock, Kind::Paper),
    (Kind::Scissors, Kind::Paper),
];

/// Returns the verdict once any two populations are empty, `None` while the
/// run is still contested.
pub fn evaluate(counts: &PopulationCounts) -> Option<Verdict> {
    TERMINAL_PAIRS
        .iter()
        .find(|(a, b)| counts.get(*a) == 0 && counts.get(*b) == 0)
        .map(|_| verdict(counts))
}

/// The kind with strictly the largest count wins; any tie for the top
/// (including all-zero) is a draw.
pub fn verdict(counts: &PopulationCounts) -> Verdict {
    Kind::ALL
        .iter()
        .copied()
        .find(|&kind| {
            Kind::ALL
                .iter()
                .filter(|&&other| other != kind)
                .all(|&other| counts.get(kind) > counts.get(other))
        })
        .map_or(Verdict::Draw, |kind| Verdict::Winner { kind })
}
