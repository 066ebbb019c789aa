//! Snapshot system: queries the ECS world and builds a GameStateSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use rps_core::components::Piece;
use rps_core::enums::{Kind, RunPhase, Verdict};
use rps_core::events::SimEvent;
use rps_core::state::{GameStateSnapshot, PieceView, PopulationCounts};
use rps_core::types::{Bounds, Position, SimTime};

/// Run-level values the snapshot reports alongside the world contents.
pub struct SnapshotContext<'a> {
    pub time: &'a SimTime,
    pub phase: RunPhase,
    pub bounds: Bounds,
    pub counts: PopulationCounts,
    pub verdict: Option<Verdict>,
    pub speed_multiplier: f64,
    pub population_size: u32,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    ctx: SnapshotContext<'_>,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *ctx.time,
        phase: ctx.phase,
        bounds: ctx.bounds,
        counts: ctx.counts,
        pieces: build_pieces(world),
        verdict: ctx.verdict,
        speed_multiplier: ctx.speed_multiplier,
        population_size: ctx.population_size,
        events,
    }
}

/// Piece list, grouped by kind in draw order (rocks, papers, scissors).
fn build_pieces(world: &World) -> Vec<PieceView> {
    let mut pieces: Vec<PieceView> = world
        .query::<(&Piece, &Kind, &Position)>()
        .iter()
        .map(|(_, (_, kind, pos))| PieceView {
            kind: *kind,
            position: *pos,
        })
        .collect();

    pieces.sort_by_key(|p| p.kind);
    pieces
}
