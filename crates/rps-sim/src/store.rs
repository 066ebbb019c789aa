//! Entity store: spawns, counts, and rescales the three populations.
//!
//! Every piece is a hecs entity carrying `(Piece, Kind, Position, Velocity)`.
//! A population is the set of pieces sharing a `Kind`.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use rps_core::components::Piece;
use rps_core::constants::*;
use rps_core::enums::Kind;
use rps_core::state::PopulationCounts;
use rps_core::types::{Bounds, Position, Velocity};

/// Parameters consumed by [`initialize`].
#[derive(Debug, Clone, Copy)]
pub struct SpawnParams {
    pub population_size: u32,
    pub speed_multiplier: f64,
    pub entity_size: f64,
    pub bounds: Bounds,
}

/// Discard every piece and spawn `population_size` pieces of each kind
/// around its anchor, in order Rock, Paper, Scissors.
pub fn initialize(world: &mut World, rng: &mut ChaCha8Rng, params: &SpawnParams) {
    world.clear();
    for kind in Kind::ALL {
        spawn_population(world, rng, kind, params);
    }
}

/// Spawn one population clustered around the anchor of `kind`.
pub fn spawn_population(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: Kind,
    params: &SpawnParams,
) {
    let anchor = spawn_anchor(kind, &params.bounds, params.entity_size);

    for _ in 0..params.population_size {
        let position = Position::new(
            anchor.x + rng.gen_range(-SPAWN_JITTER..SPAWN_JITTER),
            anchor.y + rng.gen_range(-SPAWN_JITTER..SPAWN_JITTER),
        );
        let velocity = Velocity::new(
            rng.gen_range(-MAX_SPAWN_SPEED..MAX_SPAWN_SPEED) * params.speed_multiplier,
            rng.gen_range(-MAX_SPAWN_SPEED..MAX_SPAWN_SPEED) * params.speed_multiplier,
        );
        spawn_piece(world, kind, position, velocity);
    }
}

/// Spawn a single piece.
pub fn spawn_piece(
    world: &mut World,
    kind: Kind,
    position: Position,
    velocity: Velocity,
) -> hecs::Entity {
    world.spawn((Piece, kind, position, velocity))
}

/// Spawn anchor for a kind: rocks near the top of the left quarter, papers
/// near the top of the right quarter, scissors bottom-center.
pub fn spawn_anchor(kind: Kind, bounds: &Bounds, entity_size: f64) -> Position {
    match kind {
        Kind::Rock => Position::new(bounds.width / 4.0, SPAWN_EDGE_OFFSET),
        Kind::Paper => Position::new(bounds.width * 3.0 / 4.0, SPAWN_EDGE_OFFSET),
        Kind::Scissors => Position::new(
            bounds.width / 2.0,
            bounds.height - entity_size - SPAWN_EDGE_OFFSET,
        ),
    }
}

/// Multiply every live velocity by `multiplier`.
///
/// The multiplier is not remembered; future spawns use whatever multiplier
/// the caller passes to [`initialize`].
pub fn scale_all_velocities(world: &mut World, multiplier: f64) {
    for (_entity, (_piece, vel)) in world.query_mut::<(&Piece, &mut Velocity)>() {
        vel.scale(multiplier);
    }
}

/// Number of live pieces of `kind`.
pub fn count(world: &World, kind: Kind) -> u32 {
    world
        .query::<(&Piece, &Kind)>()
        .iter()
        .filter(|(_, (_, k))| **k == kind)
        .count() as u32
}

/// Live population sizes for all three kinds.
pub fn counts(world: &World) -> PopulationCounts {
    let mut counts = PopulationCounts::default();
    for (_entity, (_piece, kind)) in world.query::<(&Piece, &Kind)>().iter() {
        *counts.get_mut(*kind) += 1;
    }
    counts
}
