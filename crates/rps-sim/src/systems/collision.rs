//! Collision system: removes pieces touched by their predator.

use glam::DVec2;
use hecs::{Entity, World};

use rps_core::components::Piece;
use rps_core::enums::Kind;
use rps_core::state::PopulationCounts;
use rps_core::types::Position;

/// Victim kinds in the order their rules run: rock vs paper, then paper vs
/// scissors, then scissors vs rock. Each rule sees the populations left by
/// the rules before it.
pub const ELIMINATION_ORDER: [Kind; 3] = [Kind::Rock, Kind::Paper, Kind::Scissors];

/// Run all elimination rules in order. Returns how many pieces of each
/// kind were removed.
pub fn run(world: &mut World, entity_size: f64, despawn_buffer: &mut Vec<Entity>) -> PopulationCounts {
    let mut removed = PopulationCounts::default();
    for victim in ELIMINATION_ORDER {
        *removed.get_mut(victim) = eliminate(world, victim, entity_size, despawn_buffer);
    }
    removed
}

/// Remove every `victim` piece closer than `entity_size` to any piece of
/// its predator. Predators are never removed by this rule.
///
/// Victims are collected first and despawned afterwards, so the query never
/// observes a half-updated population.
pub fn eliminate(
    world: &mut World,
    victim: Kind,
    entity_size: f64,
    despawn_buffer: &mut Vec<Entity>,
) -> u32 {
    despawn_buffer.clear();

    let predator = victim.predator();
    let predators: Vec<DVec2> = world
        .query::<(&Piece, &Kind, &Position)>()
        .iter()
        .filter(|(_, (_, kind, _))| **kind == predator)
        .map(|(_, (_, _, pos))| pos.as_vec())
        .collect();

    if predators.is_empty() {
        return 0;
    }

    for (entity, (_piece, kind, pos)) in world.query::<(&Piece, &Kind, &Position)>().iter() {
        if *kind != victim {
            continue;
        }
        let at = pos.as_vec();
        if predators.iter().any(|p| p.distance(at) < entity_size) {
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len() as u32;
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
