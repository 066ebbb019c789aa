//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick (position += velocity, one tick
//! per frame) and bounces pieces off the canvas walls.

use hecs::World;

use rps_core::components::Piece;
use rps_core::types::{Bounds, Position, Velocity};

/// Move every piece, then reflect velocity components whose axis left the
/// playable area.
///
/// The right/bottom walls sit `entity_size` inside the canvas. Positions
/// are never clamped: a piece may overshoot a wall for a tick before the
/// reversed velocity carries it back.
pub fn run(world: &mut World, bounds: &Bounds, entity_size: f64) {
    let max_x = bounds.width - entity_size;
    let max_y = bounds.height - entity_size;

    for (_entity, (_piece, pos, vel)) in
        world.query_mut::<(&Piece, &mut Position, &mut Velocity)>()
    {
        pos.x += vel.x;
        pos.y += vel.y;

        if pos.x < 0.0 || pos.x > max_x {
            vel.x = -vel.x;
        }
        if pos.y < 0.0 || pos.y > max_y {
            vel.y = -vel.y;
        }
    }
}
