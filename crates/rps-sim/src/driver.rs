//! Scheduler seam between the engine and whatever host drives its frames.
//!
//! A host (frame callback, timer thread, game-loop library) only needs
//! something that can be advanced by a number of ticks.

use rps_core::state::GameStateSnapshot;

use crate::engine::SimulationEngine;

/// Something a host can advance by whole ticks.
pub trait Advance {
    /// What the host receives after advancing.
    type Frame;

    /// Run `delta_ticks` ticks. Returns the frame after the last tick, or
    /// `None` when `delta_ticks` is zero.
    fn advance(&mut self, delta_ticks: u32) -> Option<Self::Frame>;
}

impl Advance for SimulationEngine {
    type Frame = GameStateSnapshot;

    /// Events from every tick in the batch are carried on the returned
    /// snapshot, oldest first.
    fn advance(&mut self, delta_ticks: u32) -> Option<GameStateSnapshot> {
        let mut events = Vec::new();
        let mut last = None;
        for _ in 0..delta_ticks {
            let mut snapshot = self.tick();
            events.append(&mut snapshot.events);
            last = Some(snapshot);
        }
        last.map(|mut snapshot| {
            snapshot.events = events;
            snapshot
        })
    }
}
