//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs world holding the three populations,
//! applies host commands at tick boundaries, runs the systems, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use rps_core::commands::PlayerCommand;
use rps_core::constants::*;
use rps_core::enums::{Kind, RunPhase, Verdict};
use rps_core::error::{check_population_size, check_speed_factor, ConfigError};
use rps_core::events::SimEvent;
use rps_core::state::{GameStateSnapshot, PopulationCounts};
use rps_core::types::{Bounds, Position, SimTime, Velocity};

use crate::store::{self, SpawnParams};
use crate::systems;
use crate::systems::snapshot::SnapshotContext;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Pieces per kind on (re)initialization.
    pub population_size: u32,
    /// Velocity scale applied at spawn.
    pub speed_multiplier: f64,
    /// Icon size; also the collision threshold.
    pub entity_size: f64,
    /// Canvas dimensions, fixed for the engine's lifetime.
    pub bounds: Bounds,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            population_size: DEFAULT_POPULATION_SIZE,
            speed_multiplier: BASE_SPEED_MULTIPLIER,
            entity_size: ENTITY_SIZE,
            bounds: Bounds::default(),
        }
    }
}

impl SimConfig {
    /// Check the values a host is allowed to supply.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_population_size(self.population_size)?;
        check_speed_factor(self.speed_multiplier)?;
        if !self.entity_size.is_finite() || self.entity_size <= 0.0 {
            return Err(ConfigError::InvalidEntitySize(self.entity_size));
        }
        let Bounds { width, height } = self.bounds;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidBounds { width, height });
        }
        Ok(())
    }
}

/// The simulation engine. Owns the ECS world and all run state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: RunPhase,
    rng: ChaCha8Rng,
    population_size: u32,
    speed_multiplier: f64,
    entity_size: f64,
    bounds: Bounds,
    verdict: Option<Verdict>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new engine and spawn the initial populations.
    ///
    /// The config is taken as given; hosts accepting user input should call
    /// [`SimConfig::validate`] first.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: RunPhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            population_size: config.population_size,
            speed_multiplier: config.speed_multiplier,
            entity_size: config.entity_size,
            bounds: config.bounds,
            verdict: None,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        };
        engine.initialize();
        engine
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        self.step();
        self.resolve_collisions();
        self.time.advance();
        self.phase = RunPhase::Running;

        let verdict = self.evaluate_termination();
        if let (Some(verdict), None) = (verdict, self.verdict) {
            info!(tick = self.time.tick, %verdict, "run decided");
            self.events.push(SimEvent::RunDecided { verdict });
        }
        self.verdict = verdict;

        let events = std::mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    /// Current state without advancing. Pending events stay queued for the
    /// next tick.
    pub fn snapshot(&self) -> GameStateSnapshot {
        self.build_snapshot(Vec::new())
    }

    /// Move every piece and bounce it off the walls.
    pub fn step(&mut self) {
        systems::movement::run(&mut self.world, &self.bounds, self.entity_size);
    }

    /// Apply the three elimination rules in order. Returns pieces removed
    /// per kind.
    pub fn resolve_collisions(&mut self) -> PopulationCounts {
        let removed =
            systems::collision::run(&mut self.world, self.entity_size, &mut self.despawn_buffer);

        for kind in Kind::ALL {
            let count = removed.get(kind);
            if count > 0 {
                debug!(%kind, count, "pieces eliminated");
                self.events.push(SimEvent::Eliminated { kind, count });
            }
        }
        removed
    }

    /// Verdict if two populations are empty, `None` otherwise. Does not
    /// stop the engine.
    pub fn evaluate_termination(&self) -> Option<Verdict> {
        systems::termination::evaluate(&self.counts())
    }

    /// Verdict from the current counts, whether or not the run is decided.
    pub fn verdict(&self) -> Verdict {
        systems::termination::verdict(&self.counts())
    }

    /// Re-spawn with `count` pieces per kind, keeping the speed multiplier.
    pub fn set_population_count(&mut self, count: u32) -> Result<(), ConfigError> {
        self.population_size = check_population_size(count)?;
        self.initialize();
        Ok(())
    }

    /// Scale every live velocity by `factor`. Future spawns are unaffected.
    pub fn increase_speed(&mut self, factor: f64) -> Result<(), ConfigError> {
        let factor = check_speed_factor(factor)?;
        store::scale_all_velocities(&mut self.world, factor);
        debug!(factor, "velocities scaled");
        Ok(())
    }

    /// Reset the speed multiplier and re-spawn with the last population size.
    pub fn restart(&mut self) {
        self.speed_multiplier = BASE_SPEED_MULTIPLIER;
        self.initialize();
    }

    /// Spawn a single piece outside of initialization.
    pub fn spawn_piece(&mut self, kind: Kind, position: Position, velocity: Velocity) -> hecs::Entity {
        store::spawn_piece(&mut self.world, kind, position, velocity)
    }

    /// Remove every piece without re-spawning.
    pub fn clear_pieces(&mut self) {
        self.world.clear();
        self.verdict = None;
    }

    /// Live population sizes.
    pub fn counts(&self) -> PopulationCounts {
        store::counts(&self.world)
    }

    /// Get the current run phase.
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Multiplier the next initialization will apply.
    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    pub fn population_size(&self) -> u32 {
        self.population_size
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn entity_size(&self) -> f64 {
        self.entity_size
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Discard all populations and spawn fresh ones from the current
    /// settings.
    fn initialize(&mut self) {
        let params = SpawnParams {
            population_size: self.population_size,
            speed_multiplier: self.speed_multiplier,
            entity_size: self.entity_size,
            bounds: self.bounds,
        };
        store::initialize(&mut self.world, &mut self.rng, &params);

        self.time = SimTime::default();
        self.phase = RunPhase::Initialized;
        self.verdict = None;
        self.events.push(SimEvent::Initialized {
            population_size: self.population_size,
        });
        info!(
            population_size = self.population_size,
            speed_multiplier = self.speed_multiplier,
            "populations initialized"
        );
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.handle_command(&command) {
                warn!(?command, %err, "command rejected");
                self.events.push(SimEvent::CommandRejected {
                    reason: err.to_string(),
                });
            }
        }
    }

    /// Handle a single host command.
    fn handle_command(&mut self, command: &PlayerCommand) -> Result<(), ConfigError> {
        match *command {
            PlayerCommand::SetPopulationCount { count } => self.set_population_count(count),
            PlayerCommand::IncreaseSpeed { factor } => self.increase_speed(factor),
            PlayerCommand::Restart => {
                self.restart();
                Ok(())
            }
        }
    }

    fn build_snapshot(&self, events: Vec<SimEvent>) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotContext {
                time: &self.time,
                phase: self.phase,
                bounds: self.bounds,
                counts: self.counts(),
                verdict: self.verdict,
                speed_multiplier: self.speed_multiplier,
                population_size: self.population_size,
            },
            events,
        )
    }
}
