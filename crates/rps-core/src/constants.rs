//! Simulation constants and tuning parameters.

/// Nominal frame rate of the render driver (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Canvas ---

/// Canvas width used when the host does not supply one.
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;

/// Canvas height used when the host does not supply one.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

/// Icon size in pixels. Doubles as the collision distance threshold and
/// as the inset of the right/bottom walls.
pub const ENTITY_SIZE: f64 = 15.0;

// --- Populations ---

/// Pieces per kind at startup.
pub const DEFAULT_POPULATION_SIZE: u32 = 33;

/// Smallest population size a host may request.
pub const MIN_POPULATION_SIZE: u32 = 10;

// --- Spawning ---

/// Distance of the rock/paper anchors from the top edge, and of the
/// scissors anchor from the bottom wall.
pub const SPAWN_EDGE_OFFSET: f64 = 25.0;

/// Half-width of the uniform jitter applied around a spawn anchor.
pub const SPAWN_JITTER: f64 = 25.0;

/// Largest absolute velocity component at spawn, before the speed multiplier.
pub const MAX_SPAWN_SPEED: f64 = 1.25;

// --- Speed ---

/// Initial speed multiplier, also restored on restart.
pub const BASE_SPEED_MULTIPLIER: f64 = 1.0;

/// Factor applied by a single "increase speed" action.
pub const SPEED_UP_FACTOR: f64 = 1.2;
