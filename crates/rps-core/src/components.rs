//! ECS components for hecs entities.
//!
//! A piece is spawned as `(Piece, Kind, Position, Velocity)`. `Kind` lives in
//! `enums.rs`; `Position` and `Velocity` live in `types.rs` and double as
//! components.

use serde::{Deserialize, Serialize};

/// Marks an entity as a simulated piece.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Piece;
