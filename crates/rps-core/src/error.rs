//! Configuration validation errors.

use crate::constants::MIN_POPULATION_SIZE;

/// Rejected configuration values. Rejection never mutates simulation state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Requested population size is below the minimum.
    #[error("population size must be at least {min}, got {requested}")]
    PopulationTooSmall { requested: u32, min: u32 },

    /// Speed factors and multipliers must be finite and positive.
    #[error("speed factor must be a positive finite number, got {0}")]
    InvalidSpeedFactor(f64),

    /// Entity size must be finite and positive.
    #[error("entity size must be a positive finite number, got {0}")]
    InvalidEntitySize(f64),

    /// Canvas must have positive finite dimensions.
    #[error("canvas bounds must be positive, got {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },
}

/// Check a requested population size against the minimum.
pub fn check_population_size(requested: u32) -> Result<u32, ConfigError> {
    if requested < MIN_POPULATION_SIZE {
        return Err(ConfigError::PopulationTooSmall {
            requested,
            min: MIN_POPULATION_SIZE,
        });
    }
    Ok(requested)
}

/// Check a speed factor or multiplier.
pub fn check_speed_factor(factor: f64) -> Result<f64, ConfigError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ConfigError::InvalidSpeedFactor(factor));
    }
    Ok(factor)
}
