//! Command-line flags and config file loading.
//!
//! Settings resolve in order: built-in defaults, then the JSON config file
//! (if given), then individual flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use rps_core::types::Bounds;
use rps_sim::SimConfig;

use crate::game_loop::{LoopOptions, TICK_DURATION};

/// Headless rock-paper-scissors ecosystem simulation.
#[derive(Debug, Parser)]
#[command(name = "rps-app", version)]
pub struct Cli {
    /// JSON file with `SimConfig` fields; missing fields take defaults.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// RNG seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pieces per kind (at least 10).
    #[arg(long)]
    pub population: Option<u32>,

    /// Canvas width in pixels.
    #[arg(long)]
    pub width: Option<f64>,

    /// Canvas height in pixels.
    #[arg(long)]
    pub height: Option<f64>,

    /// Stop after this many ticks.
    #[arg(long)]
    pub max_ticks: Option<u64>,

    /// Stop as soon as two populations are gone.
    #[arg(long)]
    pub stop_on_verdict: bool,

    /// Run as fast as possible instead of at the frame rate.
    #[arg(long)]
    pub unpaced: bool,
}

impl Cli {
    /// Resolve and validate the simulation config.
    pub fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SimConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(population) = self.population {
            config.population_size = population;
        }
        config.bounds = Bounds::new(
            self.width.unwrap_or(config.bounds.width),
            self.height.unwrap_or(config.bounds.height),
        );

        config.validate().context("invalid simulation config")?;
        Ok(config)
    }

    pub fn loop_options(&self) -> LoopOptions {
        LoopOptions {
            max_ticks: self.max_ticks,
            stop_on_verdict: self.stop_on_verdict,
            tick_duration: if self.unpaced {
                Duration::ZERO
            } else {
                TICK_DURATION
            },
        }
    }
}

/// Read a `SimConfig` from a JSON file.
pub fn load_config(path: &Path) -> Result<SimConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["rps-app"]);
        assert_eq!(cli.sim_config().unwrap(), SimConfig::default());

        let options = cli.loop_options();
        assert_eq!(options.max_ticks, None);
        assert!(!options.stop_on_verdict);
        assert_eq!(options.tick_duration, TICK_DURATION);
    }

    #[test]
    fn test_flag_overrides() {
        let cli = Cli::parse_from([
            "rps-app",
            "--seed",
            "9",
            "--population",
            "40",
            "--width",
            "1024",
            "--max-ticks",
            "500",
            "--stop-on-verdict",
            "--unpaced",
        ]);
        let config = cli.sim_config().unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.population_size, 40);
        assert_eq!(config.bounds, Bounds::new(1024.0, 600.0));

        let options = cli.loop_options();
        assert_eq!(options.max_ticks, Some(500));
        assert!(options.stop_on_verdict);
        assert!(options.tick_duration.is_zero());
    }

    #[test]
    fn test_small_population_rejected() {
        let cli = Cli::parse_from(["rps-app", "--population", "9"]);
        let err = cli.sim_config().unwrap_err();
        assert!(format!("{err:#}").contains("population size must be at least 10"));
    }

    #[test]
    fn test_config_file_then_flags() {
        let path = std::env::temp_dir().join(format!("rps-app-config-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"seed": 3, "population_size": 20, "bounds": {"width": 400.0, "height": 300.0}}"#,
        )
        .unwrap();

        let cli = Cli::parse_from([
            "rps-app".to_string(),
            "--config".to_string(),
            path.display().to_string(),
            "--seed".to_string(),
            "5".to_string(),
        ]);
        let config = cli.sim_config().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.seed, 5);
        assert_eq!(config.population_size, 20);
        assert_eq!(config.bounds, Bounds::new(400.0, 300.0));
    }

    #[test]
    fn test_missing_config_file() {
        let err = load_config(Path::new("/nonexistent/rps.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
