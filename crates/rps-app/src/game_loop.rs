//! Game loop thread, the render driver. Runs the engine at the frame rate
//! and publishes snapshots.
//!
//! The engine is created inside this thread so that every mutation of the
//! populations happens on it. Commands arrive via `mpsc` channel and are
//! applied between ticks. Snapshots are stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::info;

use rps_core::constants::TICK_RATE;
use rps_core::state::GameStateSnapshot;
use rps_sim::{Advance, SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one frame.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// When the loop stops on its own, and how fast it runs.
#[derive(Debug, Clone)]
pub struct LoopOptions {
    /// Stop after this many ticks (counted across restarts).
    pub max_ticks: Option<u64>,
    /// Stop on the first tick whose snapshot carries a verdict.
    pub stop_on_verdict: bool,
    /// Frame pacing. `Duration::ZERO` runs unpaced.
    pub tick_duration: Duration,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            max_ticks: None,
            stop_on_verdict: false,
            tick_duration: TICK_DURATION,
        }
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    options: LoopOptions,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("rps-game-loop".into())
        .spawn(move || {
            let engine = SimulationEngine::new(config);
            run_game_loop(engine, cmd_rx, &latest_snapshot, &options);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until a stop condition, a Shutdown command, or
/// channel disconnect.
pub fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    options: &LoopOptions,
) {
    let mut next_tick_time = Instant::now();
    let mut ticks_run: u64 = 0;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    info!(ticks_run, "game loop shut down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame
        let Some(snapshot) = engine.advance(1) else {
            return;
        };
        ticks_run += 1;

        if ticks_run % TICK_RATE as u64 == 0 {
            info!(tick = snapshot.time.tick, counts = %snapshot.counts, "population");
        }

        let decided = snapshot.verdict.is_some();

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Stop conditions
        if options.stop_on_verdict && decided {
            info!(ticks_run, "stopping on verdict");
            return;
        }
        if options.max_ticks.is_some_and(|max| ticks_run >= max) {
            info!(ticks_run, "tick limit reached");
            return;
        }

        // 5. Sleep until next frame
        if options.tick_duration.is_zero() {
            continue;
        }
        next_tick_time += options.tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > options.tick_duration * 2 {
            // Too far behind, reset instead of catching up
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rps_core::commands::PlayerCommand;
    use rps_core::enums::{Kind, Verdict};
    use rps_core::types::{Position, Velocity};

    fn unpaced(max_ticks: Option<u64>) -> LoopOptions {
        LoopOptions {
            max_ticks,
            stop_on_verdict: false,
            tick_duration: Duration::ZERO,
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Restart))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(
            PlayerCommand::IncreaseSpeed { factor: 1.2 },
        ))
        .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::Restart)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::IncreaseSpeed { .. })
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_stops_at_tick_limit() {
        let (_tx, rx) = mpsc::channel::<GameLoopCommand>();
        let latest = Mutex::new(None);

        run_game_loop(
            SimulationEngine::new(SimConfig::default()),
            rx,
            &latest,
            &unpaced(Some(25)),
        );

        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.time.tick, 25);
    }

    #[test]
    fn test_loop_applies_queued_commands() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        tx.send(GameLoopCommand::PlayerCommand(
            PlayerCommand::SetPopulationCount { count: 12 },
        ))
        .unwrap();
        let latest = Mutex::new(None);

        run_game_loop(
            SimulationEngine::new(SimConfig::default()),
            rx,
            &latest,
            &unpaced(Some(1)),
        );

        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.population_size, 12);
    }

    #[test]
    fn test_loop_stops_on_verdict() {
        let (_tx, rx) = mpsc::channel::<GameLoopCommand>();
        let latest = Mutex::new(None);

        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.clear_pieces();
        engine.spawn_piece(Kind::Rock, Position::new(50.0, 50.0), Velocity::default());

        let options = LoopOptions {
            stop_on_verdict: true,
            ..unpaced(Some(1_000))
        };
        run_game_loop(engine, rx, &latest, &options);

        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.time.tick, 1);
        assert_eq!(snapshot.verdict, Some(Verdict::Winner { kind: Kind::Rock }));
    }

    #[test]
    fn test_spawned_loop_shuts_down() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) =
            spawn_game_loop(SimConfig::default(), LoopOptions::default(), latest.clone()).unwrap();

        std::thread::sleep(Duration::from_millis(100));
        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        assert!(latest.lock().unwrap().is_some());
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
