//! Host-side handlers for the configuration actions.
//!
//! These bridge host requests (stdin lines, the main thread) to the game
//! loop thread via channels.

use rps_core::commands::PlayerCommand;
use rps_core::state::GameStateSnapshot;
use rps_sim::SimConfig;

use crate::game_loop::{self, LoopOptions};
use crate::state::{AppState, GameLoopCommand};

/// Failures talking to the game loop.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotStarted,
    #[error("game loop is no longer receiving commands")]
    Disconnected,
    #[error("shared state lock poisoned")]
    Poisoned,
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("game loop thread panicked")]
    LoopPanicked,
}

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(
    state: &AppState,
    config: SimConfig,
    options: LoopOptions,
) -> Result<(), HostError> {
    let mut running = state.running.lock().map_err(|_| HostError::Poisoned)?;

    if *running {
        return Err(HostError::AlreadyRunning);
    }

    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(config, options, state.latest_snapshot.clone())?;

    *state.command_tx.lock().map_err(|_| HostError::Poisoned)? = Some(cmd_tx);
    *state.loop_handle.lock().map_err(|_| HostError::Poisoned)? = Some(handle);
    *running = true;

    Ok(())
}

/// Send a host action to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), HostError> {
    send(state, GameLoopCommand::PlayerCommand(command))
}

/// Ask the game loop to stop after the current tick.
pub fn stop_simulation(state: &AppState) -> Result<(), HostError> {
    send(state, GameLoopCommand::Shutdown)
}

/// Get the latest snapshot (for polling / final state).
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, HostError> {
    let lock = state
        .latest_snapshot
        .lock()
        .map_err(|_| HostError::Poisoned)?;
    Ok(lock.clone())
}

/// Block until the game loop thread exits.
pub fn wait_for_exit(state: &AppState) -> Result<(), HostError> {
    let handle = state
        .loop_handle
        .lock()
        .map_err(|_| HostError::Poisoned)?
        .take()
        .ok_or(HostError::NotStarted)?;
    handle.join().map_err(|_| HostError::LoopPanicked)?;

    *state.running.lock().map_err(|_| HostError::Poisoned)? = false;
    Ok(())
}

fn send(state: &AppState, command: GameLoopCommand) -> Result<(), HostError> {
    let tx_lock = state.command_tx.lock().map_err(|_| HostError::Poisoned)?;

    match tx_lock.as_ref() {
        Some(tx) => tx.send(command).map_err(|_| HostError::Disconnected),
        None => Err(HostError::NotStarted),
    }
}
