use std::io::BufRead;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rps_app::config::Cli;
use rps_app::host;
use rps_app::input::{self, HostInput};
use rps_app::state::AppState;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("rps_app=info,rps_sim=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.sim_config()?;
    info!(?config, "starting simulation");

    let state = Arc::new(AppState::new());
    host::start_simulation(&state, config, cli.loop_options())?;

    // stdin reader: detached, the process exits with the game loop.
    let reader_state = Arc::clone(&state);
    std::thread::Builder::new()
        .name("rps-stdin".into())
        .spawn(move || read_commands(&reader_state))?;

    host::wait_for_exit(&state)?;

    if let Some(snapshot) = host::get_snapshot(&state)? {
        match snapshot.verdict {
            Some(verdict) => info!(counts = %snapshot.counts, %verdict, "final state"),
            None => info!(counts = %snapshot.counts, "final state, undecided"),
        }
    }
    Ok(())
}

/// Forward stdin lines to the game loop. End of input leaves the loop
/// running; only `quit` stops it.
fn read_commands(state: &AppState) {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { return };
        let result = match input::parse_line(&line) {
            Ok(HostInput::Command(command)) => host::send_command(state, command),
            Ok(HostInput::Quit) => host::stop_simulation(state),
            Ok(HostInput::Empty) => Ok(()),
            Err(err) => {
                warn!(%err, "ignoring input");
                Ok(())
            }
        };
        if let Err(err) = result {
            warn!(%err, "game loop unreachable");
            return;
        }
    }
}
