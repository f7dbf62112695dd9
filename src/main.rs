//! Interval Timer - A terminal countdown timer for interval workouts
//!
//! This is the main entry point for the interval-timer application.

use tokio::sync::mpsc;
use tracing::info;

use interval_timer::{
    config::Config,
    control::spawn_stdin_reader,
    machine::PhaseMachine,
    services::TerminalDisplay,
    state::ConfigSource,
    tasks::{countdown_task, Session},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so the countdown display owns stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(format!("interval_timer={}", config.log_level()))
        .init();

    info!("Starting interval-timer v{}", env!("CARGO_PKG_VERSION"));

    let inputs = config.inputs();
    let initial = inputs.current();
    info!(
        "Configuration: work={}s, rest={}s, round_rest={}s, exercises={}, rounds={}, prepare={}, halfway={}",
        initial.work_seconds,
        initial.rest_seconds,
        initial.round_rest_seconds,
        initial.exercise_count,
        initial.round_count,
        config.prepare,
        config.halfway
    );

    let announcer = config.announcer()?;
    let display = TerminalDisplay::stdout(config.display_format());
    let machine = PhaseMachine::new(config.machine_options());
    let session = Session::new(machine, inputs, announcer, display);

    let (command_tx, command_rx) = mpsc::channel(32);
    spawn_stdin_reader(command_tx)?;

    info!("Controls:");
    info!("  <enter> | toggle          - Start, pause, or reset");
    info!("  start | pause | reset     - Explicit controls");
    info!("  set <field> <value>       - Change work, rest, round-rest, exercises, rounds");
    info!("  status                    - Show the current time and status");
    info!("  quit                      - Exit");

    tokio::select! {
        _ = countdown_task(session, command_rx) => {}
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Interval timer stopped");
    Ok(())
}
