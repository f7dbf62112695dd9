//! Stdin control reader

use std::{
    io::{self, BufRead},
    thread,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::{parse_line, Command};
use crate::error::CommandError;

/// Forward parsed control lines to the session until EOF or quit.
///
/// EOF is forwarded as [`Command::Quit`]. Runs on a blocking thread.
pub fn read_commands<R: BufRead>(reader: R, commands: &mpsc::Sender<Command>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to read control input: {}", e);
                break;
            }
        };

        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(CommandError::Usage(usage)) => {
                // Help text is for the person typing, not the log
                eprintln!("{}", usage.trim_end());
                continue;
            }
            Err(e) => {
                warn!("Ignoring control line {:?}: {}", line, e);
                continue;
            }
        };

        debug!("Control command: {:?}", command);
        let quit = command == Command::Quit;
        if commands.blocking_send(command).is_err() {
            debug!("Session closed, stopping control reader");
            return;
        }
        if quit {
            return;
        }
    }

    info!("Control input closed");
    if commands.blocking_send(Command::Quit).is_err() {
        debug!("Session closed before EOF quit");
    }
}

/// Read stdin on a detached thread so a pending read never holds up shutdown
pub fn spawn_stdin_reader(commands: mpsc::Sender<Command>) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("control-stdin".to_string())
        .spawn(move || read_commands(io::stdin().lock(), &commands))
}
