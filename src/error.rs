//! Error types

use thiserror::Error;

use crate::state::{Field, Phase};

/// Control actions the phase machine refuses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("cannot start: {field} resolves to 0")]
    ZeroDuration { field: Field },

    #[error("reset is only available once the workout is finished (currently {phase})")]
    NotFinished { phase: Phase },
}

/// Failures of the speech and chime programs
#[derive(Debug, Error)]
pub enum AnnounceError {
    #[error("announcer command is empty")]
    EmptyCommand,

    #[error("invalid quoting in command {command:?}")]
    InvalidQuoting { command: String },

    #[error("failed to spawn {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Control lines that do not parse into a command
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid quoting")]
    InvalidQuoting,

    #[error("{0}")]
    Usage(String),
}
