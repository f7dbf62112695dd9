//! Interval Timer - A terminal countdown timer for interval workouts
//!
//! This library provides the phase state machine that sequences work, rest
//! and round-rest phases, the total-duration preview, and the once-a-second
//! countdown session that drives speech cues and transition chimes.

pub mod config;
pub mod control;
pub mod error;
pub mod machine;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use control::Command;
pub use error::TimerError;
pub use machine::{Cue, Frame, MachineOptions, PhaseMachine, Step};
pub use state::{ConfigSource, InputPanel, Phase, TimerState, WorkoutConfig};
pub use tasks::Session;
pub use utils::signals::shutdown_signal;
