//! State management module
//!
//! This module contains the workout configuration and the countdown state.

pub mod timer_state;
pub mod workout_config;

// Re-export main types
pub use timer_state::{Phase, TimerState};
pub use workout_config::{parse_lenient, ConfigSource, Field, InputPanel, WorkoutConfig};
