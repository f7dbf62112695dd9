//! Timer state structure and management

use std::fmt;

use serde::{Deserialize, Serialize};

use super::WorkoutConfig;

/// One segment of the workout timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Idle,
    Preparing,
    Working,
    Resting,
    RoundResting,
    Finished,
}

impl Phase {
    /// Whether the phase counts down (as opposed to Idle/Finished)
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            Phase::Preparing | Phase::Working | Phase::Resting | Phase::RoundResting
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Preparing => "preparing",
            Phase::Working => "working",
            Phase::Resting => "resting",
            Phase::RoundResting => "round-resting",
            Phase::Finished => "finished",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Countdown state owned by the phase machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerState {
    pub phase: Phase,
    pub remaining_seconds: u32,
    pub running: bool,
    /// 1-indexed
    pub current_exercise: u32,
    /// 1-indexed
    pub current_round: u32,
    pub halfway_announced: bool,
    /// Snapshot taken at the latest phase entry or resume
    pub config: WorkoutConfig,
}

impl TimerState {
    /// Create an idle timer state
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            remaining_seconds: 0,
            running: false,
            current_exercise: 1,
            current_round: 1,
            halfway_announced: false,
            config: WorkoutConfig::default(),
        }
    }

    /// A countdown phase that is not ticking
    pub fn is_paused(&self) -> bool {
        self.phase.is_active() && !self.running
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
