//! Workout configuration snapshot and the input panel that feeds it

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The five configurable quantities, read fresh whenever a phase begins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkoutConfig {
    pub work_seconds: u32,
    pub rest_seconds: u32,
    pub round_rest_seconds: u32,
    pub exercise_count: u32,
    pub round_count: u32,
}

impl WorkoutConfig {
    /// Create a configuration from explicit values
    pub fn new(
        work_seconds: u32,
        rest_seconds: u32,
        round_rest_seconds: u32,
        exercise_count: u32,
        round_count: u32,
    ) -> Self {
        Self {
            work_seconds,
            rest_seconds,
            round_rest_seconds,
            exercise_count,
            round_count,
        }
    }

    /// Seconds spent in one round: every exercise plus the rests between them
    pub fn round_seconds(&self) -> u64 {
        let exercises = u64::from(self.exercise_count);
        let rests = u64::from(self.rest_seconds).saturating_mul(exercises.saturating_sub(1));
        u64::from(self.work_seconds)
            .saturating_mul(exercises)
            .saturating_add(rests)
    }

    /// Total workout duration used for the idle preview.
    ///
    /// Round rest is counted between rounds only. With `include_prepare`
    /// one extra round rest is counted for the phase before round 1.
    pub fn total_seconds(&self, include_prepare: bool) -> u64 {
        if self.exercise_count == 0 || self.round_count == 0 {
            return 0;
        }

        let rounds = u64::from(self.round_count);
        let round_rest = u64::from(self.round_rest_seconds);
        let between_rounds = if include_prepare { rounds } else { rounds - 1 };

        self.round_seconds()
            .saturating_mul(rounds)
            .saturating_add(round_rest.saturating_mul(between_rounds))
    }
}

/// Synchronous "read current config" capability
pub trait ConfigSource {
    fn current(&self) -> WorkoutConfig;
}

impl ConfigSource for WorkoutConfig {
    fn current(&self) -> WorkoutConfig {
        *self
    }
}

/// One of the five configuration inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Field {
    Work,
    Rest,
    RoundRest,
    Exercises,
    Rounds,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Work => "work",
            Field::Rest => "rest",
            Field::RoundRest => "round-rest",
            Field::Exercises => "exercises",
            Field::Rounds => "rounds",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw text of the five inputs, as last edited by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPanel {
    work: String,
    rest: String,
    round_rest: String,
    exercises: String,
    rounds: String,
}

impl InputPanel {
    /// Create a panel from raw input text
    pub fn new(
        work: impl Into<String>,
        rest: impl Into<String>,
        round_rest: impl Into<String>,
        exercises: impl Into<String>,
        rounds: impl Into<String>,
    ) -> Self {
        Self {
            work: work.into(),
            rest: rest.into(),
            round_rest: round_rest.into(),
            exercises: exercises.into(),
            rounds: rounds.into(),
        }
    }

    /// Replace the raw text of one input
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        debug!("Input {} set to {:?}", field, value);
        *self.slot_mut(field) = value;
    }

    /// Raw text of one input
    pub fn raw(&self, field: Field) -> &str {
        match field {
            Field::Work => &self.work,
            Field::Rest => &self.rest,
            Field::RoundRest => &self.round_rest,
            Field::Exercises => &self.exercises,
            Field::Rounds => &self.rounds,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Work => &mut self.work,
            Field::Rest => &mut self.rest,
            Field::RoundRest => &mut self.round_rest,
            Field::Exercises => &mut self.exercises,
            Field::Rounds => &mut self.rounds,
        }
    }
}

impl From<WorkoutConfig> for InputPanel {
    fn from(config: WorkoutConfig) -> Self {
        Self::new(
            config.work_seconds.to_string(),
            config.rest_seconds.to_string(),
            config.round_rest_seconds.to_string(),
            config.exercise_count.to_string(),
            config.round_count.to_string(),
        )
    }
}

impl ConfigSource for InputPanel {
    fn current(&self) -> WorkoutConfig {
        WorkoutConfig {
            work_seconds: parse_lenient(&self.work),
            rest_seconds: parse_lenient(&self.rest),
            round_rest_seconds: parse_lenient(&self.round_rest),
            exercise_count: parse_lenient(&self.exercises),
            round_count: parse_lenient(&self.rounds),
        }
    }
}

/// Parse the leading integer of `text`, treating anything unusable as 0.
///
/// Accepts an optional sign and ignores trailing characters after the
/// digits. Negative values clamp to 0 and overflow saturates.
pub fn parse_lenient(text: &str) -> u32 {
    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];

    if digits.is_empty() {
        debug!("Input {:?} is not numeric, using 0", text);
        return 0;
    }
    if negative {
        debug!("Input {:?} is negative, using 0", text);
        return 0;
    }

    digits.bytes().fold(0u32, |acc, digit| {
        acc.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
    })
}
