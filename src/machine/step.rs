//! Output produced by each machine operation

use serde::{Deserialize, Serialize};

/// Status texts pushed to the display
pub mod status {
    pub const PRESS_START: &str = "Press Start";
    pub const GET_READY: &str = "GET READY";
    pub const REST: &str = "REST";
    pub const ROUND_REST: &str = "ROUND REST";
    pub const PAUSED: &str = "PAUSED";
    pub const DONE: &str = "DONE!";
}

/// Phrases handed to the announcer
pub mod phrases {
    pub const GET_READY: &str = "Get Ready";
    pub const WORK: &str = "Work";
    pub const REST: &str = "Rest";
    pub const ROUND_COMPLETE: &str = "Round Complete. Rest.";
    pub const WORKOUT_COMPLETE: &str = "Workout Complete";
    pub const HALFWAY: &str = "Halfway";
}

/// What the display shows: `mm:ss` plus a status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub time: String,
    pub status: String,
}

impl Frame {
    pub fn new(time: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            status: status.into(),
        }
    }
}

/// A best-effort side effect for the announcer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cue {
    Speak(String),
    Chime,
}

/// The frame to render and the cues to fire, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step {
    pub frame: Option<Frame>,
    pub cues: Vec<Cue>,
}

impl Step {
    /// A step that only renders a frame
    pub fn with_frame(frame: Frame) -> Self {
        Self {
            frame: Some(frame),
            cues: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.frame.is_none() && self.cues.is_empty()
    }

    /// Spoken phrases in this step
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.cues.iter().filter_map(|cue| match cue {
            Cue::Speak(phrase) => Some(phrase.as_str()),
            Cue::Chime => None,
        })
    }

    pub(crate) fn show(&mut self, frame: Frame) {
        self.frame = Some(frame);
    }

    pub(crate) fn speak(&mut self, phrase: impl Into<String>) {
        self.cues.push(Cue::Speak(phrase.into()));
    }

    pub(crate) fn chime(&mut self) {
        self.cues.push(Cue::Chime);
    }
}
