//! Recording collaborators for headless tests

use std::sync::{Arc, Mutex};

use crate::machine::{Cue, Frame};

use super::{Announcer, DisplaySink};

/// Announcer that records every cue; clones share one log
#[derive(Debug, Clone, Default)]
pub struct RecordingAnnouncer {
    cues: Arc<Mutex<Vec<Cue>>>,
}

impl RecordingAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cues(&self) -> Vec<Cue> {
        self.cues.lock().map(|cues| cues.clone()).unwrap_or_default()
    }

    /// Spoken phrases only, in order
    pub fn phrases(&self) -> Vec<String> {
        self.cues()
            .into_iter()
            .filter_map(|cue| match cue {
                Cue::Speak(phrase) => Some(phrase),
                Cue::Chime => None,
            })
            .collect()
    }

    pub fn chimes(&self) -> usize {
        self.cues().iter().filter(|cue| **cue == Cue::Chime).count()
    }

    fn record(&self, cue: Cue) {
        if let Ok(mut cues) = self.cues.lock() {
            cues.push(cue);
        }
    }
}

impl Announcer for RecordingAnnouncer {
    fn speak(&mut self, phrase: &str) {
        self.record(Cue::Speak(phrase.to_string()));
    }

    fn chime(&mut self) {
        self.record(Cue::Chime);
    }
}

/// Display that records every frame and notice; clones share one log
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    frames: Arc<Mutex<Vec<Frame>>>,
    notices: Arc<Mutex<Vec<String>>>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<Frame> {
        self.frames.lock().map(|frames| frames.clone()).unwrap_or_default()
    }

    pub fn last_frame(&self) -> Option<Frame> {
        self.frames.lock().ok().and_then(|frames| frames.last().cloned())
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().map(|notices| notices.clone()).unwrap_or_default()
    }
}

impl DisplaySink for RecordingDisplay {
    fn show(&mut self, frame: &Frame) {
        if let Ok(mut frames) = self.frames.lock() {
            frames.push(frame.clone());
        }
    }

    fn notice(&mut self, message: &str) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(message.to_string());
        }
    }
}
