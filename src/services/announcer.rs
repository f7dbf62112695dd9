//! Spoken cues and transition chimes through external programs

use std::{io::Write, process::Stdio};
use tokio::process::{Child, Command};
use tracing::{debug, warn};

use crate::{error::AnnounceError, machine::Cue};

/// Best-effort, fire-and-forget announcement sink
pub trait Announcer: Send {
    /// Speak a phrase, interrupting any utterance still in progress
    fn speak(&mut self, phrase: &str);

    /// Play the phase transition chime
    fn chime(&mut self);

    /// Dispatch a machine cue
    fn announce(&mut self, cue: &Cue) {
        match cue {
            Cue::Speak(phrase) => self.speak(phrase),
            Cue::Chime => self.chime(),
        }
    }
}

impl<T: Announcer + ?Sized> Announcer for Box<T> {
    fn speak(&mut self, phrase: &str) {
        (**self).speak(phrase)
    }

    fn chime(&mut self) {
        (**self).chime()
    }
}

/// Announcer that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAnnouncer;

impl Announcer for SilentAnnouncer {
    fn speak(&mut self, _phrase: &str) {}

    fn chime(&mut self) {}
}

/// A program and its leading arguments, split from a shell-style command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl ProgramSpec {
    /// Split a command line such as `espeak-ng -v en-us`
    pub fn parse(command: &str) -> Result<Self, AnnounceError> {
        let mut parts = shlex::split(command).ok_or_else(|| AnnounceError::InvalidQuoting {
            command: command.to_string(),
        })?;
        if parts.is_empty() {
            return Err(AnnounceError::EmptyCommand);
        }
        let program = parts.remove(0);
        Ok(Self {
            program,
            args: parts,
        })
    }

    /// Spawn the program without waiting for it
    fn spawn(&self, extra_arg: Option<&str>, kill_on_drop: bool) -> Result<Child, AnnounceError> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(kill_on_drop);
        if let Some(arg) = extra_arg {
            command.arg(arg);
        }

        command.spawn().map_err(|source| AnnounceError::Spawn {
            program: self.program.clone(),
            source,
        })
    }
}

/// Announcer backed by a speech program and an optional chime player.
///
/// Without a chime program the chime is a terminal bell on stderr.
#[derive(Debug)]
pub struct CommandAnnouncer {
    speech: Option<ProgramSpec>,
    chime: Option<ProgramSpec>,
    utterance: Option<Child>,
}

impl CommandAnnouncer {
    pub fn new(speech: Option<ProgramSpec>, chime: Option<ProgramSpec>) -> Self {
        Self {
            speech,
            chime,
            utterance: None,
        }
    }

    fn interrupt(&mut self) {
        if let Some(mut previous) = self.utterance.take() {
            match previous.try_wait() {
                Ok(Some(_)) => {}
                Ok(None) => {
                    if let Err(e) = previous.start_kill() {
                        debug!("Failed to interrupt utterance: {}", e);
                    }
                }
                Err(e) => debug!("Failed to poll utterance: {}", e),
            }
        }
    }
}

impl Announcer for CommandAnnouncer {
    fn speak(&mut self, phrase: &str) {
        let Some(speech) = self.speech.clone() else {
            return;
        };
        self.interrupt();

        match speech.spawn(Some(phrase), true) {
            Ok(child) => {
                debug!("Speaking {:?}", phrase);
                self.utterance = Some(child);
            }
            Err(e) => warn!("Speech unavailable: {}", e),
        }
    }

    fn chime(&mut self) {
        match &self.chime {
            Some(player) => {
                if let Err(e) = player.spawn(None, false) {
                    warn!("Chime playback failed: {}", e);
                }
            }
            None => {
                let mut stderr = std::io::stderr();
                if let Err(e) = stderr.write_all(b"\x07").and_then(|_| stderr.flush()) {
                    warn!("Terminal bell failed: {}", e);
                }
            }
        }
    }
}
