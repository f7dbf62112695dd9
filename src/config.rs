//! Configuration and CLI argument handling

use clap::Parser;

use crate::{
    error::AnnounceError,
    machine::MachineOptions,
    services::{Announcer, CommandAnnouncer, DisplayFormat, ProgramSpec, SilentAnnouncer},
    state::InputPanel,
};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "interval-timer")]
#[command(about = "A terminal interval-workout countdown timer with spoken phase cues")]
#[command(version)]
pub struct Config {
    /// Work phase duration in seconds
    #[arg(short, long, default_value = "30", allow_hyphen_values = true)]
    pub work: String,

    /// Rest duration between exercises in seconds
    #[arg(short, long, default_value = "10", allow_hyphen_values = true)]
    pub rest: String,

    /// Rest duration between rounds in seconds
    #[arg(short = 'R', long, default_value = "10", allow_hyphen_values = true)]
    pub round_rest: String,

    /// Exercises per round
    #[arg(short, long, default_value = "1", allow_hyphen_values = true)]
    pub exercises: String,

    /// Number of rounds
    #[arg(short = 'n', long, default_value = "1", allow_hyphen_values = true)]
    pub rounds: String,

    /// Run a round-rest length "GET READY" phase before the first round
    #[arg(long)]
    pub prepare: bool,

    /// Announce the midpoint of each work phase
    #[arg(long)]
    pub halfway: bool,

    /// Speech program; the phrase is appended as the last argument.
    /// An empty value disables speech.
    #[arg(long, default_value = "espeak-ng -v en-us")]
    pub speech_command: String,

    /// Chime program; defaults to the terminal bell
    #[arg(long)]
    pub chime_command: Option<String>,

    /// Disable speech and chimes entirely
    #[arg(long)]
    pub mute: bool,

    /// Emit display frames as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// The five initial inputs, still as raw text
    pub fn inputs(&self) -> InputPanel {
        InputPanel::new(
            self.work.as_str(),
            self.rest.as_str(),
            self.round_rest.as_str(),
            self.exercises.as_str(),
            self.rounds.as_str(),
        )
    }

    pub fn machine_options(&self) -> MachineOptions {
        MachineOptions {
            prepare: self.prepare,
            halfway_cue: self.halfway,
        }
    }

    pub fn display_format(&self) -> DisplayFormat {
        if self.json {
            DisplayFormat::Json
        } else {
            DisplayFormat::Text
        }
    }

    /// Build the announcer described by the speech/chime flags
    pub fn announcer(&self) -> Result<Box<dyn Announcer>, AnnounceError> {
        if self.mute {
            return Ok(Box::new(SilentAnnouncer));
        }

        let speech = if self.speech_command.trim().is_empty() {
            None
        } else {
            Some(ProgramSpec::parse(&self.speech_command)?)
        };
        let chime = self
            .chime_command
            .as_deref()
            .map(ProgramSpec::parse)
            .transpose()?;

        Ok(Box::new(CommandAnnouncer::new(speech, chime)))
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
