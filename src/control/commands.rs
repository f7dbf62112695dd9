//! Control line parsing

use clap::{Parser, Subcommand};

use crate::{error::CommandError, state::Field};

/// A user action delivered to the countdown session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start, pause, or reset, depending on the current phase
    Toggle,
    Start,
    Pause,
    Reset,
    /// Change one configuration input
    Set { field: Field, value: String },
    /// Re-render the current frame
    Status,
    Quit,
}

#[derive(Parser)]
#[command(name = "timer", disable_version_flag = true)]
struct ControlLine {
    #[command(subcommand)]
    verb: Verb,
}

#[derive(Subcommand)]
enum Verb {
    /// Start, pause, or reset (also: empty line)
    #[command(alias = "t")]
    Toggle,
    /// Start a workout or resume a paused one
    Start,
    /// Pause the countdown
    Pause,
    /// Return to the preview after a finished workout
    Reset,
    /// Change a configuration input
    Set {
        field: Field,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Show the current time and status
    Status,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

impl From<Verb> for Command {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Toggle => Command::Toggle,
            Verb::Start => Command::Start,
            Verb::Pause => Command::Pause,
            Verb::Reset => Command::Reset,
            Verb::Set { field, value } => Command::Set { field, value },
            Verb::Status => Command::Status,
            Verb::Quit => Command::Quit,
        }
    }
}

/// Parse one line typed on the control surface
pub fn parse_line(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Toggle);
    }

    let mut args = shlex::split(line).ok_or(CommandError::InvalidQuoting)?;
    args.insert(0, "timer".to_string());
    let parsed = ControlLine::try_parse_from(args).map_err(|e| CommandError::Usage(e.to_string()))?;
    Ok(parsed.verb.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_toggles() {
        assert_eq!(parse_line("").unwrap(), Command::Toggle);
        assert_eq!(parse_line("   ").unwrap(), Command::Toggle);
        assert_eq!(parse_line("t").unwrap(), Command::Toggle);
    }

    #[test]
    fn parses_verbs() {
        assert_eq!(parse_line("start").unwrap(), Command::Start);
        assert_eq!(parse_line("pause").unwrap(), Command::Pause);
        assert_eq!(parse_line("reset").unwrap(), Command::Reset);
        assert_eq!(parse_line("status").unwrap(), Command::Status);
        assert_eq!(parse_line("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn parses_set_with_raw_value() {
        assert_eq!(
            parse_line("set round-rest 45").unwrap(),
            Command::Set {
                field: Field::RoundRest,
                value: "45".to_string()
            }
        );
        assert_eq!(
            parse_line("set work -5").unwrap(),
            Command::Set {
                field: Field::Work,
                value: "-5".to_string()
            }
        );
        assert_eq!(
            parse_line("set rounds 'three'").unwrap(),
            Command::Set {
                field: Field::Rounds,
                value: "three".to_string()
            }
        );
    }

    #[test]
    fn rejects_bad_lines() {
        assert!(matches!(parse_line("jump"), Err(CommandError::Usage(_))));
        assert!(matches!(parse_line("set speed 3"), Err(CommandError::Usage(_))));
        assert!(matches!(parse_line("set work"), Err(CommandError::Usage(_))));
        assert!(matches!(parse_line("set work \"30"), Err(CommandError::InvalidQuoting)));
    }
}
