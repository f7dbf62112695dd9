//! Terminal rendering of countdown frames

use std::io::{self, Write};

use serde::Serialize;
use tracing::warn;

use crate::machine::Frame;

/// Receives every frame the machine produces
pub trait DisplaySink: Send {
    fn show(&mut self, frame: &Frame);

    /// A one-off message for the user, such as a refused command
    fn notice(&mut self, message: &str);
}

impl<T: DisplaySink + ?Sized> DisplaySink for Box<T> {
    fn show(&mut self, frame: &Frame) {
        (**self).show(frame)
    }

    fn notice(&mut self, message: &str) {
        (**self).notice(message)
    }
}

/// Output format of the terminal display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct Notice<'a> {
    notice: &'a str,
}

/// Render a frame as one output line (without the newline)
pub fn render_frame(frame: &Frame, format: DisplayFormat) -> Result<String, serde_json::Error> {
    match format {
        DisplayFormat::Text => Ok(format!("{}  {}", frame.time, frame.status)),
        DisplayFormat::Json => serde_json::to_string(frame),
    }
}

/// Render a notice as one output line (without the newline)
pub fn render_notice(message: &str, format: DisplayFormat) -> Result<String, serde_json::Error> {
    match format {
        DisplayFormat::Text => Ok(format!("! {}", message)),
        DisplayFormat::Json => serde_json::to_string(&Notice { notice: message }),
    }
}

/// Line-per-frame display writing to any `Write`, stdout by default
#[derive(Debug)]
pub struct TerminalDisplay<W = io::Stdout> {
    out: W,
    format: DisplayFormat,
}

impl TerminalDisplay<io::Stdout> {
    pub fn stdout(format: DisplayFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, format: DisplayFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: Result<String, serde_json::Error>) {
        let result = line
            .map_err(io::Error::from)
            .and_then(|line| writeln!(self.out, "{}", line))
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!("Failed to write to display: {}", e);
        }
    }
}

impl<W: Write + Send> DisplaySink for TerminalDisplay<W> {
    fn show(&mut self, frame: &Frame) {
        self.write_line(render_frame(frame, self.format));
    }

    fn notice(&mut self, message: &str) {
        self.write_line(render_notice(message, self.format));
    }
}
