//! External collaborator module
//!
//! This module contains the announcer (speech and chime) and the display
//! that the countdown session drives.

pub mod announcer;
pub mod display;
pub mod testing;

// Re-export main types
pub use announcer::{Announcer, CommandAnnouncer, ProgramSpec, SilentAnnouncer};
pub use display::{DisplayFormat, DisplaySink, TerminalDisplay};
