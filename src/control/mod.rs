//! Control surface module
//!
//! This module turns lines typed on stdin into session commands.

pub mod commands;
pub mod reader;

// Re-export main types and functions
pub use commands::{parse_line, Command};
pub use reader::{read_commands, spawn_stdin_reader};
