//! Background tasks module
//!
//! This module contains the countdown session and the ticker that drives it.

pub mod countdown;
pub mod scheduler;

// Re-export main types and functions
pub use countdown::{countdown_task, Session};
pub use scheduler::Ticker;
