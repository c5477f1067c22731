//! wtd — start a terminal in the current directory.
//!
//! Looks the terminal up (App Paths on Windows, `PATH` elsewhere), forwards
//! the caller's arguments with a `-d "<dir>"` clause appended, and spawns it
//! without waiting.

pub mod args;
pub mod config;
pub mod launch;
pub mod logging;
