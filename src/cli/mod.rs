//! Command-line interface for tunesphere.
//!
//! This module provides CLI commands for inspecting and exporting the music
//! catalog without launching the GUI.

mod commands;

pub use commands::{Cli, Commands, run_command};
