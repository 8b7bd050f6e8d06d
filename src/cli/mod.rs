//! Command-line interface for mp3-sorter.
//!
//! Parses the source/destination options, runs the sorter and prints one
//! line per processed file.

mod commands;

pub use commands::{Cli, OutputFormat, run_command};
