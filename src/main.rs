//! mp3-sorter - sort a flat directory of MP3 files into
//! `<dst>/<Artist>/<Album>/<Song> - <Artist> - <Album>.mp3`.
//!
//! Files without an artist or album tag are left where they are. One bad
//! file never stops the batch.

pub mod cli;
pub mod config;
pub mod error;
pub mod metadata;
pub mod model;
pub mod organizer;
pub mod scanner;
pub mod sorter;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, filter::Directive, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so stdout stays one line per file
    let level: Directive = if args.verbose {
        "mp3_sorter=debug".parse()?
    } else {
        "mp3_sorter=warn".parse()?
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level))
        .init();

    cli::run_command(&args)
}
