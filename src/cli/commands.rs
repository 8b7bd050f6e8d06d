//! CLI definition and the sort command handler.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

use crate::config::SortConfig;
use crate::metadata::LoftyTagReader;
use crate::model::{MoveOutcome, MoveStatus, SortSummary};
use crate::sorter::Sorter;

/// Sort mp3 files artist -> album -> song
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source directory
    #[arg(short, long, default_value = ".")]
    pub src_dir: PathBuf,

    /// Target directory
    #[arg(short, long, default_value = ".")]
    pub dst_dir: PathBuf,

    /// Dry run - show what would be done without actually moving files
    #[arg(long)]
    pub dry_run: bool,

    /// Also match .MP3, .Mp3, ...
    #[arg(long)]
    pub ignore_case: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Run the sort described by the parsed arguments.
///
/// Per-file problems are printed and do not fail the command; an error is
/// returned only when the source or destination directory is unusable.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = SortConfig::new(&cli.src_dir, &cli.dst_dir)
        .context("Failed to resolve source/destination directories")?
        .with_dry_run(cli.dry_run)
        .with_ignore_case(cli.ignore_case);
    debug!("Config: {:?}", config);

    let sorter = Sorter::new(config, LoftyTagReader);
    if sorter.config().dry_run && cli.format == OutputFormat::Text {
        println!("[DRY RUN MODE - No files will be moved]\n");
    }

    let stdout = std::io::stdout();
    let report = sorter
        .run_with(|outcome| {
            let mut out = stdout.lock();
            // Output errors (closed pipe) are not worth aborting the batch for
            let _ = writeln!(out, "{}", render_outcome(outcome, cli.format));
        })
        .with_context(|| {
            format!(
                "Cannot sort {:?} into {:?}",
                sorter.config().src_dir,
                sorter.config().dst_dir
            )
        })?;

    let dry_run = sorter.config().dry_run;
    println!("{}", render_summary(&report.summary(), cli.format, dry_run));
    Ok(())
}

/// One output line for a processed file.
fn render_outcome(outcome: &MoveOutcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(outcome).unwrap_or_default(),
        OutputFormat::Text => {
            let name = outcome
                .source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| outcome.source.display().to_string());
            match (&outcome.status, &outcome.target) {
                (MoveStatus::Moved | MoveStatus::Replaced | MoveStatus::Planned, Some(target)) => {
                    let mut line = format!("{} -> {}", name, target.display());
                    if outcome.status == MoveStatus::Replaced {
                        line.push_str(" (replaced)");
                    }
                    line
                }
                _ => outcome.detail.clone(),
            }
        }
    }
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    summary: &'a SortSummary,
}

fn render_summary(summary: &SortSummary, format: OutputFormat, dry_run: bool) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(&JsonSummary { summary }).unwrap_or_default(),
        OutputFormat::Text if dry_run => format!(
            "\nDry run: {} would move, {} skipped, {} failed",
            summary.planned, summary.skipped, summary.failed
        ),
        OutputFormat::Text => format!(
            "\nCompleted: {} moved, {} replaced, {} skipped, {} failed",
            summary.moved, summary.replaced, summary.skipped, summary.failed
        ),
    }
}
