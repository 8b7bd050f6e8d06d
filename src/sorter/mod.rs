//! Batch sorting of a flat MP3 directory.
//!
//! Each file goes through the same sequence exactly once:
//!
//! 1. read/write access check
//! 2. tag read ([`TagReader`])
//! 3. normalization and planning
//! 4. move (or, in a dry run, just the plan)
//!
//! and ends in one terminal [`MoveStatus`]. Per-file failures become
//! outcomes; only problems with the source or destination directory abort
//! the run, and they do so before any file is touched.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::SortConfig;
use crate::error::{Error, Result};
use crate::metadata::TagReader;
use crate::model::{MoveOutcome, MoveStatus, SortDecision, SortReport};
use crate::organizer;
use crate::scanner;

/// Sorts the files of one source directory into a destination tree.
pub struct Sorter<R> {
    config: SortConfig,
    reader: R,
}

impl<R: TagReader> Sorter<R> {
    pub fn new(config: SortConfig, reader: R) -> Self {
        Self { config, reader }
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Runs the whole batch and collects every outcome.
    pub fn run(&self) -> Result<SortReport> {
        self.run_with(|_| {})
    }

    /// Runs the whole batch, handing each outcome to `on_outcome` as soon as
    /// it is produced (in enumeration order).
    pub fn run_with(&self, mut on_outcome: impl FnMut(&MoveOutcome)) -> Result<SortReport> {
        self.prepare_dirs()?;

        let files = scanner::scan(&self.config.src_dir, self.config.ignore_case)?;
        info!(
            "Sorting {} file(s) from {:?} into {:?}",
            files.len(),
            self.config.src_dir,
            self.config.dst_dir
        );

        let mut report = SortReport::default();
        for path in files {
            let outcome = self.sort_file(&path);
            on_outcome(&outcome);
            report.push(outcome);
        }

        let summary = report.summary();
        info!(
            "Done: {} moved, {} replaced, {} skipped, {} failed",
            summary.moved, summary.replaced, summary.skipped, summary.failed
        );
        Ok(report)
    }

    /// Makes sure the destination exists (unless dry-running) and the
    /// source is a readable directory.
    fn prepare_dirs(&self) -> Result<()> {
        let SortConfig {
            src_dir, dst_dir, ..
        } = &self.config;

        if self.config.dry_run {
            if dst_dir.exists() && !dst_dir.is_dir() {
                let e = io::Error::from(io::ErrorKind::NotADirectory);
                return Err(Error::from_io(dst_dir, e));
            }
        } else {
            fs::create_dir_all(dst_dir).map_err(|e| Error::from_io(dst_dir, e))?;
        }

        let meta = fs::metadata(src_dir).map_err(|e| Error::from_io(src_dir, e))?;
        if !meta.is_dir() {
            return Err(Error::NotFound(src_dir.clone()));
        }
        fs::read_dir(src_dir).map_err(|e| Error::from_io(src_dir, e))?;

        Ok(())
    }

    /// Processes a single file. Never fails: every problem becomes a
    /// `Skipped` or `Failed` outcome.
    pub fn sort_file(&self, path: &Path) -> MoveOutcome {
        let source = path.to_path_buf();
        let file_name = path.file_name().unwrap_or_default();
        let display_name = Path::new(file_name);

        if let Err(e) = OpenOptions::new().read(true).write(true).open(path) {
            let err = Error::from_io(display_name, e);
            warn!("Cannot open {:?} for writing: {}", path, err);
            return MoveOutcome::failed(source, None, err.to_string());
        }

        let raw = match self.reader.read(path) {
            Ok(Some(raw)) => raw,
            Ok(None) => Default::default(),
            Err(e) => {
                let err = match e {
                    Error::PermissionDenied(_) => Error::PermissionDenied(display_name.into()),
                    other => other,
                };
                warn!("Cannot read tags from {:?}: {}", path, err);
                return MoveOutcome::failed(source, None, err.to_string());
            }
        };

        let tags = organizer::clean(&raw);
        let decision = match organizer::plan(
            &tags,
            file_name,
            &self.config.src_dir,
            &self.config.dst_dir,
        ) {
            Ok(decision) => decision,
            Err(e) => {
                let err = match e {
                    Error::PathValue(_) => Error::PathValue(display_name.into()),
                    other => other,
                };
                warn!("Cannot plan {:?}: {}", path, err);
                return MoveOutcome::failed(source, None, err.to_string());
            }
        };

        match decision {
            SortDecision::Skip(reason) => {
                debug!("Skipping {:?}: {}", path, reason);
                MoveOutcome::skipped(source, reason)
            }
            SortDecision::Move { source, target } if self.config.dry_run => {
                debug!("Would move {:?} -> {:?}", source, target);
                MoveOutcome::planned(source, target)
            }
            SortDecision::Move { source, target } => {
                let outcome = organizer::move_file(&source, &target);
                if outcome.status == MoveStatus::Replaced {
                    info!("Replaced existing file at {:?}", target);
                }
                outcome
            }
        }
    }
}
