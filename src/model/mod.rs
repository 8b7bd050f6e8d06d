//! Core data types for a sort run.
//!
//! Tags flow through two shapes: [`RawTags`] as read from the file and
//! [`CleanTags`] after normalization. Planning turns clean tags into a
//! [`SortDecision`], and every processed file ends as exactly one
//! [`MoveOutcome`].

use serde::Serialize;
use std::path::PathBuf;

/// Tag values as returned by the tag reader, possibly padded or containing
/// control characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTags {
    pub artist: Option<String>,
    pub album: Option<String>,
    pub song: Option<String>,
}

/// Normalized tags. A field is either a non-empty trimmed string or `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanTags {
    pub artist: Option<String>,
    pub album: Option<String>,
    pub song: Option<String>,
}

/// What should happen to a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortDecision {
    /// Move `source` to `target`
    Move { source: PathBuf, target: PathBuf },
    /// Leave the file where it is
    Skip(String),
}

/// Terminal state of a file after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveStatus {
    Moved,
    /// Moved over an existing file at the target
    Replaced,
    Skipped,
    Failed,
    /// Dry run: the file would have been moved
    Planned,
}

/// User-visible result for one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub source: PathBuf,
    pub target: Option<PathBuf>,
    pub status: MoveStatus,
    pub detail: String,
}

impl MoveOutcome {
    pub fn moved(source: PathBuf, target: PathBuf, replaced: bool) -> Self {
        let (status, detail) = if replaced {
            (MoveStatus::Replaced, "replaced existing file".to_string())
        } else {
            (MoveStatus::Moved, String::new())
        };
        Self {
            source,
            target: Some(target),
            status,
            detail,
        }
    }

    pub fn planned(source: PathBuf, target: PathBuf) -> Self {
        Self {
            source,
            target: Some(target),
            status: MoveStatus::Planned,
            detail: String::new(),
        }
    }

    pub fn skipped(source: PathBuf, reason: impl Into<String>) -> Self {
        Self {
            source,
            target: None,
            status: MoveStatus::Skipped,
            detail: reason.into(),
        }
    }

    pub fn failed(source: PathBuf, target: Option<PathBuf>, detail: impl Into<String>) -> Self {
        Self {
            source,
            target,
            status: MoveStatus::Failed,
            detail: detail.into(),
        }
    }

    /// True if the file now lives at its target.
    pub fn is_success(&self) -> bool {
        matches!(self.status, MoveStatus::Moved | MoveStatus::Replaced)
    }
}

/// Aggregate of every outcome produced by a run, in enumeration order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SortReport {
    pub outcomes: Vec<MoveOutcome>,
}

/// Per-status totals of a [`SortReport`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortSummary {
    pub moved: usize,
    pub replaced: usize,
    pub skipped: usize,
    pub failed: usize,
    pub planned: usize,
}

impl SortReport {
    pub fn push(&mut self, outcome: MoveOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn summary(&self) -> SortSummary {
        let mut summary = SortSummary::default();
        for outcome in &self.outcomes {
            match outcome.status {
                MoveStatus::Moved => summary.moved += 1,
                MoveStatus::Replaced => summary.replaced += 1,
                MoveStatus::Skipped => summary.skipped += 1,
                MoveStatus::Failed => summary.failed += 1,
                MoveStatus::Planned => summary.planned += 1,
            }
        }
        summary
    }
}
