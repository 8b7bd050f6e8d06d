//! Run configuration.
//!
//! There is no config file: everything comes from the command line and is
//! resolved once into a [`SortConfig`] that is passed explicitly to the
//! sorter. Paths are made absolute up front so the process working
//! directory never matters after startup.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Settings for one sort run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    /// Flat directory holding the MP3 files to sort
    pub src_dir: PathBuf,

    /// Root of the artist/album hierarchy
    pub dst_dir: PathBuf,

    /// Plan only, touch nothing
    pub dry_run: bool,

    /// Match `.mp3` regardless of case
    pub ignore_case: bool,
}

impl SortConfig {
    /// Builds a config, resolving both directories to absolute paths.
    pub fn new(src_dir: &Path, dst_dir: &Path) -> Result<Self> {
        Ok(Self {
            src_dir: absolute(src_dir)?,
            dst_dir: absolute(dst_dir)?,
            dry_run: false,
            ignore_case: false,
        })
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| Error::from_io(path, e))
}
