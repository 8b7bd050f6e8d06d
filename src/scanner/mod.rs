use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Lists the MP3 files directly inside `dir` (no recursion).
///
/// Matching is on the `.mp3` suffix, case-sensitive unless `ignore_case` is
/// set. Entries come back sorted by file name.
pub fn scan(dir: &Path, ignore_case: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            match e.into_io_error() {
                Some(io) => Error::from_io(path, io),
                None => Error::NotFound(path),
            }
        })?;

        // Symlinks count when they point at a regular file
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if is_file && is_mp3_name(entry.file_name(), ignore_case) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Suffix check on the raw name bytes, so names that are not valid UTF-8
/// still match.
fn is_mp3_name(name: &OsStr, ignore_case: bool) -> bool {
    let bytes = name.as_encoded_bytes();
    let Some(suffix) = bytes.len().checked_sub(4).map(|start| &bytes[start..]) else {
        return false;
    };
    if ignore_case {
        suffix.eq_ignore_ascii_case(b".mp3")
    } else {
        suffix == b".mp3"
    }
}
