//! Moving a single file into place.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::Error;
use crate::model::MoveOutcome;

/// Reason used when the source already sits at its target.
const ALREADY_IN_PLACE: &str = "Already in place";

/// Moves `source` to `target`, creating missing parent directories.
///
/// An existing file at `target` is overwritten (last write wins) and the
/// outcome is reported as `Replaced`. Failures are returned as a `Failed`
/// outcome rather than an error, so a batch can carry on.
pub fn move_file(source: &Path, target: &Path) -> MoveOutcome {
    let file = source.file_name().map(Path::new).unwrap_or(source);

    if is_same_file(source, target) {
        debug!("{:?} is already at its target", source);
        return MoveOutcome::skipped(
            source.to_path_buf(),
            format!("{ALREADY_IN_PLACE}: {}", file.display()),
        );
    }

    if let Some(parent) = target.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        let err = Error::from_io(parent, e);
        warn!("Failed to create directory {:?}: {}", parent, err);
        return MoveOutcome::failed(source.to_path_buf(), Some(target.to_path_buf()), err.to_string());
    }

    let replaced = fs::symlink_metadata(target)
        .map(|m| m.is_file())
        .unwrap_or(false);

    match fs::rename(source, target) {
        Ok(()) => {
            debug!("Moved {:?} -> {:?} (replaced: {})", source, target, replaced);
            MoveOutcome::moved(source.to_path_buf(), target.to_path_buf(), replaced)
        }
        Err(e) => {
            let err = Error::from_rename(file, e);
            warn!("Failed to move {:?} -> {:?}: {}", source, target, err);
            MoveOutcome::failed(source.to_path_buf(), Some(target.to_path_buf()), err.to_string())
        }
    }
}

/// True when both paths resolve to the same existing file.
fn is_same_file(source: &Path, target: &Path) -> bool {
    match (fs::canonicalize(source), fs::canonicalize(target)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
