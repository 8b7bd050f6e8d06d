//! Target path computation.

use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::{CleanTags, SortDecision};

/// Builds the `"<song> - <artist> - <album>.mp3"` file name.
fn song_file_name(song: &str, artist: &str, album: &str) -> String {
    format!("{song} - {artist} - {album}.mp3")
}

/// Decides where `source_file` (a bare name inside `source_dir`) belongs.
///
/// Layout is `<dest_root>/<artist>/<album>/<file name>`. Without a song tag
/// the original file name is kept byte for byte, even when it is not valid
/// UTF-8. Collisions are not resolved here.
///
/// Fails with [`Error::PathValue`] when a tag would not form a single
/// path component (e.g. `..` or a value containing a separator).
pub fn plan(
    tags: &CleanTags,
    source_file: &OsStr,
    source_dir: &Path,
    dest_root: &Path,
) -> Result<SortDecision> {
    let source = source_dir.join(source_file);

    let (Some(artist), Some(album)) = (tags.artist.as_deref(), tags.album.as_deref()) else {
        let reason = Error::TagsUnavailable(PathBuf::from(source_file));
        return Ok(SortDecision::Skip(reason.to_string()));
    };

    let file_name: OsString = match tags.song.as_deref() {
        Some(song) => song_file_name(song, artist, album).into(),
        None => source_file.to_os_string(),
    };

    for part in [OsStr::new(artist), OsStr::new(album), file_name.as_os_str()] {
        if !is_single_component(part) {
            return Err(Error::PathValue(source));
        }
    }

    let target = dest_root.join(artist).join(album).join(file_name);
    Ok(SortDecision::Move { source, target })
}

fn is_single_component(part: &OsStr) -> bool {
    let mut components = Path::new(part).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(c)), None) if c == part
    )
}
