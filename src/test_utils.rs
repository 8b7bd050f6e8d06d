//! Test utilities and fixtures for sorter tests.
//!
//! Most tests get their tags from [`FakeTagReader`], keyed by file name.
//! [`write_tagged_mp3`] produces a small but real MPEG file for tests that go
//! through lofty.
//!
//! # Example
//!
//! ```ignore
//! let reader = FakeTagReader::default().with("a.mp3", raw_tags(Some("Who"), Some("X"), None));
//! let (dir, src, dst) = sort_dirs();
//! touch(&src, "a.mp3");
//! ```

use lofty::config::WriteOptions;
use lofty::id3::v1::Id3v1Tag;
use lofty::id3::v2::Id3v2Tag;
use lofty::tag::{Accessor, TagExt};
use std::cell::Cell;
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::error::{Error, Result};
use crate::metadata::TagReader;
use crate::model::RawTags;

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, no padding
const MPEG_FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];
const MPEG_FRAME_LEN: usize = 417;

/// Tag reader that answers from an in-memory table.
///
/// Files with no entry read as untagged. Files registered with
/// [`FakeTagReader::deny`] fail with a permission error. Every call is
/// counted, see [`FakeTagReader::read_count`].
#[derive(Debug, Default)]
pub struct FakeTagReader {
    tags: HashMap<OsString, RawTags>,
    denied: Vec<OsString>,
    reads: Cell<usize>,
}

impl FakeTagReader {
    pub fn with(mut self, file_name: impl AsRef<OsStr>, tags: RawTags) -> Self {
        self.tags.insert(file_name.as_ref().to_os_string(), tags);
        self
    }

    pub fn deny(mut self, file_name: impl AsRef<OsStr>) -> Self {
        self.denied.push(file_name.as_ref().to_os_string());
        self
    }

    /// Number of times [`TagReader::read`] was called.
    pub fn read_count(&self) -> usize {
        self.reads.get()
    }
}

impl TagReader for FakeTagReader {
    fn read(&self, path: &Path) -> Result<Option<RawTags>> {
        self.reads.set(self.reads.get() + 1);
        let name = path.file_name().unwrap_or_default();
        if self.denied.iter().any(|d| d == name) {
            return Err(Error::PermissionDenied(PathBuf::from(name)));
        }
        Ok(self.tags.get(name).cloned())
    }
}

/// Shorthand for building [`RawTags`].
pub fn raw_tags(artist: Option<&str>, album: Option<&str>, song: Option<&str>) -> RawTags {
    RawTags {
        artist: artist.map(String::from),
        album: album.map(String::from),
        song: song.map(String::from),
    }
}

/// Creates a temp dir with `src` and `dst` subdirectories.
///
/// Keep the returned `TempDir` alive for the duration of the test.
pub fn sort_dirs() -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let src = dir.path().join("src");
    let dst = dir.path().join("dst");
    std::fs::create_dir_all(&src).expect("Failed to create src dir");
    (dir, src, dst)
}

/// Writes a placeholder file whose content is its own name.
pub fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, name).expect("Failed to write fixture file");
    path
}

/// Writes a short MPEG stream with an optional ID3v2 tag in front and an
/// optional ID3v1 tag at the end.
pub fn write_tagged_mp3(
    path: &Path,
    id3v2: Option<&RawTags>,
    id3v1: Option<&RawTags>,
) -> PathBuf {
    let mut bytes = Vec::new();

    if let Some(tags) = id3v2 {
        let mut tag = Id3v2Tag::default();
        fill_tag(&mut tag, tags);
        tag.dump_to(&mut bytes, WriteOptions::default())
            .expect("Failed to encode ID3v2 tag");
    }

    // Two frames at least, lofty checks the sync of the next one
    for _ in 0..4 {
        bytes.extend_from_slice(&MPEG_FRAME_HEADER);
        bytes.resize(bytes.len() + MPEG_FRAME_LEN - MPEG_FRAME_HEADER.len(), 0);
    }

    if let Some(tags) = id3v1 {
        let mut tag = Id3v1Tag::default();
        fill_tag(&mut tag, tags);
        tag.dump_to(&mut bytes, WriteOptions::default())
            .expect("Failed to encode ID3v1 tag");
    }

    std::fs::write(path, bytes).expect("Failed to write MP3 fixture");
    path.to_path_buf()
}

fn fill_tag(tag: &mut impl Accessor, tags: &RawTags) {
    if let Some(artist) = &tags.artist {
        tag.set_artist(artist.clone());
    }
    if let Some(album) = &tags.album {
        tag.set_album(album.clone());
    }
    if let Some(song) = &tags.song {
        tag.set_title(song.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_reader_serves_registered_tags() {
        let reader = FakeTagReader::default().with("a.mp3", raw_tags(Some("A"), None, None));

        let tags = reader.read(Path::new("/any/dir/a.mp3")).unwrap();
        assert_eq!(tags, Some(raw_tags(Some("A"), None, None)));

        assert_eq!(reader.read(Path::new("/any/dir/other.mp3")).unwrap(), None);
    }

    #[test]
    fn test_fake_reader_counts_reads() {
        let reader = FakeTagReader::default().deny("locked.mp3");
        assert_eq!(reader.read_count(), 0);

        let _ = reader.read(Path::new("a.mp3"));
        let _ = reader.read(Path::new("locked.mp3"));

        assert_eq!(reader.read_count(), 2);
    }

    #[test]
    fn test_fake_reader_denies() {
        let reader = FakeTagReader::default().deny("locked.mp3");
        let result = reader.read(Path::new("locked.mp3"));
        assert!(matches!(result, Err(Error::PermissionDenied(_))));
    }

    #[test]
    fn test_sort_dirs_leaves_dst_missing() {
        let (_dir, src, dst) = sort_dirs();
        assert!(src.is_dir());
        assert!(!dst.exists());
    }
}
