//! Audio file tag reading.
//!
//! Uses the lofty crate for tag access. Only the three fields the sorter
//! cares about are read: artist, album and title (the "song").
//!
//! The [`TagReader`] trait is the seam between the sorter and the tag
//! library, so the batch logic can be driven by a fake reader in tests.

use lofty::config::ParseOptions;
use lofty::file::TaggedFileExt;
use lofty::probe::Probe;
use lofty::tag::{Accessor, TagType};
use std::borrow::Cow;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::RawTags;

/// Reads artist/album/song tags from a file.
pub trait TagReader {
    /// Returns `Ok(None)` when the file carries no readable tags.
    ///
    /// Errors are reserved for failures to open the file at all, most
    /// importantly [`Error::PermissionDenied`].
    fn read(&self, path: &Path) -> Result<Option<RawTags>>;
}

impl<R: TagReader + ?Sized> TagReader for &R {
    fn read(&self, path: &Path) -> Result<Option<RawTags>> {
        (**self).read(path)
    }
}

/// Production reader backed by lofty.
///
/// Prefers the ID3v2 tag and falls back to whatever tag the file has.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyTagReader;

impl TagReader for LoftyTagReader {
    fn read(&self, path: &Path) -> Result<Option<RawTags>> {
        let file = File::open(path).map_err(|e| Error::from_io(path, e))?;

        let probe = Probe::new(BufReader::new(file))
            .options(ParseOptions::new().read_properties(false))
            .guess_file_type()
            .map_err(|e| Error::from_io(path, e))?;

        let tagged_file = match probe.read() {
            Ok(f) => f,
            Err(e) => {
                debug!("No readable tags in {:?}: {}", path, e);
                return Ok(None);
            }
        };

        let tag = tagged_file
            .tag(TagType::Id3v2)
            .or_else(|| tagged_file.primary_tag())
            .or_else(|| tagged_file.first_tag());

        let Some(tag) = tag else {
            debug!("{:?} has no tags", path);
            return Ok(None);
        };

        Ok(Some(RawTags {
            artist: tag.artist().map(Cow::into_owned),
            album: tag.album().map(Cow::into_owned),
            song: tag.title().map(Cow::into_owned),
        }))
    }
}
