//! Tag string cleanup.

use crate::model::{CleanTags, RawTags};

/// Cleans a raw tag value.
///
/// Line feeds and carriage returns are removed everywhere, trailing NUL
/// padding and spaces are stripped, then leading spaces. A value that ends up
/// empty is treated as absent.
pub fn normalize(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    let without_breaks: String = raw.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
    let cleaned = without_breaks
        .trim_end_matches(['\0', ' '])
        .trim_start_matches(' ');

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Normalizes every field of a raw tag set.
pub fn clean(raw: &RawTags) -> CleanTags {
    CleanTags {
        artist: normalize(raw.artist.as_deref()),
        album: normalize(raw.album.as_deref()),
        song: normalize(raw.song.as_deref()),
    }
}
