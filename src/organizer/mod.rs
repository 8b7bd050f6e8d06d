//! File organization utilities.
//!
//! Turns tags into an `<Artist>/<Album>/<Song> - <Artist> - <Album>.mp3`
//! layout and moves files into it.
//!
//! # Features
//! - Tag normalization (line breaks, NUL padding, edge spaces)
//! - Planning without touching the filesystem
//! - Moves with last-write-wins replacement of existing targets

mod mover;
mod normalize;
mod planner;

pub use mover::move_file;
pub use normalize::{clean, normalize};
pub use planner::plan;
