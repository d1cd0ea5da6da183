use std::path::Path;

use crate::{config::ParserConfig, encoder, model::track::TrackRef, parsers};

/// Tracks read from one playlist file, in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Playlist {
    pub tracks: Vec<TrackRef>,
    /// Whether an `#EXTM3U` header was seen.
    pub extended: bool,
    /// Lines that named a location but couldn't be turned into a track.
    pub skipped: usize,
}

impl Playlist {
    pub fn from_file(path: impl AsRef<Path>, base_dir: impl AsRef<Path>) -> Self {
        Self::from_file_with(path, base_dir, &ParserConfig::default())
    }

    pub fn from_file_with(
        path: impl AsRef<Path>,
        base_dir: impl AsRef<Path>,
        config: &ParserConfig,
    ) -> Self {
        parsers::m3u::parse(path.as_ref(), base_dir.as_ref(), config)
    }

    pub fn inner(&self) -> &[TrackRef] {
        &self.tracks
    }

    pub fn into_inner(self) -> Vec<TrackRef> {
        self.tracks
    }

    pub fn to_m3u(&self) -> String {
        encoder::encode_m3u(&self.tracks)
    }
}
