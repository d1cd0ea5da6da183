//! Reading and writing M3U/M3U8 playlists.
//!
//! A playlist is read into an ordered list of [`TrackRef`]s, each holding a uri
//! (local entries become `file://` uris) and, in extended playlists, the title
//! and duration from the preceding `#EXTINF` line. Reading never fails: a missing
//! file is an empty playlist and entries that can't be resolved are skipped.

pub mod config;
pub mod constants;
pub mod encoder;
pub mod error;
pub mod model;
pub mod parsers;
pub mod utils;

use std::path::Path;

pub use config::ParserConfig;
pub use encoder::{encode_m3u, write_m3u};
pub use model::{playlist::Playlist, track::TrackRef};

/// Tracks listed in the playlist at `path`, relative entries resolved against `base_dir`.
pub fn parse_m3u(path: impl AsRef<Path>, base_dir: impl AsRef<Path>) -> Vec<TrackRef> {
    Playlist::from_file(path, base_dir).into_inner()
}

/// Like [`parse_m3u`], but keeps the header flag and the number of skipped entries.
pub fn parse_m3u_with(
    path: impl AsRef<Path>,
    base_dir: impl AsRef<Path>,
    config: &ParserConfig,
) -> Playlist {
    Playlist::from_file_with(path, base_dir, config)
}
