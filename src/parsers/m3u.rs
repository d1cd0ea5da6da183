use anyhow::Result;
use std::{fs, path::Path, str};

use crate::{
    config::ParserConfig,
    constants,
    error::M3uError,
    model::{
        extinf::{ExtInf, PendingMetadata},
        playlist::Playlist,
        track::TrackRef,
    },
    utils,
};

#[derive(Debug, PartialEq)]
enum Line<'a> {
    Empty,
    Header,
    ExtInf(&'a str),
    Comment,
    Location(&'a str),
}

impl<'a> From<&'a str> for Line<'a> {
    fn from(line: &'a str) -> Self {
        if line.is_empty() {
            Self::Empty
        } else if line == constants::EXTM3U_HEADER {
            Self::Header
        } else if line.starts_with(constants::EXTINF_PREFIX) {
            Self::ExtInf(line)
        } else if line.starts_with(constants::COMMENT_PREFIX) {
            Self::Comment
        } else {
            Self::Location(line)
        }
    }
}

/// Splits on `\n`, `\r\n` and lone `\r`. The empty pieces left between
/// `\r` and `\n` are dropped later together with blank lines.
pub fn split_lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    bytes.split(|&b| b == b'\n' || b == b'\r')
}

/// UTF-8 if the bytes are valid UTF-8, Latin-1 otherwise. Never fails.
pub fn decode_line(bytes: &[u8]) -> String {
    match str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

/// Turns a location line into a uri: uris are taken as they are,
/// paths (relative ones resolved against `base_dir`) become `file://` uris.
pub fn resolve_location(location: &str, base_dir: &Path) -> Result<String> {
    if utils::is_uri(location) {
        return Ok(location.to_string());
    }
    let path = Path::new(location);
    if path.is_absolute() {
        utils::path_to_uri(path)
    } else {
        utils::path_to_uri(&base_dir.join(path))
    }
}

fn is_m3u8(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(constants::M3U8_EXT))
}

/// Reads the playlist at `path`. A missing or unreadable file is an empty playlist,
/// entries that can't be resolved are skipped.
pub fn parse(path: &Path, base_dir: &Path, config: &ParserConfig) -> Playlist {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("couldn't read playlist `{}` ({})", path.display(), e);
            return Playlist::default();
        }
    };
    let bytes = bytes.strip_prefix(constants::UTF8_BOM).unwrap_or(&bytes);
    let strict_utf8 = config.strict_m3u8 && is_m3u8(path);

    let mut playlist = Playlist::default();
    let mut pending = PendingMetadata::default();
    // the header only counts on the first non-empty line
    let mut seen_content = false;
    for raw_line in split_lines(bytes) {
        let decoded = if strict_utf8 {
            match str::from_utf8(raw_line) {
                Ok(s) => s.to_string(),
                Err(e) => {
                    let e = M3uError::Encoding(format!("{} in `{}`", e, path.display()));
                    log::warn!("skipping a line ({})", e);
                    // an unreadable location still uses up the pending metadata
                    if !raw_line.trim_ascii_start().starts_with(b"#") {
                        pending.take();
                    }
                    seen_content = true;
                    playlist.skipped += 1;
                    continue;
                }
            }
        } else {
            decode_line(raw_line)
        };

        let line = Line::from(decoded.trim());
        let is_first_line = !seen_content;
        if line != Line::Empty {
            seen_content = true;
        }
        match line {
            Line::Header if is_first_line => playlist.extended = true,
            Line::Empty | Line::Comment | Line::Header => (),
            Line::ExtInf(directive) => match ExtInf::try_from(directive) {
                Ok(metadata) => pending.set(metadata),
                Err(e) => log::warn!("{}", e),
            },
            Line::Location(location) => {
                let metadata = pending.take();
                match resolve_location(location, base_dir) {
                    Ok(uri) => {
                        let mut track = TrackRef::new(uri);
                        if playlist.extended
                            && let Some(metadata) = metadata
                        {
                            track = track.with_metadata(metadata);
                        }
                        playlist.tracks.push(track);
                    }
                    Err(e) => {
                        log::warn!("skipping `{}` ({})", location, e);
                        playlist.skipped += 1;
                    }
                }
            }
        }
    }
    if pending.is_pending() {
        log::debug!("`{}` ends with an unused EXTINF", path.display());
    }
    log::debug!(
        "read {} tracks from `{}` ({} skipped)",
        playlist.tracks.len(),
        path.display(),
        playlist.skipped
    );

    playlist
}
