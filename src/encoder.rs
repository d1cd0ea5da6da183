use anyhow::Result;
use std::{
    fs::File,
    io::{BufWriter, prelude::*},
    path::Path,
};

use crate::{constants, model::track::TrackRef, utils};

/// Local files are written as absolute paths, anything else as the uri itself.
/// So are paths that aren't valid UTF-8, the uri keeps their bytes intact.
fn location(track: &TrackRef) -> String {
    utils::uri_to_path(&track.uri)
        .and_then(|path| path.to_str().map(String::from))
        .unwrap_or_else(|| track.uri.clone())
}

fn extinf(track: &TrackRef) -> String {
    let duration = track
        .duration
        .map_or(constants::UNKNOWN_DURATION.to_string(), |secs| {
            secs.to_string()
        });
    // a line break would end the directive early
    let title = track
        .normalized_title()
        .unwrap_or_default()
        .replace(['\r', '\n'], " ");

    format!("{}{},{}", constants::EXTINF_PREFIX, duration, title)
}

/// Renders `tracks` as playlist text. The `#EXTM3U` header and the `#EXTINF`
/// directives are only written when some track has a title or a duration.
pub fn encode_m3u(tracks: &[TrackRef]) -> String {
    let mut content = String::new();
    if tracks.iter().any(TrackRef::has_metadata) {
        content.push_str(constants::EXTM3U_HEADER);
        content.push('\n');
    }
    for track in tracks {
        if track.has_metadata() {
            content.push_str(&extinf(track));
            content.push('\n');
        }
        content.push_str(&location(track));
        content.push('\n');
    }

    content
}

pub fn write_m3u(path: impl AsRef<Path>, tracks: &[TrackRef]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    writer.write_all(encode_m3u(tracks).as_bytes())?;
    writer.flush()?;

    Ok(())
}
