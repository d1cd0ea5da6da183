use serde::{Deserialize, Serialize};

use crate::{model::extinf::ExtInf, utils};

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct TrackRef {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>, // in seconds
}

impl TrackRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_duration(mut self, duration: u64) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_metadata(mut self, metadata: ExtInf) -> Self {
        self.title = metadata.title;
        self.duration = metadata.duration;
        self
    }

    /// The title as it's written to and read from an `#EXTINF` line:
    /// trimmed, with blank titles treated as missing.
    pub fn normalized_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
    }

    pub fn has_metadata(&self) -> bool {
        self.normalized_title().is_some() || self.duration.is_some()
    }

    /// The title if there is one, otherwise the stem of the file the uri points to.
    pub fn name(&self) -> String {
        self.title
            .clone()
            .or_else(|| utils::stem_from_uri(&self.uri))
            .unwrap_or_else(|| self.uri.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names() {
        let track = TrackRef::new("file:///music/song1.mp3");
        assert_eq!(track.name(), "song1");
        assert_eq!(track.with_title("Song #1").name(), "Song #1");
        assert_eq!(
            TrackRef::new("http://example.com/foo%20bar.mp3").name(),
            "foo bar"
        );
        assert_eq!(TrackRef::new("spotify:track:abc").name(), "spotify:track:abc");
    }

    #[test]
    fn metadata() {
        let track = TrackRef::new("file:///a.mp3");
        assert!(!track.has_metadata());
        let track = track.with_metadata(ExtInf {
            duration: Some(60),
            title: None,
        });
        assert!(track.has_metadata());
        assert_eq!(track.duration, Some(60));
        assert_eq!(track.title, None);

        let blank = TrackRef::new("file:///a.mp3").with_title("  ");
        assert_eq!(blank.normalized_title(), None);
        assert!(!blank.has_metadata());
        let padded = TrackRef::new("file:///a.mp3").with_title(" padded ");
        assert_eq!(padded.normalized_title(), Some("padded"));
    }

    #[test]
    fn json_skips_missing_fields() {
        let track = TrackRef::new("file:///a.mp3").with_duration(5);
        assert_eq!(
            serde_json::to_string(&track).unwrap(),
            r#"{"uri":"file:///a.mp3","duration":5}"#
        );
        let parsed: TrackRef = serde_json::from_str(r#"{"uri":"file:///a.mp3"}"#).unwrap();
        assert_eq!(parsed, TrackRef::new("file:///a.mp3"));
    }
}
