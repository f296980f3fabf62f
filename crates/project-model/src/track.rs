//! Music tracks and their scene-transition markers.

use serde::{Deserialize, Serialize};

use crate::timecode::{FrameIndex, Timecode, TimecodeError};

/// A music track supplied by the caller. Read-only to the compositor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Display name, used as the sound overlay label.
    pub title: String,

    /// Human-authored scene-transition markers, in authoring order.
    #[serde(default)]
    pub markers: Vec<Marker>,

    /// Streaming preview URL. Preferred sound source.
    #[serde(default)]
    pub preview_url: Option<String>,

    /// Uploaded audio file path. Fallback sound source.
    #[serde(default)]
    pub audio_file: Option<String>,

    /// Track length in seconds, as reported by the media store.
    #[serde(default)]
    pub length: Option<f64>,
}

/// A labeled timestamp on a track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Timecode string, `HH:MM:SS:FF` with `:` or `.` separators.
    pub timestamp: String,

    #[serde(default)]
    pub label: String,
}

/// A marker resolved to an absolute frame offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameMarker {
    pub frame: FrameIndex,
    pub label: String,
}

impl Track {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            markers: vec![],
            preview_url: None,
            audio_file: None,
            length: None,
        }
    }

    /// Builder-style helper to append a marker.
    pub fn with_marker(mut self, timestamp: impl Into<String>, label: impl Into<String>) -> Self {
        self.markers.push(Marker::new(timestamp, label));
        self
    }

    /// The audio source for the sound bed: the preview URL when set and
    /// non-empty, otherwise the audio file.
    pub fn sound_source(&self) -> Option<&str> {
        non_empty(self.preview_url.as_deref()).or_else(|| non_empty(self.audio_file.as_deref()))
    }
}

impl Marker {
    pub fn new(timestamp: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            label: label.into(),
        }
    }

    /// Parse the timestamp.
    pub fn timecode(&self) -> Result<Timecode, TimecodeError> {
        self.timestamp.parse()
    }

    /// Resolve this marker to a frame offset at `fps`.
    pub fn to_frame_marker(&self, fps: u32) -> Result<FrameMarker, TimecodeError> {
        Ok(FrameMarker {
            frame: self.timecode()?.to_frame(fps),
            label: self.label.clone(),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sound_source_prefers_preview() {
        let mut track = Track::new("Song");
        track.preview_url = Some("https://cdn.example/preview.mp3".to_string());
        track.audio_file = Some("tracks/song.mp3".to_string());
        assert_eq!(track.sound_source(), Some("https://cdn.example/preview.mp3"));
    }

    #[test]
    fn test_sound_source_falls_back_to_audio_file() {
        let mut track = Track::new("Song");
        track.audio_file = Some("tracks/song.mp3".to_string());
        assert_eq!(track.sound_source(), Some("tracks/song.mp3"));

        track.preview_url = Some(String::new());
        assert_eq!(track.sound_source(), Some("tracks/song.mp3"));
    }

    #[test]
    fn test_sound_source_missing() {
        let track = Track::new("Silent");
        assert_eq!(track.sound_source(), None);
    }

    #[test]
    fn test_marker_to_frame_marker() {
        let marker = Marker::new("00:00:06:15", "drop");
        let fm = marker.to_frame_marker(30).unwrap();
        assert_eq!(fm.frame, 195);
        assert_eq!(fm.label, "drop");

        assert!(Marker::new("bad-value", "x").to_frame_marker(30).is_err());
    }

    #[test]
    fn test_track_deserializes_with_missing_optionals() {
        let raw = r#"{
            "title": "Anthem",
            "markers": [{"timestamp": "00:00:00:00"}, {"timestamp": "00:00:02:00", "label": "verse"}]
        }"#;
        let track: Track = serde_json::from_str(raw).unwrap();
        assert_eq!(track.markers.len(), 2);
        assert_eq!(track.markers[0].label, "");
        assert!(track.preview_url.is_none());
        assert!(track.length.is_none());
    }
}
