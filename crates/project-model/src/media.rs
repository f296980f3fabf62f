//! Uploaded media items placed on the timeline.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Kind of an uploaded media item.
///
/// Tags outside the known set are kept as written and passed through to
/// the overlay `type` unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Audio,
    #[serde(untagged)]
    Other(String),
}

impl MediaType {
    /// Wire name of the type tag.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Other(tag) => tag,
        }
    }
}

/// A media item supplied by the caller, in timeline order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "type")]
    pub media_type: MediaType,

    /// Display name, used as the overlay label.
    pub name: String,

    /// Public storage path, used as the overlay source.
    pub storage_url_path: String,

    /// Content digest computed at upload, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
}

impl Media {
    pub fn new(
        media_type: MediaType,
        name: impl Into<String>,
        storage_url_path: impl Into<String>,
    ) -> Self {
        Self {
            media_type,
            name: name.into(),
            storage_url_path: storage_url_path.into(),
            content_hash: None,
        }
    }

    pub fn image(name: impl Into<String>, storage_url_path: impl Into<String>) -> Self {
        Self::new(MediaType::Image, name, storage_url_path)
    }

    pub fn video(name: impl Into<String>, storage_url_path: impl Into<String>) -> Self {
        Self::new(MediaType::Video, name, storage_url_path)
    }

    /// Identity used for deduplication: the content hash when present,
    /// otherwise the storage path.
    pub fn identity(&self) -> &str {
        self.content_hash
            .as_deref()
            .filter(|h| !h.is_empty())
            .unwrap_or(&self.storage_url_path)
    }
}

/// Remove repeated uploads, keeping the first occurrence of each identity
/// and the original order. Returns the kept items and the number dropped.
pub fn dedupe_media(media: &[Media]) -> (Vec<Media>, usize) {
    let mut seen = HashSet::new();
    let kept: Vec<Media> = media
        .iter()
        .filter(|m| seen.insert(m.identity()))
        .cloned()
        .collect();
    let dropped = media.len() - kept.len();
    (kept, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_wire_names() {
        let media = Media::video("clip", "media/clip.mp4");
        let json = serde_json::to_string(&media).unwrap();
        assert!(json.contains("\"type\":\"video\""));
        assert!(json.contains("\"storage_url_path\":\"media/clip.mp4\""));
        assert!(!json.contains("content_hash"));
    }

    #[test]
    fn test_unknown_media_type_kept_verbatim() {
        let media: Media = serde_json::from_str(
            r#"{"type": "gif", "name": "loop", "storage_url_path": "media/loop.gif"}"#,
        )
        .unwrap();
        assert_eq!(media.media_type, MediaType::Other("gif".to_string()));
        assert_eq!(media.media_type.as_str(), "gif");

        let json = serde_json::to_string(&media).unwrap();
        assert!(json.contains("\"type\":\"gif\""));

        let known: MediaType = serde_json::from_str("\"audio\"").unwrap();
        assert_eq!(known, MediaType::Audio);
    }

    #[test]
    fn test_dedupe_by_path_keeps_first() {
        let media = vec![
            Media::image("a", "media/a.png"),
            Media::image("b", "media/b.png"),
            Media::image("a again", "media/a.png"),
        ];
        let (kept, dropped) = dedupe_media(&media);
        assert_eq!(dropped, 1);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].name, "a");
        assert_eq!(kept[1].name, "b");
    }

    #[test]
    fn test_dedupe_prefers_content_hash() {
        let mut first = Media::image("first", "media/1.png");
        first.content_hash = Some("abc".to_string());
        let mut second = Media::image("second", "media/2.png");
        second.content_hash = Some("abc".to_string());
        let third = Media::image("third", "media/3.png");

        let (kept, dropped) = dedupe_media(&[first, second, third]);
        assert_eq!(dropped, 1);
        let names: Vec<&str> = kept.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["first", "third"]);
    }

    #[test]
    fn test_dedupe_empty() {
        let (kept, dropped) = dedupe_media(&[]);
        assert!(kept.is_empty());
        assert_eq!(dropped, 0);
    }
}
