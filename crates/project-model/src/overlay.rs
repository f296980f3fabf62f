//! Timeline overlays: the render-ready output of a composition.
//!
//! The JSON shape is consumed field-for-field by the downstream renderer:
//! common placement fields (`id`, `from`, `durationInFrames`, `row`,
//! `left`, `top`, `width`, `height`) sit beside a `type` tag and the
//! payload that belongs to that type.

use serde::{Deserialize, Serialize};

use crate::media::MediaType;
use crate::timecode::FrameIndex;

/// Identifier of an overlay within one composition.
pub type OverlayId = u32;

/// One timed, positioned layer of the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    pub id: OverlayId,

    /// Start frame.
    pub from: FrameIndex,

    pub duration_in_frames: u64,

    /// Track lane; lower rows draw above higher rows.
    pub row: u32,

    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,

    #[serde(flatten)]
    pub kind: OverlayKind,
}

/// Type tag and type-specific payload of an overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OverlayKind {
    /// Whole-timeline audio bed.
    Sound {
        content: String,
        src: String,
        styles: SoundStyles,
    },

    Video {
        content: String,
        src: String,
        styles: MediaStyles,
    },

    Image {
        content: String,
        src: String,
        styles: MediaStyles,
    },

    /// Audio media placed as a timeline segment.
    Audio {
        content: String,
        src: String,
        styles: MediaStyles,
    },

    Rectangle { styles: ShapeStyles },

    Text { content: String, styles: TextStyles },

    /// Media segment whose type has no dedicated variant. The tag is
    /// written back exactly as the media item carried it.
    #[serde(untagged)]
    OtherMedia {
        #[serde(rename = "type")]
        media_type: String,
        content: String,
        src: String,
        styles: MediaStyles,
    },
}

/// Styles for the sound bed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundStyles {
    pub volume: f64,
}

/// Styles for video, image and audio layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaStyles {
    pub opacity: f64,
    pub object_fit: String,
    pub z_index: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
}

/// Styles for filled shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeStyles {
    pub fill: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
}

/// Styles for text layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyles {
    pub color: String,
    pub font_size: String,
    pub font_weight: String,
    pub text_align: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
}

/// Enter/exit transitions and an optional stroke-draw effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enter: Option<AnimationEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit: Option<AnimationEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw: Option<DrawAnimation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationEffect {
    Fade,
}

/// Outline that draws itself around a shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawAnimation {
    pub direction: DrawDirection,
    pub duration_in_frames: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawDirection {
    Clockwise,
    Counterclockwise,
}

impl Default for MediaStyles {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            object_fit: "cover".to_string(),
            z_index: 1,
            animation: None,
        }
    }
}

impl Animation {
    /// Fade in and out.
    pub fn fade() -> Self {
        Self {
            enter: Some(AnimationEffect::Fade),
            exit: Some(AnimationEffect::Fade),
            draw: None,
        }
    }

    /// Fade in only.
    pub fn fade_in() -> Self {
        Self {
            enter: Some(AnimationEffect::Fade),
            ..Self::default()
        }
    }
}

impl OverlayKind {
    /// Payload for a media item placed as a segment. The variant follows
    /// the media type.
    pub fn media(
        media_type: MediaType,
        content: impl Into<String>,
        src: impl Into<String>,
        styles: MediaStyles,
    ) -> Self {
        let content = content.into();
        let src = src.into();
        match media_type {
            MediaType::Video => Self::Video {
                content,
                src,
                styles,
            },
            MediaType::Image => Self::Image {
                content,
                src,
                styles,
            },
            MediaType::Audio => Self::Audio {
                content,
                src,
                styles,
            },
            MediaType::Other(media_type) => Self::OtherMedia {
                media_type,
                content,
                src,
                styles,
            },
        }
    }

    /// Wire name of the `type` tag.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Sound { .. } => "sound",
            Self::Video { .. } => "video",
            Self::Image { .. } => "image",
            Self::Audio { .. } => "audio",
            Self::Rectangle { .. } => "rectangle",
            Self::Text { .. } => "text",
            Self::OtherMedia { media_type, .. } => media_type,
        }
    }
}

impl Overlay {
    /// First frame after this overlay.
    pub fn end_frame(&self) -> FrameIndex {
        self.from.saturating_add(self.duration_in_frames)
    }

    pub fn type_name(&self) -> &str {
        self.kind.type_name()
    }

    /// Label of the overlay, when its type carries one.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            OverlayKind::Sound { content, .. }
            | OverlayKind::Video { content, .. }
            | OverlayKind::Image { content, .. }
            | OverlayKind::Audio { content, .. }
            | OverlayKind::OtherMedia { content, .. }
            | OverlayKind::Text { content, .. } => Some(content),
            OverlayKind::Rectangle { .. } => None,
        }
    }

    /// Source URL of the overlay, when its type carries one.
    pub fn src(&self) -> Option<&str> {
        match &self.kind {
            OverlayKind::Sound { src, .. }
            | OverlayKind::Video { src, .. }
            | OverlayKind::Image { src, .. }
            | OverlayKind::Audio { src, .. }
            | OverlayKind::OtherMedia { src, .. } => Some(src),
            OverlayKind::Rectangle { .. } | OverlayKind::Text { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_overlay() -> Overlay {
        Overlay {
            id: 2,
            from: 90,
            duration_in_frames: 90,
            row: 1,
            left: 0,
            top: 0,
            width: 1280,
            height: 720,
            kind: OverlayKind::media(
                MediaType::Video,
                "beach",
                "media/beach.mp4",
                MediaStyles::default(),
            ),
        }
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(video_overlay()).unwrap();
        assert_eq!(value["id"], 2);
        assert_eq!(value["type"], "video");
        assert_eq!(value["from"], 90);
        assert_eq!(value["durationInFrames"], 90);
        assert_eq!(value["row"], 1);
        assert_eq!(value["width"], 1280);
        assert_eq!(value["height"], 720);
        assert_eq!(value["content"], "beach");
        assert_eq!(value["src"], "media/beach.mp4");
        assert_eq!(value["styles"]["objectFit"], "cover");
        assert_eq!(value["styles"]["zIndex"], 1);
        assert!(value["styles"].get("animation").is_none());
    }

    #[test]
    fn test_media_type_selects_variant() {
        let kind = OverlayKind::media(MediaType::Image, "a", "b", MediaStyles::default());
        assert_eq!(kind.type_name(), "image");
        let kind = OverlayKind::media(MediaType::Audio, "a", "b", MediaStyles::default());
        assert_eq!(kind.type_name(), "audio");
    }

    #[test]
    fn test_unknown_media_type_written_through() {
        let mut overlay = video_overlay();
        overlay.kind = OverlayKind::media(
            MediaType::Other("gif".to_string()),
            "loop",
            "media/loop.gif",
            MediaStyles::default(),
        );
        assert_eq!(overlay.type_name(), "gif");
        assert_eq!(overlay.src(), Some("media/loop.gif"));

        let value = serde_json::to_value(&overlay).unwrap();
        assert_eq!(value["type"], "gif");
        assert_eq!(value["content"], "loop");
        assert_eq!(value["durationInFrames"], 90);
        assert_eq!(value["styles"]["objectFit"], "cover");

        let back: Overlay = serde_json::from_value(value).unwrap();
        assert_eq!(back, overlay);
    }

    #[test]
    fn test_deserialize_from_renderer_json() {
        let raw = r##"{
            "id": 5,
            "type": "rectangle",
            "from": 300,
            "durationInFrames": 60,
            "row": 1,
            "left": 0,
            "top": 0,
            "width": 1280,
            "height": 720,
            "styles": {
                "fill": "#000000",
                "animation": {
                    "enter": "fade",
                    "exit": "fade",
                    "draw": {"direction": "clockwise", "durationInFrames": 30}
                }
            }
        }"##;
        let overlay: Overlay = serde_json::from_str(raw).unwrap();
        assert_eq!(overlay.end_frame(), 360);
        assert!(overlay.content().is_none());
        match overlay.kind {
            OverlayKind::Rectangle { styles } => {
                assert_eq!(styles.fill, "#000000");
                let draw = styles.animation.unwrap().draw.unwrap();
                assert_eq!(draw.direction, DrawDirection::Clockwise);
                assert_eq!(draw.duration_in_frames, 30);
            }
            other => panic!("expected rectangle, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_accessors() {
        let overlay = video_overlay();
        assert_eq!(overlay.content(), Some("beach"));
        assert_eq!(overlay.src(), Some("media/beach.mp4"));
        assert_eq!(overlay.end_frame(), 180);
    }
}
