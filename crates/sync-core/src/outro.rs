//! Branded outro: black background, centered logo, and title text.
//!
//! The outro always lasts `duration_in_frames` frames regardless of the
//! timeline frame rate. The defaults reproduce the renderer's reference
//! layout pixel for pixel.

use serde::{Deserialize, Serialize};

use demodrive_project_model::aspect::FrameSize;
use demodrive_project_model::overlay::{
    Animation, DrawAnimation, DrawDirection, MediaStyles, Overlay, OverlayId, OverlayKind,
    ShapeStyles, TextStyles,
};
use demodrive_project_model::timecode::FrameIndex;

/// Layout and branding of the outro.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutroConfig {
    /// Length of the outro in frames.
    pub duration_in_frames: u64,

    /// Length of the background outline draw-in, in frames.
    pub draw_duration_in_frames: u64,

    /// Background fill color.
    pub background: String,

    /// Logo image source.
    pub logo_src: String,

    /// Logo overlay label.
    pub logo_label: String,

    pub logo_width: u32,
    pub logo_height: u32,

    /// How far the logo sits above the vertical center, in pixels.
    pub logo_offset_y: i32,

    /// Title text.
    pub title: String,

    pub title_width: u32,
    pub title_height: u32,

    /// Distance from the logo's vertical center to the title's top edge.
    pub title_offset_y: i32,

    pub text_color: String,
    pub font_size: String,
    pub font_weight: String,
}

impl Default for OutroConfig {
    fn default() -> Self {
        Self {
            duration_in_frames: 60,
            draw_duration_in_frames: 30,
            background: "#000000".to_string(),
            logo_src: "/static/images/demodrive-logo.png".to_string(),
            logo_label: "DemoDrive logo".to_string(),
            logo_width: 234,
            logo_height: 213,
            logo_offset_y: 50,
            title: "DemoDrive".to_string(),
            title_width: 300,
            title_height: 50,
            title_offset_y: 203,
            text_color: "#FFFFFF".to_string(),
            font_size: "3rem".to_string(),
            font_weight: "bold".to_string(),
        }
    }
}

/// Row of the full-frame background.
const BACKGROUND_ROW: u32 = 1;
/// Row of the logo and title.
const FOREGROUND_ROW: u32 = 0;

/// Build the outro layers starting at frame `start`: background rectangle,
/// logo image, then title text, with ids `first_id`, `first_id + 1`,
/// `first_id + 2`.
pub fn build_outro(
    start: FrameIndex,
    frame: FrameSize,
    config: &OutroConfig,
    first_id: OverlayId,
) -> [Overlay; 3] {
    let duration = config.duration_in_frames;
    // Offsets come from user config; clamp instead of overflowing.
    let logo_top = frame
        .centered_top(config.logo_height)
        .saturating_sub(config.logo_offset_y);
    let logo_center_y = frame.center_y().saturating_sub(config.logo_offset_y);

    let background = Overlay {
        id: first_id,
        from: start,
        duration_in_frames: duration,
        row: BACKGROUND_ROW,
        left: 0,
        top: 0,
        width: frame.width,
        height: frame.height,
        kind: OverlayKind::Rectangle {
            styles: ShapeStyles {
                fill: config.background.clone(),
                animation: Some(Animation {
                    draw: Some(DrawAnimation {
                        direction: DrawDirection::Clockwise,
                        duration_in_frames: config.draw_duration_in_frames,
                    }),
                    ..Animation::fade()
                }),
            },
        },
    };

    let logo = Overlay {
        id: first_id + 1,
        from: start,
        duration_in_frames: duration,
        row: FOREGROUND_ROW,
        left: frame.centered_left(config.logo_width),
        top: logo_top,
        width: config.logo_width,
        height: config.logo_height,
        kind: OverlayKind::Image {
            content: config.logo_label.clone(),
            src: config.logo_src.clone(),
            styles: MediaStyles {
                animation: Some(Animation::fade()),
                ..MediaStyles::default()
            },
        },
    };

    let title = Overlay {
        id: first_id + 2,
        from: start,
        duration_in_frames: duration,
        row: FOREGROUND_ROW,
        left: frame.centered_left(config.title_width),
        top: logo_center_y.saturating_add(config.title_offset_y),
        width: config.title_width,
        height: config.title_height,
        kind: OverlayKind::Text {
            content: config.title.clone(),
            styles: TextStyles {
                color: config.text_color.clone(),
                font_size: config.font_size.clone(),
                font_weight: config.font_weight.clone(),
                text_align: "center".to_string(),
                animation: Some(Animation::fade_in()),
            },
        },
    };

    [background, logo, title]
}
