//! Output aspect ratios and pixel frame sizes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output aspect ratio of a composed timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 16:9 widescreen.
    #[default]
    #[serde(rename = "16:9")]
    Landscape,
    /// 9:16 vertical (social media).
    #[serde(rename = "9:16")]
    Portrait,
    /// 1:1 square.
    #[serde(rename = "1:1")]
    Square,
}

/// Returned when an aspect ratio string is not one of the supported ratios.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported aspect ratio {value:?} (expected 16:9, 9:16 or 1:1)")]
pub struct UnsupportedAspectRatio {
    pub value: String,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 3] = [Self::Landscape, Self::Portrait, Self::Square];

    /// Wire representation (`"16:9"`, `"9:16"`, `"1:1"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landscape => "16:9",
            Self::Portrait => "9:16",
            Self::Square => "1:1",
        }
    }

    /// Pixel dimensions of a full frame at this ratio.
    pub fn frame_size(&self) -> FrameSize {
        match self {
            Self::Landscape => FrameSize::new(1280, 720),
            Self::Portrait => FrameSize::new(1080, 1920),
            Self::Square => FrameSize::new(1080, 1080),
        }
    }
}

impl FromStr for AspectRatio {
    type Err = UnsupportedAspectRatio;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "16:9" => Ok(Self::Landscape),
            "9:16" => Ok(Self::Portrait),
            "1:1" => Ok(Self::Square),
            other => Err(UnsupportedAspectRatio {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full-frame pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Left edge that horizontally centers a box of `width` pixels.
    /// Negative when the box is wider than the frame.
    pub fn centered_left(&self, width: u32) -> i32 {
        (i64::from(self.width) - i64::from(width)).div_euclid(2) as i32
    }

    /// Top edge that vertically centers a box of `height` pixels.
    pub fn centered_top(&self, height: u32) -> i32 {
        (i64::from(self.height) - i64::from(height)).div_euclid(2) as i32
    }

    /// Vertical center line of the frame.
    pub fn center_y(&self) -> i32 {
        (self.height / 2) as i32
    }
}
