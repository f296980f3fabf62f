//! Marker timecodes.
//!
//! Markers are authored as `HH:MM:SS:FF`, where `FF` counts frames within
//! the second at the project frame rate. Editors also emit `.` as the
//! separator, sometimes mixed with `:` in the same string
//! (`00.00.06:00`), so both are accepted.

use std::fmt;
use std::str::FromStr;

/// Absolute frame offset from the start of a timeline.
pub type FrameIndex = u64;

/// A parsed `hours:minutes:seconds:frames` timecode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timecode {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub frames: u64,
}

/// Errors produced while parsing a timecode string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimecodeError {
    #[error("expected 4 components (HH:MM:SS:FF), found {found} in {input:?}")]
    ComponentCount { input: String, found: usize },

    #[error("invalid {component} component {value:?} in {input:?}")]
    InvalidComponent {
        input: String,
        component: &'static str,
        value: String,
    },
}

const COMPONENT_NAMES: [&str; 4] = ["hours", "minutes", "seconds", "frames"];

impl Timecode {
    pub fn new(hours: u64, minutes: u64, seconds: u64, frames: u64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            frames,
        }
    }

    /// Whole seconds covered by the hour/minute/second components.
    pub fn whole_seconds(&self) -> u64 {
        self.hours
            .saturating_mul(3600)
            .saturating_add(self.minutes.saturating_mul(60))
            .saturating_add(self.seconds)
    }

    /// Absolute frame offset at `fps`: `(h*3600 + m*60 + s) * fps + f`.
    ///
    /// The frame component is added as-is, even when it is not below `fps`.
    pub fn to_frame(&self, fps: u32) -> FrameIndex {
        self.whole_seconds()
            .saturating_mul(u64::from(fps))
            .saturating_add(self.frames)
    }
}

impl FromStr for Timecode {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('.', ":");
        let parts: Vec<&str> = normalized.split(':').collect();

        if parts.len() != 4 {
            return Err(TimecodeError::ComponentCount {
                input: s.to_string(),
                found: parts.len(),
            });
        }

        let mut values = [0u64; 4];
        for (i, part) in parts.iter().enumerate() {
            values[i] = part
                .trim()
                .parse()
                .map_err(|_| TimecodeError::InvalidComponent {
                    input: s.to_string(),
                    component: COMPONENT_NAMES[i],
                    value: part.to_string(),
                })?;
        }

        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.frames
        )
    }
}
