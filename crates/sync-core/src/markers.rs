//! Marker timecode parsing.
//!
//! Turns the human-authored markers of a track into frame offsets sorted
//! ascending. Markers whose timestamp cannot be parsed are dropped rather
//! than rejected, so a partially edited marker list still produces a
//! timeline.

use demodrive_project_model::timecode::FrameIndex;
use demodrive_project_model::track::{FrameMarker, Marker};

use crate::error::ValidationError;

/// Minimum number of raw markers a track needs to define one interval.
pub const MIN_MARKERS: usize = 2;

/// Frame markers sorted ascending by frame, plus the count of dropped markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedMarkers {
    pub markers: Vec<FrameMarker>,

    /// Markers dropped because their timestamp did not parse.
    pub skipped: usize,
}

impl ParsedMarkers {
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Number of consecutive-marker intervals.
    pub fn interval_count(&self) -> usize {
        self.markers.len().saturating_sub(1)
    }

    /// Consecutive `(start, end)` frame pairs.
    pub fn intervals(&self) -> impl Iterator<Item = (FrameIndex, FrameIndex)> + '_ {
        self.markers.windows(2).map(|pair| (pair[0].frame, pair[1].frame))
    }

    /// Frame of the marker at `index`, if it exists.
    pub fn frame_at(&self, index: usize) -> Option<FrameIndex> {
        self.markers.get(index).map(|m| m.frame)
    }
}

/// Parse `markers` into frame offsets at `fps`.
///
/// Fails when fewer than [`MIN_MARKERS`] raw markers are given (counted
/// before any are dropped) or when `fps` is zero. Malformed timestamps are
/// skipped. Equal frames keep their input order.
pub fn parse_frame_markers(markers: &[Marker], fps: u32) -> Result<ParsedMarkers, ValidationError> {
    if markers.len() < MIN_MARKERS {
        return Err(ValidationError::InsufficientMarkers {
            found: markers.len(),
        });
    }
    if fps == 0 {
        return Err(ValidationError::InvalidFrameRate);
    }

    let mut parsed = ParsedMarkers::default();
    for marker in markers {
        match marker.to_frame_marker(fps) {
            Ok(frame_marker) => parsed.markers.push(frame_marker),
            Err(e) => {
                tracing::debug!(label = %marker.label, "Skipping marker: {}", e);
                parsed.skipped += 1;
            }
        }
    }

    // Stable: equal frames keep authoring order.
    parsed.markers.sort_by_key(|m| m.frame);

    Ok(parsed)
}
