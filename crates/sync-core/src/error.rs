//! Validation errors surfaced to callers of the sync pipeline.

use demodrive_project_model::aspect::UnsupportedAspectRatio;

/// Input rejected before any overlay is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("insufficient markers: found {found}, add at least two markers to the track")]
    InsufficientMarkers { found: usize },

    #[error("unsupported aspect ratio {value:?} (expected 16:9, 9:16 or 1:1)")]
    UnsupportedAspectRatio { value: String },

    #[error("frame rate must be positive")]
    InvalidFrameRate,

    #[error("track {title:?} has neither a preview URL nor an audio file")]
    MissingAudioSource { title: String },
}

impl From<UnsupportedAspectRatio> for ValidationError {
    fn from(err: UnsupportedAspectRatio) -> Self {
        Self::UnsupportedAspectRatio { value: err.value }
    }
}
