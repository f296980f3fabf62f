//! Input document for a sync run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::media::Media;
use crate::project::ProjectError;
use crate::track::Track;

/// A track, the media to lay over it, and optional render parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncRequest {
    pub track: Track,

    /// Media items in timeline order.
    #[serde(default)]
    pub media: Vec<Media>,

    /// Frame rate. Falls back to the configured default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<u32>,

    /// Aspect ratio string. Falls back to the configured default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
}

impl SyncRequest {
    pub fn new(track: Track, media: Vec<Media>) -> Self {
        Self {
            track,
            media,
            fps: None,
            aspect_ratio: None,
        }
    }

    /// Load a request from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProjectError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ProjectError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| ProjectError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
