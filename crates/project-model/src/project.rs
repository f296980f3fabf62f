//! Project state documents.
//!
//! A project state is the editable timeline document the renderer and the
//! editor UI both read: frame rate, aspect ratio, total duration, and the
//! flat overlay list.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::aspect::AspectRatio;
use crate::overlay::Overlay;

/// Schema version written into new project states.
pub const PROJECT_STATE_VERSION: &str = "1.0";

/// Top-level project state file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectState {
    /// Schema version.
    pub version: String,

    /// Human-readable project name.
    pub name: String,

    /// Creation timestamp (ISO 8601).
    pub created_at: String,

    /// Last modified timestamp (ISO 8601).
    pub modified_at: String,

    /// Timeline frame rate.
    pub fps: u32,

    pub aspect_ratio: AspectRatio,

    /// Total timeline length in frames.
    pub duration_in_frames: u64,

    /// Overlays in render order.
    #[serde(default)]
    pub overlays: Vec<Overlay>,
}

impl ProjectState {
    /// Create a new project state around a composed overlay list.
    pub fn new(
        name: impl Into<String>,
        fps: u32,
        aspect_ratio: AspectRatio,
        overlays: Vec<Overlay>,
        duration_in_frames: u64,
    ) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            version: PROJECT_STATE_VERSION.to_string(),
            name: name.into(),
            created_at: now.clone(),
            modified_at: now,
            fps,
            aspect_ratio,
            duration_in_frames,
            overlays,
        }
    }

    /// Replace the overlay list and bump the modification time.
    pub fn replace_overlays(&mut self, overlays: Vec<Overlay>, duration_in_frames: u64) {
        self.overlays = overlays;
        self.duration_in_frames = duration_in_frames;
        self.modified_at = chrono::Utc::now().to_rfc3339();
    }

    /// Timeline length in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.fps == 0 {
            return 0.0;
        }
        self.duration_in_frames as f64 / f64::from(self.fps)
    }

    /// Load a project state from a JSON file.
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

    /// Save the project state as pretty JSON, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ProjectError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ProjectError::IoError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| ProjectError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json).map_err(|e| ProjectError::IoError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Check internal consistency of a loaded document.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = vec![];

        if self.fps == 0 {
            errors.push("fps must be positive".to_string());
        }

        let mut ids = std::collections::HashSet::new();
        for overlay in &self.overlays {
            if !ids.insert(overlay.id) {
                errors.push(format!("duplicate overlay id {}", overlay.id));
            }
            if overlay.duration_in_frames == 0 {
                errors.push(format!("overlay {} has zero duration", overlay.id));
            }
            if overlay.end_frame() > self.duration_in_frames {
                errors.push(format!(
                    "overlay {} ends at frame {} past timeline end {}",
                    overlay.id,
                    overlay.end_frame(),
                    self.duration_in_frames
                ));
            }
        }

        errors
    }

    /// Like [`ProjectState::validate`], folding every problem into one error.
    pub fn ensure_valid(&self) -> Result<(), ProjectError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ProjectError::ValidationError {
                message: errors.join("; "),
            })
        }
    }
}

/// Errors that can occur when reading or writing project documents.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid project: {message}")]
    ValidationError { message: String },
}
