//! DemoDrive Sync Core
//!
//! Builds music-synced overlay timelines:
//! - **Markers:** Parse track timecode markers into sorted frame offsets
//! - **Compositor:** Pair marker intervals with media, add the sound bed
//! - **Outro:** Lay out the fixed branded closing sequence
//!
//! This crate is pure computation — no I/O, no platform dependencies.
//! All inputs are data; all outputs are data.

pub mod compositor;
pub mod error;
pub mod markers;
pub mod outro;

pub use compositor::{create_synced_overlays, Composition, Compositor, CompositorConfig, SyncReport};
pub use error::ValidationError;
pub use markers::{parse_frame_markers, ParsedMarkers};
pub use outro::OutroConfig;
