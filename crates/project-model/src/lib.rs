//! DemoDrive Project Model
//!
//! Defines the data contracts shared by the sync pipeline and its callers:
//! - **Tracks:** Music tracks with human-authored timecode markers
//! - **Media:** Uploaded images and clips, in timeline order
//! - **Overlays:** Render-ready timeline layers (closed sum type)
//! - **Documents:** Sync requests in, project states out
//!
//! Frame offsets are absolute frame counts at the project frame rate.

pub mod aspect;
pub mod media;
pub mod overlay;
pub mod project;
pub mod request;
pub mod timecode;
pub mod track;

pub use aspect::*;
pub use media::*;
pub use overlay::*;
pub use project::*;
pub use request::*;
pub use timecode::*;
pub use track::*;
