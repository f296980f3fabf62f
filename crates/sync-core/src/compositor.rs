//! Overlay composition: the music-synced timeline builder.
//!
//! # Algorithm
//!
//! 1. **Parse** the track markers into frame offsets, sorted ascending.
//! 2. **Plan** segments: walk consecutive marker intervals and media items
//!    in lock-step. Each interval takes the next media item, in order.
//!    Extra media or extra intervals are left out.
//! 3. **Outro**: anchor the fixed outro at the marker where the walk
//!    stopped.
//! 4. **Sound bed**: prepend one sound overlay spanning the whole timeline.
//!
//! Ids are assigned in creation order starting at 2 (segments, then the
//! outro layers); the sound overlay is always id 1 and always first.

use serde::{Deserialize, Serialize};

use demodrive_project_model::aspect::{AspectRatio, FrameSize};
use demodrive_project_model::media::Media;
use demodrive_project_model::overlay::{MediaStyles, Overlay, OverlayId, OverlayKind, SoundStyles};
use demodrive_project_model::timecode::FrameIndex;
use demodrive_project_model::track::Track;

use crate::error::ValidationError;
use crate::markers::{parse_frame_markers, ParsedMarkers};
use crate::outro::{build_outro, OutroConfig};

/// Id of the sound overlay in every composition.
pub const SOUND_OVERLAY_ID: OverlayId = 1;

/// Timeline frame rate used when the caller has no preference.
pub const DEFAULT_FPS: u32 = 30;

/// Row of media segments.
const SEGMENT_ROW: u32 = 1;
/// Row and square size of the sound overlay's timeline handle.
const SOUND_ROW: u32 = 0;
const SOUND_HANDLE_SIZE: u32 = 50;

/// Configuration for the compositor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositorConfig {
    pub outro: OutroConfig,
}

/// Counts describing what the compositor left out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Media segments placed on the timeline.
    pub video_segments: usize,

    /// Markers dropped because their timestamp did not parse.
    pub skipped_markers: usize,

    /// Media items beyond the available intervals.
    pub dropped_media: usize,

    /// Intervals beyond the available media.
    pub unused_intervals: usize,

    /// Intervals between two markers on the same frame.
    pub zero_length_intervals: usize,
}

impl SyncReport {
    /// Whether every marker and media item made it onto the timeline.
    pub fn is_lossless(&self) -> bool {
        self.skipped_markers == 0
            && self.dropped_media == 0
            && self.unused_intervals == 0
            && self.zero_length_intervals == 0
    }
}

/// The composed timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    /// Overlays in render order, sound bed first.
    pub overlays: Vec<Overlay>,

    /// Total timeline length: outro start plus outro duration.
    pub duration_in_frames: u64,

    #[serde(skip)]
    pub report: SyncReport,
}

impl Composition {
    /// Overlays that came from media items, in timeline order.
    pub fn segments(&self) -> impl Iterator<Item = &Overlay> {
        self.overlays.iter().skip(1).take(self.report.video_segments)
    }

    /// The three outro layers.
    pub fn outro(&self) -> impl Iterator<Item = &Overlay> {
        self.overlays.iter().skip(1 + self.report.video_segments)
    }

    pub fn sound(&self) -> Option<&Overlay> {
        self.overlays.iter().find(|o| o.id == SOUND_OVERLAY_ID)
    }
}

/// One planned media segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedSegment {
    /// Index into the media list.
    pub media_index: usize,
    pub from: FrameIndex,
    pub duration_in_frames: u64,
}

/// Result of walking marker intervals against the media list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentPlan {
    pub segments: Vec<PlannedSegment>,

    /// Frame of the marker where the walk stopped.
    pub outro_start: FrameIndex,

    pub dropped_media: usize,
    pub unused_intervals: usize,
    pub zero_length_intervals: usize,
}

/// Pair marker intervals with `media_count` media items in order.
///
/// An interval whose markers share a frame yields no segment and does not
/// consume a media item. The outro anchor is the frame of the marker the
/// walk reached, or 0 when no marker parsed.
pub fn plan_segments(markers: &ParsedMarkers, media_count: usize) -> SegmentPlan {
    let intervals: Vec<(FrameIndex, FrameIndex)> = markers.intervals().collect();
    let mut plan = SegmentPlan::default();
    let mut cursor = 0;

    while cursor < intervals.len() && plan.segments.len() < media_count {
        let (start, end) = intervals[cursor];
        cursor += 1;

        if end <= start {
            tracing::debug!(frame = start, "Skipping zero-length interval");
            plan.zero_length_intervals += 1;
            continue;
        }

        plan.segments.push(PlannedSegment {
            media_index: plan.segments.len(),
            from: start,
            duration_in_frames: end - start,
        });
    }

    plan.unused_intervals = intervals.len() - cursor;
    plan.dropped_media = media_count - plan.segments.len();
    plan.outro_start = markers.frame_at(cursor).unwrap_or(0);
    plan
}

/// Builds synced overlay timelines.
pub struct Compositor {
    config: CompositorConfig,
}

impl Compositor {
    /// Create a new compositor with the given configuration.
    pub fn new(config: CompositorConfig) -> Self {
        Self { config }
    }

    /// Create a compositor with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(CompositorConfig::default())
    }

    pub fn config(&self) -> &CompositorConfig {
        &self.config
    }

    /// Compose the timeline for `track` and `media` at `fps`.
    pub fn compose(
        &self,
        track: &Track,
        media: &[Media],
        fps: u32,
        aspect_ratio: AspectRatio,
    ) -> Result<Composition, ValidationError> {
        let markers = parse_frame_markers(&track.markers, fps)?;
        self.compose_markers(track, &markers, media, aspect_ratio)
    }

    /// Compose from markers that were already parsed.
    pub fn compose_markers(
        &self,
        track: &Track,
        markers: &ParsedMarkers,
        media: &[Media],
        aspect_ratio: AspectRatio,
    ) -> Result<Composition, ValidationError> {
        let sound_src = track
            .sound_source()
            .ok_or_else(|| ValidationError::MissingAudioSource {
                title: track.title.clone(),
            })?;

        let frame = aspect_ratio.frame_size();
        let plan = plan_segments(markers, media.len());

        let mut overlays = Vec::with_capacity(plan.segments.len() + 4);
        let mut next_id = SOUND_OVERLAY_ID + 1;

        for segment in &plan.segments {
            overlays.push(segment_overlay(
                next_id,
                segment,
                &media[segment.media_index],
                frame,
            ));
            next_id += 1;
        }

        let outro = &self.config.outro;
        overlays.extend(build_outro(plan.outro_start, frame, outro, next_id));

        let duration_in_frames = plan.outro_start.saturating_add(outro.duration_in_frames);

        overlays.insert(
            0,
            Overlay {
                id: SOUND_OVERLAY_ID,
                from: 0,
                duration_in_frames,
                row: SOUND_ROW,
                left: 0,
                top: 0,
                width: SOUND_HANDLE_SIZE,
                height: SOUND_HANDLE_SIZE,
                kind: OverlayKind::Sound {
                    content: track.title.clone(),
                    src: sound_src.to_string(),
                    styles: SoundStyles { volume: 1.0 },
                },
            },
        );

        let report = SyncReport {
            video_segments: plan.segments.len(),
            skipped_markers: markers.skipped,
            dropped_media: plan.dropped_media,
            unused_intervals: plan.unused_intervals,
            zero_length_intervals: plan.zero_length_intervals,
        };
        log_report(&track.title, &report);

        tracing::info!(
            track = %track.title,
            aspect_ratio = %aspect_ratio,
            segments = report.video_segments,
            overlays = overlays.len(),
            duration_in_frames,
            "Composed synced timeline"
        );

        Ok(Composition {
            overlays,
            duration_in_frames,
            report,
        })
    }
}

/// Compose a synced timeline with the default outro.
///
/// Fails when the track has fewer than two markers, `fps` is zero,
/// `aspect_ratio` is not `16:9`, `9:16` or `1:1`, or the track has no
/// usable audio source.
pub fn create_synced_overlays(
    track: &Track,
    media: &[Media],
    fps: u32,
    aspect_ratio: &str,
) -> Result<Composition, ValidationError> {
    let markers = parse_frame_markers(&track.markers, fps)?;
    let aspect_ratio: AspectRatio = aspect_ratio.parse()?;
    Compositor::with_defaults().compose_markers(track, &markers, media, aspect_ratio)
}

fn segment_overlay(
    id: OverlayId,
    segment: &PlannedSegment,
    item: &Media,
    frame: FrameSize,
) -> Overlay {
    Overlay {
        id,
        from: segment.from,
        duration_in_frames: segment.duration_in_frames,
        row: SEGMENT_ROW,
        left: 0,
        top: 0,
        width: frame.width,
        height: frame.height,
        kind: OverlayKind::media(
            item.media_type.clone(),
            item.name.clone(),
            item.storage_url_path.clone(),
            MediaStyles::default(),
        ),
    }
}

fn log_report(title: &str, report: &SyncReport) {
    if report.skipped_markers > 0 {
        tracing::warn!(
            track = %title,
            count = report.skipped_markers,
            "Dropped markers with malformed timestamps"
        );
    }
    if report.dropped_media > 0 {
        tracing::warn!(
            track = %title,
            count = report.dropped_media,
            "More media than marker intervals; extra media left out"
        );
    }
    if report.unused_intervals > 0 {
        tracing::warn!(
            track = %title,
            count = report.unused_intervals,
            "More marker intervals than media; trailing intervals left empty"
        );
    }
    if report.zero_length_intervals > 0 {
        tracing::warn!(
            track = %title,
            count = report.zero_length_intervals,
            "Skipped intervals between markers on the same frame"
        );
    }
}
