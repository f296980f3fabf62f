//! Compose a synced overlay timeline.

use std::path::{Path, PathBuf};

use anyhow::Context;

use demodrive_common::config::CompositionDefaults;
use demodrive_project_model::aspect::AspectRatio;
use demodrive_project_model::media::dedupe_media;
use demodrive_project_model::project::ProjectState;
use demodrive_project_model::request::SyncRequest;
use demodrive_sync_core::compositor::{Compositor, CompositorConfig, SyncReport};
use demodrive_sync_core::outro::OutroConfig;
use demodrive_sync_core::ValidationError;

pub struct SyncOptions {
    pub request: PathBuf,
    pub output: Option<PathBuf>,
    pub name: Option<String>,
    pub fps: Option<u32>,
    pub aspect_ratio: Option<String>,
    pub outro_config: Option<PathBuf>,
    pub dedupe: bool,
}

pub fn run(opts: SyncOptions, defaults: &CompositionDefaults) -> anyhow::Result<()> {
    // Progress goes to stderr when stdout carries the composition JSON.
    let to_stdout = opts.output.is_none();
    let say = |line: String| {
        if to_stdout {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    };

    say(format!("Syncing request: {}", opts.request.display()));

    let request = SyncRequest::load(&opts.request)
        .map_err(|e| anyhow::anyhow!("Failed to load request: {e}"))?;

    let fps = opts.fps.or(request.fps).unwrap_or(defaults.fps);
    let aspect_ratio = opts
        .aspect_ratio
        .clone()
        .or_else(|| request.aspect_ratio.clone())
        .unwrap_or_else(|| defaults.aspect_ratio.clone());
    let aspect_ratio = aspect_ratio
        .parse::<AspectRatio>()
        .map_err(ValidationError::from)?;

    let config = match &opts.outro_config {
        Some(path) => CompositorConfig {
            outro: load_outro_config(path)?,
        },
        None => CompositorConfig::default(),
    };

    let media = if opts.dedupe {
        let (kept, dropped) = dedupe_media(&request.media);
        say(format!("  Removed {dropped} duplicate media item(s)"));
        kept
    } else {
        request.media.clone()
    };

    say(format!(
        "  Track: {} ({} markers), {} media, {fps}fps, {aspect_ratio}",
        request.track.title,
        request.track.markers.len(),
        media.len()
    ));

    let composition = Compositor::new(config)
        .compose(&request.track, &media, fps, aspect_ratio)
        .context("Composition rejected")?;

    for line in report_lines(&composition.report) {
        say(line);
    }
    say(format!(
        "  Timeline: {} overlays, {} frames ({:.2}s)",
        composition.overlays.len(),
        composition.duration_in_frames,
        composition.duration_in_frames as f64 / f64::from(fps)
    ));

    match opts.output {
        Some(path) => {
            let name = opts.name.unwrap_or_else(|| request.track.title.clone());
            let state = ProjectState::new(
                name,
                fps,
                aspect_ratio,
                composition.overlays,
                composition.duration_in_frames,
            );
            state
                .save(&path)
                .map_err(|e| anyhow::anyhow!("Failed to save project state: {e}"))?;
            println!("  Project state saved to: {}", path.display());
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&composition)?);
        }
    }

    Ok(())
}

fn load_outro_config(path: &Path) -> anyhow::Result<OutroConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read outro config {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse outro config {}", path.display()))
}

fn report_lines(report: &SyncReport) -> Vec<String> {
    let mut lines = vec![format!("  Segments: {}", report.video_segments)];
    if report.skipped_markers > 0 {
        lines.push(format!(
            "  Skipped {} marker(s) with malformed timestamps",
            report.skipped_markers
        ));
    }
    if report.dropped_media > 0 {
        lines.push(format!(
            "  {} media item(s) left out: not enough marker intervals",
            report.dropped_media
        ));
    }
    if report.unused_intervals > 0 {
        lines.push(format!(
            "  {} marker interval(s) left empty: not enough media",
            report.unused_intervals
        ));
    }
    if report.zero_length_intervals > 0 {
        lines.push(format!(
            "  {} zero-length interval(s) skipped",
            report.zero_length_intervals
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines_only_mention_losses() {
        let report = SyncReport {
            video_segments: 3,
            ..SyncReport::default()
        };
        assert_eq!(report_lines(&report), vec!["  Segments: 3".to_string()]);

        let report = SyncReport {
            video_segments: 2,
            dropped_media: 4,
            skipped_markers: 1,
            ..SyncReport::default()
        };
        let lines = report_lines(&report);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Skipped 1 marker"));
        assert!(lines[2].contains("4 media item(s) left out"));
    }
}
