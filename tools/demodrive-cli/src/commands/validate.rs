//! Validate a sync request without composing it.

use std::path::PathBuf;

use demodrive_common::config::CompositionDefaults;
use demodrive_project_model::aspect::AspectRatio;
use demodrive_project_model::request::SyncRequest;
use demodrive_sync_core::compositor::plan_segments;
use demodrive_sync_core::markers::parse_frame_markers;

pub fn run(path: PathBuf, fps: Option<u32>, defaults: &CompositionDefaults) -> anyhow::Result<()> {
    println!("Validating request at: {}", path.display());

    let request =
        SyncRequest::load(&path).map_err(|e| anyhow::anyhow!("Failed to load request: {e}"))?;
    let fps = fps.or(request.fps).unwrap_or(defaults.fps);

    println!("  Track: {}", request.track.title);
    println!("  FPS: {fps}");

    let mut issues = vec![];

    match request.track.sound_source() {
        Some(src) => println!("  Sound source: {src}"),
        None => issues.push("track has neither a preview URL nor an audio file".to_string()),
    }

    if let Some(ratio) = &request.aspect_ratio {
        if let Err(e) = ratio.parse::<AspectRatio>() {
            issues.push(e.to_string());
        }
    }

    for marker in &request.track.markers {
        match marker.timecode() {
            Ok(tc) => println!(
                "  Marker {:<16} {tc} -> frame {}",
                format!("{:?}", marker.label),
                tc.to_frame(fps)
            ),
            Err(e) => issues.push(format!("marker {:?}: {e}", marker.label)),
        }
    }

    let parsed = parse_frame_markers(&request.track.markers, fps)
        .map_err(|e| anyhow::anyhow!("Invalid request: {e}"))?;
    let plan = plan_segments(&parsed, request.media.len());

    println!(
        "  Markers: {} valid, {} skipped, {} interval(s)",
        parsed.len(),
        parsed.skipped,
        parsed.interval_count()
    );
    println!("  Media: {} item(s)", request.media.len());
    println!(
        "  Planned: {} segment(s), outro at frame {}",
        plan.segments.len(),
        plan.outro_start
    );

    if plan.dropped_media > 0 {
        issues.push(format!(
            "{} media item(s) will be left out",
            plan.dropped_media
        ));
    }
    if plan.unused_intervals > 0 {
        issues.push(format!(
            "{} marker interval(s) will stay empty",
            plan.unused_intervals
        ));
    }
    if plan.zero_length_intervals > 0 {
        issues.push(format!(
            "{} zero-length interval(s) will be skipped",
            plan.zero_length_intervals
        ));
    }

    if issues.is_empty() {
        println!("\nRequest is valid.");
    } else {
        println!("\nValidation issues:");
        for issue in &issues {
            println!("  - {issue}");
        }
        println!(
            "\n{} issue(s) found. The timeline may not match the markers.",
            issues.len()
        );
    }

    Ok(())
}
