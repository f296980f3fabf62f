//! Show project state information.

use std::collections::BTreeMap;
use std::path::PathBuf;

use demodrive_project_model::project::ProjectState;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    let state =
        ProjectState::load(&path).map_err(|e| anyhow::anyhow!("Failed to load project: {e}"))?;

    println!("Project: {}", state.name);
    println!("  Version: {}", state.version);
    println!("  Created: {}", state.created_at);
    println!("  Modified: {}", state.modified_at);
    println!();

    println!("Timeline:");
    println!("  Aspect ratio: {}", state.aspect_ratio);
    println!(
        "  Frame size: {}x{}",
        state.aspect_ratio.frame_size().width,
        state.aspect_ratio.frame_size().height
    );
    println!("  FPS: {}", state.fps);
    println!(
        "  Duration: {} frames ({:.2}s)",
        state.duration_in_frames,
        state.duration_secs()
    );
    println!();

    let mut by_type: BTreeMap<&str, usize> = BTreeMap::new();
    for overlay in &state.overlays {
        *by_type.entry(overlay.type_name()).or_default() += 1;
    }
    println!("Overlays: {}", state.overlays.len());
    for (kind, count) in &by_type {
        println!("  {kind}: {count}");
    }

    if let Err(e) = state.ensure_valid() {
        println!("\n{e}");
    }

    Ok(())
}
