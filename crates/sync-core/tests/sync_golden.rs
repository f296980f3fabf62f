use std::path::PathBuf;

use demodrive_project_model::media::dedupe_media;
use demodrive_project_model::request::SyncRequest;
use demodrive_sync_core::compositor::{create_synced_overlays, DEFAULT_FPS};

fn load_fixture(name: &str) -> SyncRequest {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join(name);

    SyncRequest::load(path).expect("fixture request should load")
}

fn signature(overlays: &[demodrive_project_model::overlay::Overlay]) -> String {
    overlays
        .iter()
        .map(|o| {
            format!(
                "{}|{}|{}|{}|{}|{}|{}|{}",
                o.type_name(),
                o.id,
                o.from,
                o.duration_in_frames,
                o.left,
                o.top,
                o.width,
                o.height
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn landscape_fixture_signature_is_stable() {
    let request = load_fixture("sample-request.json");
    let composition = create_synced_overlays(
        &request.track,
        &request.media,
        request.fps.unwrap_or(DEFAULT_FPS),
        request.aspect_ratio.as_deref().unwrap_or("16:9"),
    )
    .expect("fixture should compose");

    let expected = [
        "sound|1|0|360|0|0|50|50",
        "image|2|0|90|0|0|1280|720",
        "video|3|90|90|0|0|1280|720",
        "image|4|180|120|0|0|1280|720",
        "rectangle|5|300|60|0|0|1280|720",
        "image|6|300|60|523|203|234|213",
        "text|7|300|60|490|513|300|50",
    ]
    .join("\n");

    assert_eq!(signature(&composition.overlays), expected);
    assert_eq!(composition.duration_in_frames, 360);
    assert_eq!(composition.report.skipped_markers, 1);
    assert_eq!(composition.report.unused_intervals, 1);
    assert_eq!(composition.report.dropped_media, 0);

    let sound = composition.sound().expect("sound overlay");
    assert_eq!(
        sound.src(),
        Some("https://cdn.demodrive.example/tracks/golden-hour-preview.mp3")
    );
    assert_eq!(sound.content(), Some("Golden Hour"));

    let labels: Vec<&str> = composition.segments().filter_map(|o| o.content()).collect();
    assert_eq!(labels, vec!["storefront", "walkthrough", "team"]);
}

#[test]
fn portrait_fixture_after_dedupe() {
    let request = load_fixture("portrait-request.json");
    let (media, dropped) = dedupe_media(&request.media);
    assert_eq!(dropped, 1);

    let composition = create_synced_overlays(
        &request.track,
        &media,
        request.fps.unwrap_or(DEFAULT_FPS),
        request.aspect_ratio.as_deref().unwrap_or("16:9"),
    )
    .expect("fixture should compose");

    let expected = [
        "sound|1|0|156|0|0|50|50",
        "video|2|0|48|0|0|1080|1920",
        "image|3|48|48|0|0|1080|1920",
        "rectangle|4|96|60|0|0|1080|1920",
        "image|5|96|60|423|803|234|213",
        "text|6|96|60|390|1113|300|50",
    ]
    .join("\n");

    assert_eq!(signature(&composition.overlays), expected);
    assert_eq!(composition.report.dropped_media, 1);
    assert_eq!(
        composition.sound().and_then(|o| o.src()),
        Some("tracks/night-drive.mp3")
    );
}

#[test]
fn composition_json_matches_renderer_contract() {
    let request = load_fixture("sample-request.json");
    let composition =
        create_synced_overlays(&request.track, &request.media, 30, "16:9").expect("compose");

    let value = serde_json::to_value(&composition).expect("serialize");
    let overlays = value["overlays"].as_array().expect("overlays array");
    assert_eq!(value["durationInFrames"], 360);

    for overlay in overlays {
        for field in [
            "id",
            "type",
            "from",
            "durationInFrames",
            "row",
            "left",
            "top",
            "width",
            "height",
            "styles",
        ] {
            assert!(overlay.get(field).is_some(), "missing {field} in {overlay}");
        }
    }

    let text = &overlays[6];
    assert_eq!(text["content"], "DemoDrive");
    assert_eq!(text["styles"]["color"], "#FFFFFF");
    assert_eq!(text["styles"]["fontSize"], "3rem");
    assert_eq!(overlays[4]["styles"]["fill"], "#000000");
}
