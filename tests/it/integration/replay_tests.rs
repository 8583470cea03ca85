//! Replay scripts loaded from disk.

use croptool::replay::{CallbackKind, ReplayScript, run_script};
use croptool::{CropError, Cursor, PixelRect};

const CONTAINER: &str = r#""container": { "offset": { "x": 10, "y": 10 }, "size": { "w": 200, "h": 150 } }"#;

fn write_script(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("script.json");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_replay_probes_image_and_draws_selection() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("source.png");
    image::RgbImage::new(400, 300).save(&image_path).unwrap();

    let body = format!(
        r#"{{
            "options": {{ "persistent": false }},
            {CONTAINER},
            "image": {image:?},
            "events": [
                {{ "type": "down", "x": 60, "y": 40 }},
                {{ "type": "move", "x": 110, "y": 85 }},
                {{ "type": "up", "x": 110, "y": 85 }}
            ]
        }}"#,
        image = image_path.to_string_lossy()
    );
    let script = ReplayScript::load(write_script(&dir, &body)).unwrap();
    let outcome = run_script(&script).unwrap();

    // Container is half the image size: 50px on screen is 100px of image
    assert_eq!(outcome.selection, Some(PixelRect::new(100, 60, 100, 90)));
    assert_eq!(outcome.handled, 3);

    let kinds: Vec<CallbackKind> = outcome.callbacks.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, vec![CallbackKind::Start, CallbackKind::Change, CallbackKind::End]);
}

#[test]
fn test_replay_key_events_toggle_center_mode() {
    let body = format!(
        r#"{{
            "options": {{
                "real": {{ "w": 400, "h": 300 }},
                "selection": {{ "x": 100, "y": 75, "w": 200, "h": 150 }},
                "margin": 0.02
            }},
            {CONTAINER},
            "events": [
                {{ "type": "down", "x": 160, "y": 85 }},
                {{ "type": "move", "x": 130, "y": 85 }},
                {{ "type": "key_down", "key": "alt" }},
                {{ "type": "leave" }}
            ]
        }}"#
    );
    let script = ReplayScript::from_json(&body).unwrap();
    let outcome = run_script(&script).unwrap();

    assert_eq!(outcome.selection, Some(PixelRect::new(160, 75, 80, 150)));
    assert_eq!(outcome.handled, 4);
    assert_eq!(outcome.cursor, Cursor::Default);
    assert_eq!(outcome.callbacks.len(), 4);
    assert_eq!(outcome.callbacks[3].kind, CallbackKind::End);
}

#[test]
fn test_replay_with_missing_image_fails() {
    let body = format!(r#"{{ {CONTAINER}, "image": "/no/such/image.png" }}"#);
    let script = ReplayScript::from_json(&body).unwrap();

    let err = run_script(&script).unwrap_err();
    assert!(matches!(err, CropError::Image(_) | CropError::Io(_)));
}

#[test]
fn test_replay_rejects_unknown_fields() {
    let body = format!(r#"{{ {CONTAINER}, "evnets": [] }}"#);
    assert!(matches!(ReplayScript::from_json(&body), Err(CropError::Json(_))));
}
