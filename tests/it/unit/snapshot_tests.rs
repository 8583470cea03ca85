//! Snapshot tests using the insta crate.
//!
//! Inline JSON snapshots pin the serialised shapes other tools consume:
//! pixel selections, cursor names and replay output.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use croptool::replay::{ReplayScript, run_script};
use croptool::{Cursor, Modifiers, PixelRect};

#[test]
fn snapshot_pixel_rect() {
    insta::assert_json_snapshot!(PixelRect::new(100, 75, 200, 150), @r#"
    {
      "x": 100,
      "y": 75,
      "w": 200,
      "h": 150
    }
    "#);
}

#[test]
fn snapshot_cursor_names() {
    let cursors = [
        Cursor::Default,
        Cursor::Move,
        Cursor::NsResize,
        Cursor::EwResize,
        Cursor::NwseResize,
        Cursor::NeswResize,
    ];
    insta::assert_json_snapshot!(cursors, @r#"
    [
      "default",
      "move",
      "ns-resize",
      "ew-resize",
      "nwse-resize",
      "nesw-resize"
    ]
    "#);
}

#[test]
fn snapshot_modifiers() {
    insta::assert_json_snapshot!(Modifiers::ALT, @r#"
    {
      "alt": true,
      "shift": false
    }
    "#);
}

#[test]
fn snapshot_replay_corner_drag() {
    let script = ReplayScript::from_json(
        r#"{
            "options": {
                "real": { "w": 400, "h": 300 },
                "selection": { "x": 100, "y": 75, "w": 200, "h": 150 }
            },
            "container": { "offset": { "x": 0, "y": 0 }, "size": { "w": 400, "h": 300 } },
            "events": [
                { "type": "down", "x": 100, "y": 75 },
                { "type": "move", "x": 40, "y": 30 },
                { "type": "up", "x": 40, "y": 30 }
            ]
        }"#,
    )
    .unwrap();

    let outcome = run_script(&script).unwrap();
    insta::assert_json_snapshot!(outcome, @r#"
    {
      "selection": {
        "x": 40,
        "y": 30,
        "w": 260,
        "h": 195
      },
      "cursor": "nwse-resize",
      "handled": 3,
      "callbacks": [
        {
          "kind": "start",
          "selection": {
            "x": 100,
            "y": 75,
            "w": 200,
            "h": 150
          }
        },
        {
          "kind": "change",
          "selection": {
            "x": 40,
            "y": 30,
            "w": 260,
            "h": 195
          }
        },
        {
          "kind": "end",
          "selection": {
            "x": 40,
            "y": 30,
            "w": 260,
            "h": 195
          }
        }
      ]
    }
    "#);
}
