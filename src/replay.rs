//! Scripted event replay.
//!
//! A replay script describes one editor (options, container box, optional
//! image to probe) and a recorded list of input events in page pixels.
//! Running it drives a real `Editor` over a `HeadlessSurface` and collects
//! every lifecycle callback, which makes interaction bugs reproducible
//! without a browser.
//!
//! ```json
//! {
//!   "options": { "real": { "w": 400, "h": 300 } },
//!   "container": { "offset": { "x": 0, "y": 0 }, "size": { "w": 400, "h": 300 } },
//!   "events": [
//!     { "type": "down", "x": 100, "y": 75 },
//!     { "type": "move", "x": 300, "y": 225 },
//!     { "type": "up", "x": 300, "y": 225 }
//!   ]
//! }
//! ```

use crate::config::CropOptions;
use crate::cursor::Cursor;
use crate::editor::Editor;
use crate::error::{CropError, CropResult};
use crate::image_size::ImageFile;
use crate::input::{Key, Modifiers, PointerEvent};
use crate::surface::HeadlessSurface;
use crate::types::{ContentBox, PixelRect};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

// ============================================================================
// Script
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplayScript {
    #[serde(default)]
    pub options: CropOptions,
    /// Container content box in page pixels
    pub container: ContentBox,
    /// Image to probe when `options.real` is absent
    #[serde(default)]
    pub image: Option<PathBuf>,
    #[serde(default)]
    pub events: Vec<ReplayEvent>,
}

impl ReplayScript {
    pub fn from_json(json: &str) -> CropResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> CropResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// One recorded input event. Pointer coordinates are page pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayEvent {
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Move {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Up {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Leave,
    KeyDown {
        key: Key,
    },
    KeyUp {
        key: Key,
    },
}

// ============================================================================
// Outcome
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallbackKind {
    Start,
    Change,
    End,
}

/// A lifecycle callback as observed during replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CallbackRecord {
    pub kind: CallbackKind,
    pub selection: PixelRect,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReplayOutcome {
    /// Final selection in real image pixels
    pub selection: Option<PixelRect>,
    pub cursor: Cursor,
    /// Number of events the editor consumed
    pub handled: usize,
    pub callbacks: Vec<CallbackRecord>,
}

// ============================================================================
// Runner
// ============================================================================

/// Run every event of `script` through a fresh editor.
pub fn run_script(script: &ReplayScript) -> CropResult<ReplayOutcome> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let record = |kind: CallbackKind| {
        let log = Rc::clone(&log);
        move |selection: PixelRect| log.borrow_mut().push(CallbackRecord { kind, selection })
    };

    let surface = HeadlessSurface::new(script.container);
    let mut editor = Editor::new(surface, script.options.clone())?
        .on_start(record(CallbackKind::Start))
        .on_change(record(CallbackKind::Change))
        .on_end(record(CallbackKind::End));

    if !editor.is_ready() {
        let path = script.image.as_ref().ok_or(CropError::MissingImageSize)?;
        editor.resolve_real_size(&ImageFile::new(path))?;
    }

    let mut handled = 0;
    for event in &script.events {
        if apply_event(&mut editor, event) {
            handled += 1;
        }
        editor.frame();
    }

    tracing::info!(
        events = script.events.len(),
        handled,
        callbacks = log.borrow().len(),
        "Replay finished"
    );

    let callbacks = log.borrow().clone();
    Ok(ReplayOutcome {
        selection: editor.selection(),
        cursor: editor.cursor(),
        handled,
        callbacks,
    })
}

fn apply_event(editor: &mut Editor<HeadlessSurface>, event: &ReplayEvent) -> bool {
    match *event {
        ReplayEvent::Down { x, y, modifiers } => {
            editor.pointer_down(&PointerEvent::mouse(x, y).with_modifiers(modifiers))
        }
        ReplayEvent::Move { x, y, modifiers } => {
            editor.pointer_move(&PointerEvent::mouse(x, y).with_modifiers(modifiers))
        }
        ReplayEvent::Up { x, y, modifiers } => {
            editor.pointer_up(&PointerEvent::mouse(x, y).with_modifiers(modifiers))
        }
        ReplayEvent::Leave => editor.pointer_leave(),
        ReplayEvent::KeyDown { key } => editor.key_down(key),
        ReplayEvent::KeyUp { key } => editor.key_up(key),
    }
}
