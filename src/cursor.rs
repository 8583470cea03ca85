//! Cursor hints derived from anchors.

use crate::input::Anchor;
use serde::Serialize;
use std::fmt;

/// Cursor hint shown over the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cursor {
    #[default]
    Default,
    Move,
    NsResize,
    EwResize,
    NwseResize,
    NeswResize,
}

impl Cursor {
    /// CSS cursor name.
    pub fn as_str(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Move => "move",
            Cursor::NsResize => "ns-resize",
            Cursor::EwResize => "ew-resize",
            Cursor::NwseResize => "nwse-resize",
            Cursor::NeswResize => "nesw-resize",
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up the cursor for an anchor.
///
/// Keyed by the anchor percentages on each axis. Missing anchors, or a
/// missing axis, fall back to `Default`.
pub fn cursor_for(anchor: Option<&Anchor>) -> Cursor {
    let Some(anchor) = anchor else {
        return Cursor::Default;
    };
    let (Some(x), Some(y)) = (anchor.x, anchor.y) else {
        return Cursor::Default;
    };

    match (x.percent(), y.percent()) {
        (0, 0) | (100, 100) => Cursor::NwseResize,
        (0, 100) | (100, 0) => Cursor::NeswResize,
        (0, 50) | (100, 50) => Cursor::EwResize,
        (50, 0) | (50, 100) => Cursor::NsResize,
        (50, 50) => Cursor::Move,
        _ => Cursor::Default,
    }
}
