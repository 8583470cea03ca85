//! The surface the editor draws on.
//!
//! In a browser this is the container element cloned from the template,
//! with its selection node and optional information node. The editor only
//! needs the handful of operations below; element creation, styling and
//! event wiring stay on the host side.

use crate::cursor::Cursor;
use crate::types::{ContentBox, PercentBox};

/// What one frame of selection rendering looks like.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionFrame {
    /// Selection box edges in percent of the container
    pub bbox: PercentBox,
    /// Whether drag handles are drawn
    pub dots: bool,
}

pub trait Surface {
    /// True when the container sits under a parent node.
    fn is_attached(&self) -> bool;

    /// Current content box of the container in page pixels.
    fn content_box(&self) -> ContentBox;

    /// Position the selection node.
    fn render_selection(&mut self, frame: &SelectionFrame);

    /// Hide the selection node (no selection).
    fn clear_selection(&mut self) {}

    /// Apply a cursor hint. Only called when the hint changes.
    fn set_cursor(&mut self, cursor: Cursor);

    /// Update the information text. No-op for surfaces without one.
    fn set_info(&mut self, _text: &str) {}
}

/// A surface that renders nothing and reports a fixed content box.
///
/// Used by the replay binary and handy for driving the engine headless.
#[derive(Clone, Debug, Default)]
pub struct HeadlessSurface {
    pub content_box: ContentBox,
    pub last_frame: Option<SelectionFrame>,
    pub cursor: Cursor,
    pub info: String,
}

impl HeadlessSurface {
    pub fn new(content_box: ContentBox) -> Self {
        Self {
            content_box,
            ..Default::default()
        }
    }
}

impl Surface for HeadlessSurface {
    fn is_attached(&self) -> bool {
        true
    }

    fn content_box(&self) -> ContentBox {
        self.content_box
    }

    fn render_selection(&mut self, frame: &SelectionFrame) {
        tracing::trace!(
            left = frame.bbox.left,
            top = frame.bbox.top,
            width = frame.bbox.width,
            height = frame.bbox.height,
            "Render selection"
        );
        self.last_frame = Some(*frame);
    }

    fn clear_selection(&mut self) {
        self.last_frame = None;
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    fn set_info(&mut self, text: &str) {
        self.info = text.to_string();
    }
}
