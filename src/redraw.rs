//! Redraw coalescing.
//!
//! Pointer moves can outpace the display. Instead of writing to the surface
//! on every update, the editor parks the latest selection here and the host
//! drains it once per frame. Only the newest selection is ever rendered.

use crate::types::Selection;

#[derive(Debug, Default)]
pub struct RedrawScheduler {
    pending: Option<Selection>,
}

impl RedrawScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a selection for the next frame.
    ///
    /// Returns true when this request needs a new frame from the host, false
    /// when a frame is already pending and the request was merged into it.
    pub fn request(&mut self, selection: Selection) -> bool {
        let needs_frame = self.pending.is_none();
        self.pending = Some(selection);
        needs_frame
    }

    /// Take the pending selection, if any. Called once per frame.
    pub fn take(&mut self) -> Option<Selection> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
