//! Drag end - pointer release and pointer leaving the tracked region.

use super::events::{PointerEvent, PointerPhase};
use crate::cursor::Cursor;
use crate::editor::Editor;
use crate::surface::Surface;
use crate::types::Point;

impl<S: Surface> Editor<S> {
    /// Handle a pointer release. Returns true if a drag was ended.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> bool {
        if self.interactive_config().is_none() {
            return false;
        }
        self.held = event.modifiers;
        let point = event
            .page_point(PointerPhase::End)
            .map(|page| self.normalize(page));
        self.end_drag(point)
    }

    /// Handle the pointer leaving the tracked region. Ends any drag.
    pub fn pointer_leave(&mut self) -> bool {
        if self.interactive_config().is_none() {
            return false;
        }
        self.end_drag(None)
    }

    /// Return to idle unconditionally. The selection stays as last computed.
    fn end_drag(&mut self, point: Option<Point>) -> bool {
        let was_active = self.state.is_dragging();
        let label = self.state.label();
        self.state.reset();

        if was_active {
            tracing::debug!(state = label, "Drag ended");
            self.emit_end();
        }

        let cursor = point.map_or(Cursor::Default, |p| self.hover_cursor(p));
        self.apply_cursor(cursor);
        was_active
    }
}
