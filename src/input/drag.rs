//! Pointer move handling - drag updates and hover cursor.
//!
//! ## Performance Notes
//!
//! Pointer move can fire faster than the display refreshes. Each move runs
//! one selection update and queues a redraw; the surface is only written
//! once per frame from `Editor::frame`.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::events::{PointerEvent, PointerPhase};
use super::update::update_selection;
use crate::editor::Editor;
use crate::profile_scope;
use crate::surface::Surface;
use crate::types::Point;

impl<S: Surface> Editor<S> {
    /// Handle a pointer move. Returns true while a drag consumes it.
    ///
    /// When idle the move only refreshes the hover cursor.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> bool {
        profile_scope!("pointer_move");

        if self.interactive_config().is_none() {
            return false;
        }
        let Some(page) = event.page_point(PointerPhase::Move) else {
            return false;
        };
        self.held = event.modifiers;
        let point = self.normalize(page);

        if self.state.is_idle() {
            let cursor = self.hover_cursor(point);
            self.apply_cursor(cursor);
            return false;
        }

        self.update_drag(point);
        true
    }

    /// Recompute the selection for the active drag at `point`, commit it
    /// and notify `on_change`.
    pub(crate) fn update_drag(&mut self, point: Point) {
        self.state.set_last_point(point);

        let Some(config) = self.config.as_ref() else {
            return;
        };
        let Some(selection) = self.selection else {
            return;
        };
        let next = update_selection(&selection, &self.state, point, self.mode(), config);

        tracing::trace!(
            state = self.state.label(),
            x = next.x,
            y = next.y,
            w = next.w,
            h = next.h,
            "Selection updated"
        );

        self.commit(next);
        self.emit_change();
        let cursor = self.drag_cursor(point);
        self.apply_cursor(cursor);
    }
}
