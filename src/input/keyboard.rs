//! Modifier key handling.
//!
//! Alt toggles center-resize mode. A toggle in the middle of a drag
//! recomputes the selection at the last pointer position, so the rectangle
//! jumps between modes without waiting for the next move.

use super::events::Key;
use crate::editor::Editor;
use crate::surface::Surface;

impl<S: Surface> Editor<S> {
    pub fn key_down(&mut self, key: Key) -> bool {
        self.handle_key(key, true)
    }

    pub fn key_up(&mut self, key: Key) -> bool {
        self.handle_key(key, false)
    }

    fn handle_key(&mut self, key: Key, pressed: bool) -> bool {
        let Some(config) = self.interactive_config() else {
            return false;
        };
        if !config.keyboard {
            return false;
        }

        let before = self.mode();
        match key {
            Key::Alt => self.held.alt = pressed,
            Key::Shift => self.held.shift = pressed,
            Key::Other => return false,
        }

        let after = self.mode();
        if before != after {
            tracing::debug!(mode = ?after, "Interaction mode toggled");
            if let Some(point) = self.state.last_point() {
                self.update_drag(point);
            }
        }
        true
    }
}
