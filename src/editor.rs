//! The selection editor - one instance per cropped image.
//!
//! `Editor` owns the selection, the resolved configuration and the drag
//! state, and talks to the host through a `Surface`. Pointer and keyboard
//! handlers live in the `input` module as further `impl Editor` blocks:
//!
//! - `input::mouse_down` - drag start
//! - `input::drag` - pointer move (drag update, hover cursor)
//! - `input::mouse_up` - drag end (release, pointer leave)
//! - `input::keyboard` - modifier keys
//!
//! An editor built without a real image size is inert: every handler
//! reports "not handled" until `set_real_size` or `resolve_real_size` runs.

use crate::config::{CropConfig, CropOptions};
use crate::constants::{INFO_SEPARATOR, TARGET_FRAME_MS};
use crate::cursor::{Cursor, cursor_for};
use crate::error::{CropError, CropResult};
use crate::hit_testing::HitTester;
use crate::image_size::ImageSizeProvider;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::{InteractionMode, InteractionState, Modifiers, resolve_origin};
use crate::perf::measure_and_log;
use crate::redraw::RedrawScheduler;
use crate::surface::{SelectionFrame, Surface};
use crate::types::{PixelRect, Point, Selection, Size};

/// Lifecycle callback. Receives the selection in real image pixels.
pub type Callback = Box<dyn FnMut(PixelRect)>;

#[derive(Default)]
pub(crate) struct Callbacks {
    pub on_start: Option<Callback>,
    pub on_change: Option<Callback>,
    pub on_end: Option<Callback>,
}

pub struct Editor<S: Surface> {
    pub(crate) surface: S,
    pub(crate) options: CropOptions,
    /// Resolved once the real image size is known
    pub(crate) config: Option<CropConfig>,
    /// Normalized selection, `None` until one is drawn or configured
    pub(crate) selection: Option<Selection>,
    pub(crate) state: InteractionState,
    /// Modifiers as last reported by a pointer or key event
    pub(crate) held: Modifiers,
    pub(crate) redraw: RedrawScheduler,
    pub(crate) cursor: Cursor,
    pub(crate) callbacks: Callbacks,
}

impl<S: Surface> Editor<S> {
    /// Create an editor over `surface`.
    ///
    /// Fails with `CropError::Detached` when the surface has no parent. When
    /// `options.real` is set the editor is ready immediately.
    pub fn new(surface: S, options: CropOptions) -> CropResult<Self> {
        if !surface.is_attached() {
            return Err(CropError::Detached);
        }

        let real = options.real;
        let mut editor = Self {
            surface,
            options,
            config: None,
            selection: None,
            state: InteractionState::Idle,
            held: Modifiers::NONE,
            redraw: RedrawScheduler::new(),
            cursor: Cursor::Default,
            callbacks: Callbacks::default(),
        };

        match real {
            Some(size) => editor.set_real_size(size)?,
            None => tracing::debug!("Editor created without real size, waiting for probe"),
        }

        Ok(editor)
    }

    pub fn on_start(mut self, callback: impl FnMut(PixelRect) + 'static) -> Self {
        self.callbacks.on_start = Some(Box::new(callback));
        self
    }

    pub fn on_change(mut self, callback: impl FnMut(PixelRect) + 'static) -> Self {
        self.callbacks.on_change = Some(Box::new(callback));
        self
    }

    pub fn on_end(mut self, callback: impl FnMut(PixelRect) + 'static) -> Self {
        self.callbacks.on_end = Some(Box::new(callback));
        self
    }

    // ========================================================================
    // Initialization
    // ========================================================================

    /// Supply the real image size. Allowed once.
    ///
    /// Resolves the configuration and converts the initial pixel selection,
    /// if any, into normalized space.
    pub fn set_real_size(&mut self, real: Size) -> CropResult<()> {
        if self.config.is_some() {
            return Err(CropError::SizeAlreadyResolved);
        }

        let config = CropConfig::resolve(&self.options, real)?;
        tracing::info!(w = real.w, h = real.h, "Real image size resolved");

        if let Some(rect) = self.options.selection {
            let mut selection = CoordinateConverter::pixel_to_normalized(&rect, real);
            selection.clamp_to_unit();
            self.selection = Some(selection);
            self.redraw.request(selection);
        }

        self.config = Some(config);
        Ok(())
    }

    /// Probe the real image size from `provider`, then apply it.
    pub fn resolve_real_size(&mut self, provider: &impl ImageSizeProvider) -> CropResult<()> {
        if self.config.is_some() {
            return Err(CropError::SizeAlreadyResolved);
        }
        let real = provider.image_size()?;
        self.set_real_size(real)
    }

    /// True once the real image size is known.
    pub fn is_ready(&self) -> bool {
        self.config.is_some()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current selection in real image pixels.
    pub fn selection(&self) -> Option<PixelRect> {
        let config = self.config.as_ref()?;
        self.selection
            .as_ref()
            .map(|sel| CoordinateConverter::normalized_to_pixel(sel, config))
    }

    /// Current selection in normalized container coordinates.
    pub fn normalized_selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Replace the selection. Before the real size is known the rectangle
    /// becomes the initial selection instead.
    ///
    /// Like `clear_selection`, any drag in progress ends without callbacks.
    pub fn set_selection(&mut self, rect: PixelRect) {
        let Some(config) = self.config.as_ref() else {
            self.options.selection = Some(rect);
            return;
        };

        let mut selection = CoordinateConverter::pixel_to_normalized(&rect, config.real);
        selection.clamp_to_unit();
        self.selection = Some(selection);
        self.redraw.request(selection);

        if self.state.is_dragging() {
            tracing::debug!("Drag cancelled by set_selection");
            self.state.reset();
            self.apply_cursor(Cursor::Default);
        }
    }

    /// Drop the selection. Any drag in progress ends without callbacks.
    pub fn clear_selection(&mut self) {
        self.state.reset();
        self.selection = None;
        self.redraw.take();
        self.surface.clear_selection();
        self.apply_cursor(Cursor::Default);
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Interaction mode for the currently held modifiers.
    pub fn mode(&self) -> InteractionMode {
        InteractionMode::from_modifiers(self.held)
    }

    pub fn config(&self) -> Option<&CropConfig> {
        self.config.as_ref()
    }

    pub fn options(&self) -> &CropOptions {
        &self.options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// True when a redraw is waiting for the next frame.
    pub fn needs_frame(&self) -> bool {
        self.redraw.is_pending()
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Write the latest pending selection to the surface.
    ///
    /// Called by the host once per display frame. Returns true if anything
    /// was drawn.
    pub fn frame(&mut self) -> bool {
        let Some(selection) = self.redraw.take() else {
            return false;
        };
        let dots = self.config.as_ref().is_some_and(|c| c.dots);
        let pixel = self.selection();

        measure_and_log("editor_frame", TARGET_FRAME_MS, || {
            self.surface.render_selection(&SelectionFrame {
                bbox: selection.to_percent_box(),
                dots,
            });
            if let Some(rect) = pixel {
                let info = format!("{}{}{}", rect.w, INFO_SEPARATOR, rect.h);
                self.surface.set_info(&info);
            }
        });
        true
    }

    // ========================================================================
    // Shared input helpers
    // ========================================================================

    /// Configuration when the editor accepts input: ready and not disabled.
    pub(crate) fn interactive_config(&self) -> Option<&CropConfig> {
        self.config.as_ref().filter(|config| !config.disabled)
    }

    /// Page point to normalized container coordinates.
    pub(crate) fn normalize(&self, page: Point) -> Point {
        let content_box = self.surface.content_box();
        let ctx = CoordinateContext::new(&content_box);
        CoordinateConverter::page_to_normalized(page, &ctx)
    }

    /// Commit a new selection and queue it for the next frame.
    pub(crate) fn commit(&mut self, selection: Selection) {
        self.selection = Some(selection);
        self.redraw.request(selection);
    }

    /// Hover cursor for an idle pointer at `point`.
    pub(crate) fn hover_cursor(&self, point: Point) -> Cursor {
        let Some(config) = self.config.as_ref() else {
            return Cursor::Default;
        };
        let selection = self.selection.as_ref();
        if !HitTester::new(config.margin).hits_selection(point, selection) {
            return Cursor::Default;
        }
        cursor_for(resolve_origin(point, selection, config.margin).as_ref())
    }

    /// Cursor for the active drag at `point`.
    pub(crate) fn drag_cursor(&self, point: Point) -> Cursor {
        match &self.state {
            InteractionState::Idle => self.hover_cursor(point),
            InteractionState::Moving(_) => Cursor::Move,
            InteractionState::Resizing(session) => {
                cursor_for(Some(&session.live_anchor(point, self.mode())))
            }
        }
    }

    /// Forward a cursor hint to the surface when it changed.
    pub(crate) fn apply_cursor(&mut self, cursor: Cursor) {
        if cursor != self.cursor {
            self.cursor = cursor;
            self.surface.set_cursor(cursor);
        }
    }

    pub(crate) fn emit_start(&mut self) {
        if let Some(rect) = self.selection() {
            if let Some(callback) = self.callbacks.on_start.as_mut() {
                callback(rect);
            }
        }
    }

    pub(crate) fn emit_change(&mut self) {
        if let Some(rect) = self.selection() {
            if let Some(callback) = self.callbacks.on_change.as_mut() {
                callback(rect);
            }
        }
    }

    pub(crate) fn emit_end(&mut self) {
        if let Some(rect) = self.selection() {
            if let Some(callback) = self.callbacks.on_end.as_mut() {
                callback(rect);
            }
        }
    }
}
