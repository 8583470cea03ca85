//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestEditorBuilder` - Builder pattern for editors over a recording surface
//! - `TestEditor` - Drives the editor in normalized coordinates and records callbacks
//! - `RecordingSurface` - A `Surface` that keeps every call for inspection

use croptool::image_size::FixedSize;
use croptool::surface::{SelectionFrame, Surface};
use croptool::{
    ContentBox, CropOptions, CropResult, Cursor, Editor, Modifiers, PixelRect, Point,
    PointerEvent, Selection, Size,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Container offset on the page used by default
pub const OFFSET: Point = Point::new(50.0, 40.0);
/// Container size and real image size used by default
pub const SIZE: Size = Size::new(400.0, 300.0);

pub const EPS: f64 = 1e-9;

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

pub fn assert_selection(actual: Selection, expected: (f64, f64, f64, f64)) {
    let (x, y, w, h) = expected;
    assert!(
        approx(actual.x, x) && approx(actual.y, y) && approx(actual.w, w) && approx(actual.h, h),
        "expected ({x}, {y}, {w}, {h}), got {actual:?}"
    );
}

// ============================================================================
// RecordingSurface
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct SurfaceLog {
    pub frames: Vec<SelectionFrame>,
    pub cursors: Vec<Cursor>,
    pub info: Vec<String>,
    pub cleared: usize,
}

pub struct RecordingSurface {
    pub attached: bool,
    pub content_box: ContentBox,
    pub log: Rc<RefCell<SurfaceLog>>,
}

impl Surface for RecordingSurface {
    fn is_attached(&self) -> bool {
        self.attached
    }

    fn content_box(&self) -> ContentBox {
        self.content_box
    }

    fn render_selection(&mut self, frame: &SelectionFrame) {
        self.log.borrow_mut().frames.push(*frame);
    }

    fn clear_selection(&mut self) {
        self.log.borrow_mut().cleared += 1;
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.log.borrow_mut().cursors.push(cursor);
    }

    fn set_info(&mut self, text: &str) {
        self.log.borrow_mut().info.push(text.to_string());
    }
}

// ============================================================================
// Callback recording
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Start(PixelRect),
    Change(PixelRect),
    End(PixelRect),
}

// ============================================================================
// TestEditorBuilder
// ============================================================================

/// Builder for test editors.
///
/// # Example
/// ```ignore
/// let mut t = TestEditorBuilder::new()
///     .with_selection(100, 75, 200, 150)
///     .with_margin(0.02)
///     .build();
/// t.down(0.25, 0.25);
/// ```
pub struct TestEditorBuilder {
    options: CropOptions,
    content_box: ContentBox,
    attached: bool,
}

impl Default for TestEditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEditorBuilder {
    /// Real size 400×300 in a 400×300 container at (50, 40).
    pub fn new() -> Self {
        Self {
            options: CropOptions {
                real: Some(SIZE),
                ..Default::default()
            },
            content_box: ContentBox::new(OFFSET, SIZE),
            attached: true,
        }
    }

    pub fn with_selection(mut self, x: u32, y: u32, w: u32, h: u32) -> Self {
        self.options.selection = Some(PixelRect::new(x, y, w, h));
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.options.margin = margin;
        self
    }

    pub fn with_min(mut self, w: f64, h: f64) -> Self {
        self.options.min = Size::new(w, h);
        self
    }

    pub fn with_max(mut self, w: f64, h: f64) -> Self {
        self.options.max = Some(Size::new(w, h));
        self
    }

    pub fn with_options(mut self, f: impl FnOnce(&mut CropOptions)) -> Self {
        f(&mut self.options);
        self
    }

    /// No real size: the editor waits for a probe.
    pub fn without_real_size(mut self) -> Self {
        self.options.real = None;
        self
    }

    pub fn detached(mut self) -> Self {
        self.attached = false;
        self
    }

    pub fn try_build(self) -> CropResult<TestEditor> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let surface_log = Rc::new(RefCell::new(SurfaceLog::default()));

        let surface = RecordingSurface {
            attached: self.attached,
            content_box: self.content_box,
            log: Rc::clone(&surface_log),
        };

        let (on_start, on_change, on_end) =
            (Rc::clone(&events), Rc::clone(&events), Rc::clone(&events));
        let editor = Editor::new(surface, self.options)?
            .on_start(move |rect| on_start.borrow_mut().push(Event::Start(rect)))
            .on_change(move |rect| on_change.borrow_mut().push(Event::Change(rect)))
            .on_end(move |rect| on_end.borrow_mut().push(Event::End(rect)));

        Ok(TestEditor {
            editor,
            content_box: self.content_box,
            events,
            surface_log,
        })
    }

    pub fn build(self) -> TestEditor {
        self.try_build().expect("editor should build")
    }
}

// ============================================================================
// TestEditor
// ============================================================================

pub struct TestEditor {
    pub editor: Editor<RecordingSurface>,
    pub content_box: ContentBox,
    pub events: Rc<RefCell<Vec<Event>>>,
    pub surface_log: Rc<RefCell<SurfaceLog>>,
}

impl TestEditor {
    /// Page position for a normalized container point.
    pub fn page(&self, x: f64, y: f64) -> Point {
        let ContentBox { offset, size } = self.content_box;
        Point::new(offset.x + x * size.w, offset.y + y * size.h)
    }

    fn mouse(&self, x: f64, y: f64, modifiers: Modifiers) -> PointerEvent {
        let page = self.page(x, y);
        PointerEvent::mouse(page.x, page.y).with_modifiers(modifiers)
    }

    pub fn down(&mut self, x: f64, y: f64) -> bool {
        self.down_with(x, y, Modifiers::NONE)
    }

    pub fn down_with(&mut self, x: f64, y: f64, modifiers: Modifiers) -> bool {
        let event = self.mouse(x, y, modifiers);
        self.editor.pointer_down(&event)
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> bool {
        self.move_with(x, y, Modifiers::NONE)
    }

    pub fn move_with(&mut self, x: f64, y: f64, modifiers: Modifiers) -> bool {
        let event = self.mouse(x, y, modifiers);
        self.editor.pointer_move(&event)
    }

    pub fn up(&mut self, x: f64, y: f64) -> bool {
        let event = self.mouse(x, y, Modifiers::NONE);
        self.editor.pointer_up(&event)
    }

    /// Current normalized selection. Panics if there is none.
    pub fn selection(&self) -> Selection {
        self.editor
            .normalized_selection()
            .expect("editor should have a selection")
    }

    pub fn pixel(&self) -> PixelRect {
        self.editor.selection().expect("editor should have a selection")
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn clear_events(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn log(&self) -> SurfaceLog {
        self.surface_log.borrow().clone()
    }

    pub fn resolve_with(&mut self, w: f64, h: f64) -> CropResult<()> {
        self.editor.resolve_real_size(&FixedSize(Size::new(w, h)))
    }
}
