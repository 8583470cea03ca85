//! croptool - a headless selection-rectangle engine for cropping images.
//!
//! The user drags over an image to draw, move or resize a rectangle. The
//! engine keeps that rectangle in normalized container coordinates and
//! reports it in real image pixels through `on_start`, `on_change` and
//! `on_end` callbacks. Drawing, cursors and event wiring go through the
//! `Surface` trait so any host can embed it.

pub mod config;
pub mod constants;
pub mod cursor;
pub mod editor;
pub mod error;
pub mod hit_testing;
pub mod image_size;
pub mod input;
pub mod perf;
pub mod redraw;
pub mod replay;
pub mod surface;
pub mod types;

pub use config::{CropConfig, CropOptions};
pub use cursor::Cursor;
pub use editor::Editor;
pub use error::{CropError, CropResult};
pub use input::{InteractionMode, InteractionState, Key, Modifiers, PointerEvent};
pub use surface::{HeadlessSurface, SelectionFrame, Surface};
pub use types::{ContentBox, PixelRect, Point, Selection, Size};
