//! Editor options and the resolved per-instance configuration.
//!
//! `CropOptions` is what a caller writes (or loads from JSON): every field
//! has a default, pixel units throughout. `CropConfig` is derived from it
//! once the real image size is known and never changes afterwards.

use crate::constants::{DEFAULT_MARGIN, DEFAULT_MIN_SIZE};
use crate::error::{CropError, CropResult};
use crate::types::{Axis, PixelRect, Size};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Options (user input)
// ============================================================================

/// Constructor input. Unknown fields are rejected so typos surface early.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CropOptions {
    /// Real image size in pixels; probed from the image when absent
    pub real: Option<Size>,
    /// Minimum selection size in pixels
    pub min: Size,
    /// Maximum selection size in pixels; the real size when absent
    pub max: Option<Size>,
    /// Initial selection in pixels
    pub selection: Option<PixelRect>,
    /// Edge hit tolerance in normalized units
    pub margin: f64,
    /// Locked pixel aspect ratio (width / height) for corner resizes
    pub aspect_ratio: Option<f64>,
    pub movable: bool,
    pub resizable: bool,
    /// Keep an existing selection when the user presses outside it
    pub persistent: bool,
    /// Show drag handles on the selection
    pub dots: bool,
    /// Honour Alt key-down/up for the center-resize mode
    pub keyboard: bool,
    /// Ignore all input
    pub disabled: bool,
}

impl Default for CropOptions {
    fn default() -> Self {
        Self {
            real: None,
            min: Size::new(DEFAULT_MIN_SIZE, DEFAULT_MIN_SIZE),
            max: None,
            selection: None,
            margin: DEFAULT_MARGIN,
            aspect_ratio: None,
            movable: true,
            resizable: true,
            persistent: true,
            dots: true,
            keyboard: true,
            disabled: false,
        }
    }
}

impl CropOptions {
    /// Parse options from a JSON string.
    pub fn from_json(json: &str) -> CropResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> CropResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Save options to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> CropResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ============================================================================
// Resolved configuration
// ============================================================================

/// A size limit in pixels together with its normalized counterpart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeLimit {
    pub w: f64,
    pub h: f64,
    /// `w` as a fraction of the real width
    pub wp: f64,
    /// `h` as a fraction of the real height
    pub hp: f64,
}

impl SizeLimit {
    pub fn new(size: Size, real: Size) -> Self {
        Self {
            w: size.w,
            h: size.h,
            wp: size.w / real.w,
            hp: size.h / real.h,
        }
    }

    /// Normalized limit along an axis.
    #[inline]
    pub fn normalized(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.wp,
            Axis::Vertical => self.hp,
        }
    }
}

/// Immutable per-instance configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct CropConfig {
    pub real: Size,
    pub min: SizeLimit,
    pub max: SizeLimit,
    pub margin: f64,
    pub aspect_ratio: Option<f64>,
    pub movable: bool,
    pub resizable: bool,
    pub persistent: bool,
    pub dots: bool,
    pub keyboard: bool,
    pub disabled: bool,
}

impl CropConfig {
    /// Resolve options against a known real image size.
    ///
    /// Limits are taken as given: a `max` smaller than `min` is not rejected,
    /// the resize math lets `max` win.
    pub fn resolve(options: &CropOptions, real: Size) -> CropResult<Self> {
        if real.is_degenerate() {
            return Err(CropError::InvalidImageSize {
                w: real.w,
                h: real.h,
            });
        }

        let max = options.max.unwrap_or(real);
        let aspect_ratio = options
            .aspect_ratio
            .filter(|ratio| ratio.is_finite() && *ratio > 0.0);

        Ok(Self {
            real,
            min: SizeLimit::new(options.min, real),
            max: SizeLimit::new(max, real),
            margin: options.margin,
            aspect_ratio,
            movable: options.movable,
            resizable: options.resizable,
            persistent: options.persistent,
            dots: options.dots,
            keyboard: options.keyboard,
            disabled: options.disabled,
        })
    }
}
