//! Crate-wide constants.
//!
//! Centralizes default option values and thresholds so the interaction code
//! carries no magic numbers.

// ============================================================================
// Option Defaults
// ============================================================================

/// Default hit tolerance around selection edges (normalized units)
pub const DEFAULT_MARGIN: f64 = 0.01;

/// Default minimum selection size in pixels
pub const DEFAULT_MIN_SIZE: f64 = 0.0;

// ============================================================================
// Anchor Fractions
// ============================================================================

/// Fixed point sits on the start (left/top) edge
pub const ANCHOR_START: f64 = 0.0;

/// Axis is free; the point sits mid-selection
pub const ANCHOR_FREE: f64 = 0.5;

/// Fixed point sits on the end (right/bottom) edge
pub const ANCHOR_END: f64 = 1.0;

// ============================================================================
// Rendering
// ============================================================================

/// Target frame time for 60 FPS, used as the redraw budget
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Separator used in the pixel-size information text
pub const INFO_SEPARATOR: &str = " × ";
