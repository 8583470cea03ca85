//! Error types for croptool.
//!
//! Only construction and configuration can fail. Pointer and keyboard
//! handling never return errors: a miss or a disabled interaction is a
//! plain "not handled" result.

use thiserror::Error;

/// Errors that can occur while building or initialising an editor
#[derive(Error, Debug)]
pub enum CropError {
    /// The container has no parent node to attach to
    #[error("Container is not attached to a parent node")]
    Detached,

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image header could not be read
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Real image size is zero or not finite
    #[error("Invalid image size: {w}x{h}")]
    InvalidImageSize { w: f64, h: f64 },

    /// Neither a real size nor an image to probe was given
    #[error("No real image size and no image to probe")]
    MissingImageSize,

    /// Real image size may only be supplied once
    #[error("Image size already resolved")]
    SizeAlreadyResolved,
}

/// Result type alias for croptool operations
pub type CropResult<T> = Result<T, CropError>;
