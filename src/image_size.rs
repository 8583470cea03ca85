//! Real image size discovery.
//!
//! When options carry no `real` size the editor waits for one. A provider
//! reads it from wherever the image lives; the file provider only decodes
//! the header, not the pixels.

use crate::error::{CropError, CropResult};
use crate::types::Size;
use std::path::{Path, PathBuf};

pub trait ImageSizeProvider {
    fn image_size(&self) -> CropResult<Size>;
}

/// Reads dimensions from an image file on disk.
#[derive(Clone, Debug)]
pub struct ImageFile {
    path: PathBuf,
}

impl ImageFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSizeProvider for ImageFile {
    fn image_size(&self) -> CropResult<Size> {
        let (w, h) = image::image_dimensions(&self.path)?;
        let size = Size::new(f64::from(w), f64::from(h));
        if size.is_degenerate() {
            return Err(CropError::InvalidImageSize {
                w: size.w,
                h: size.h,
            });
        }
        tracing::debug!(path = ?self.path, w, h, "Probed image size");
        Ok(size)
    }
}

/// A provider with a size known up front.
#[derive(Clone, Copy, Debug)]
pub struct FixedSize(pub Size);

impl ImageSizeProvider for FixedSize {
    fn image_size(&self) -> CropResult<Size> {
        Ok(self.0)
    }
}
