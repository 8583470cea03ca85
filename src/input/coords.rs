//! Coordinate conversion between page pixels, normalized container space and
//! real image pixels.
//!
//! All formulas live here so the interaction code never repeats them.

use crate::config::CropConfig;
use crate::types::{ContentBox, PixelRect, Point, Selection, Size};

/// Context needed for page → normalized conversions
pub struct CoordinateContext<'a> {
    pub content_box: &'a ContentBox,
}

impl<'a> CoordinateContext<'a> {
    #[inline]
    pub fn new(content_box: &'a ContentBox) -> Self {
        Self { content_box }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a page position to normalized container coordinates.
    ///
    /// Not clamped: points outside the container map outside `0..=1`.
    #[inline]
    pub fn page_to_normalized(page: Point, ctx: &CoordinateContext<'_>) -> Point {
        let ContentBox { offset, size } = *ctx.content_box;
        Point::new((page.x - offset.x) / size.w, (page.y - offset.y) / size.h)
    }

    /// Convert a normalized selection to real image pixels.
    ///
    /// Each dimension is rounded and clamped into the configured min/max.
    /// A rectangle overflowing the image is shifted back (never shrunk), and
    /// absolute values drop any `-0` left over from the arithmetic.
    pub fn normalized_to_pixel(selection: &Selection, config: &CropConfig) -> PixelRect {
        let real = config.real;

        let w = (selection.w * real.w)
            .round()
            .max(config.min.w)
            .min(config.max.w);
        let h = (selection.h * real.h)
            .round()
            .max(config.min.h)
            .min(config.max.h);

        let mut x = (selection.x * real.w).round();
        let mut y = (selection.y * real.h).round();

        if x + w > real.w {
            x -= x + w - real.w;
        }
        if y + h > real.h {
            y -= y + h - real.h;
        }

        PixelRect::new(
            x.abs() as u32,
            y.abs() as u32,
            w.abs() as u32,
            h.abs() as u32,
        )
    }

    /// Convert a pixel rectangle to normalized coordinates. Plain division.
    #[inline]
    pub fn pixel_to_normalized(rect: &PixelRect, real: Size) -> Selection {
        Selection::new(
            f64::from(rect.x) / real.w,
            f64::from(rect.y) / real.h,
            f64::from(rect.w) / real.w,
            f64::from(rect.h) / real.h,
        )
    }
}
