//! Raster flood fill: paints the region into a copy of the buffer.
//!
//! The caller's buffer is never touched. [`flood_fill`] copies it first;
//! [`flood_fill_owned`] consumes a buffer the caller no longer needs and
//! fills that instead.

use log::{debug, trace};

use super::pixel_buffer::PixelBuffer;
use super::scanline::{scanline_fill, FillOptions, FillVisitor};
use crate::error::FillError;

/// Default tolerance of the raster bucket fill. Looser than
/// [`DEFAULT_VECTOR_TOLERANCE`](super::vector::DEFAULT_VECTOR_TOLERANCE) so
/// anti-aliased edges get swallowed by the fill.
pub const DEFAULT_RASTER_TOLERANCE: u8 = 10;

/// Raster fill result with metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FloodFillResult {
    /// The filled buffer
    pub image: PixelBuffer,
    /// Number of repainted pixels (0 for a no-op fill)
    pub pixel_count: usize,
    /// Bounds of the repainted region as origin and size: (x, y, width, height)
    pub bounds: Option<(usize, usize, usize, usize)>,
}

/// Writes the fill color into every visited pixel.
struct Painter {
    image: PixelBuffer,
    fill_color: u32,
}

impl FillVisitor for Painter {
    #[inline]
    fn pixel(&self, index: usize) -> u32 {
        self.image.pixels()[index]
    }

    #[inline]
    fn visit(&mut self, index: usize) {
        self.image.pixels_mut()[index] = self.fill_color;
    }
}

/// Flood fill a copy of `buffer` starting at `(x, y)`.
///
/// # Arguments
/// * `buffer` - Source pixels, left untouched
/// * `x`, `y` - Seed coordinate, must lie inside the buffer
/// * `fill_color` - ARGB color to paint
/// * `tolerance` - Per-channel tolerance (0 = exact match)
///
/// # Returns
/// The filled copy. If the seed already has `fill_color` the copy is
/// returned unchanged.
pub fn flood_fill(
    buffer: &PixelBuffer,
    x: usize,
    y: usize,
    fill_color: u32,
    tolerance: u8,
) -> Result<PixelBuffer, FillError> {
    let options = FillOptions::new(fill_color).with_tolerance(tolerance);
    flood_fill_detailed(buffer, x, y, &options).map(|result| result.image)
}

/// Flood fill a copy of `buffer` with full options and fill statistics.
pub fn flood_fill_detailed(
    buffer: &PixelBuffer,
    x: usize,
    y: usize,
    options: &FillOptions,
) -> Result<FloodFillResult, FillError> {
    // Reject a bad seed before paying for the copy.
    buffer.seed(x, y)?;
    flood_fill_owned(buffer.try_clone()?, x, y, options)
}

/// Flood fill `buffer` itself, taking ownership of it.
pub fn flood_fill_owned(
    buffer: PixelBuffer,
    x: usize,
    y: usize,
    options: &FillOptions,
) -> Result<FloodFillResult, FillError> {
    let seed_color = buffer.seed(x, y)?;

    if seed_color == options.fill_color {
        trace!("raster fill at ({}, {}) is a no-op: seed already {:#010x}", x, y, seed_color);
        return Ok(FloodFillResult {
            image: buffer,
            pixel_count: 0,
            bounds: None,
        });
    }

    let (width, height) = (buffer.width(), buffer.height());
    let matcher = options.matcher(seed_color);
    let mut painter = Painter {
        image: buffer,
        fill_color: options.fill_color,
    };
    let stats = scanline_fill(width, height, x, y, matcher, &mut painter)?;

    debug!(
        "raster fill at ({}, {}): {} pixels in {} ranges, tolerance {:?}",
        x, y, stats.pixel_count, stats.range_count, options.tolerance
    );

    Ok(FloodFillResult {
        image: painter.image,
        pixel_count: stats.pixel_count,
        bounds: stats.bounds,
    })
}
