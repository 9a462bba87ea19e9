//! Vector flood fill: traces the region as a path instead of painting it.
//!
//! Region discovery is identical to the raster fill. Each half of every
//! linear walk becomes a `move_to` at the walk's seed pixel followed by a
//! `line_to` at the last pixel reached, so the path is a stack of
//! horizontal scan-line segments covering the region. Coordinates are
//! pixel positions in buffer space. The path is left open.

use log::{debug, trace};

use super::pixel_buffer::PixelBuffer;
use super::scanline::{scanline_fill, FillOptions, FillVisitor};
use crate::error::FillError;
use crate::path::Path;

/// Default tolerance of the vector bucket fill.
pub const DEFAULT_VECTOR_TOLERANCE: u8 = 1;

/// Emits a segment per walk against a read-only buffer.
struct Tracer<'a> {
    buffer: &'a PixelBuffer,
    path: Path,
}

impl Tracer<'_> {
    #[inline]
    fn point(&self, index: usize) -> (f32, f32) {
        let (x, y) = self.buffer.coords_of(index);
        (x as f32, y as f32)
    }
}

impl FillVisitor for Tracer<'_> {
    #[inline]
    fn pixel(&self, index: usize) -> u32 {
        self.buffer.pixels()[index]
    }

    fn walk(&mut self, from: usize, to: usize) {
        let (fx, fy) = self.point(from);
        let (tx, ty) = self.point(to);
        self.path.move_to(fx, fy);
        self.path.line_to(tx, ty);
    }
}

/// Trace the region around `(x, y)` as a path.
///
/// # Arguments
/// * `buffer` - Source pixels, read only
/// * `x`, `y` - Seed coordinate, must lie inside the buffer
/// * `fill_color` - ARGB color of the stroke that will render the path
/// * `tolerance` - Per-channel tolerance (0 = exact match)
///
/// # Returns
/// An open path of move/line operations, empty if the seed already has
/// `fill_color`.
pub fn vector_flood_fill(
    buffer: &PixelBuffer,
    x: usize,
    y: usize,
    fill_color: u32,
    tolerance: u8,
) -> Result<Path, FillError> {
    let options = FillOptions::new(fill_color).with_tolerance(tolerance);
    vector_flood_fill_with(buffer, x, y, &options)
}

/// Trace the region around `(x, y)` with full options.
pub fn vector_flood_fill_with(
    buffer: &PixelBuffer,
    x: usize,
    y: usize,
    options: &FillOptions,
) -> Result<Path, FillError> {
    let seed_color = buffer.seed(x, y)?;

    if seed_color == options.fill_color {
        trace!("vector fill at ({}, {}) is a no-op: seed already {:#010x}", x, y, seed_color);
        return Ok(Path::new());
    }

    let mut tracer = Tracer {
        buffer,
        path: Path::new(),
    };
    let stats = scanline_fill(
        buffer.width(),
        buffer.height(),
        x,
        y,
        options.matcher(seed_color),
        &mut tracer,
    )?;

    debug!(
        "vector fill at ({}, {}): {} pixels in {} ranges, {} path ops",
        x,
        y,
        stats.pixel_count,
        stats.range_count,
        tracer.path.len()
    );

    Ok(tracer.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathOp;

    const WHITE: u32 = 0xFFFFFFFF;
    const BLACK: u32 = 0xFF000000;
    const RED: u32 = 0xFFFF0000;

    #[test]
    fn test_single_row() {
        let buffer = PixelBuffer::new(5, 1, WHITE).unwrap();
        let path = vector_flood_fill(&buffer, 2, 0, RED, 0).unwrap();

        assert_eq!(
            path.ops(),
            &[
                PathOp::MoveTo { x: 2.0, y: 0.0 },
                PathOp::LineTo { x: 0.0, y: 0.0 },
                PathOp::MoveTo { x: 2.0, y: 0.0 },
                PathOp::LineTo { x: 4.0, y: 0.0 },
            ]
        );
    }

    #[test]
    fn test_one_by_one_touches_only_origin() {
        let buffer = PixelBuffer::new(1, 1, WHITE).unwrap();
        let path = vector_flood_fill(&buffer, 0, 0, RED, 0).unwrap();

        assert!(!path.is_empty());
        for op in path.ops() {
            assert_eq!(op.end_point(), (0.0, 0.0));
        }
    }

    #[test]
    fn test_no_op_returns_empty_path() {
        let buffer = PixelBuffer::new(3, 3, RED).unwrap();
        let path = vector_flood_fill(&buffer, 1, 1, RED, 0).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_rows_map_to_y_coordinates() {
        // Two columns wide, black wall on the right of row 1
        let mut buffer = PixelBuffer::new(3, 3, WHITE).unwrap();
        buffer.set(2, 1, BLACK);
        let path = vector_flood_fill(&buffer, 0, 0, RED, 0).unwrap();

        let ys: Vec<f32> = path.ops().iter().map(|op| op.end_point().1).collect();
        assert!(ys.contains(&0.0) && ys.contains(&1.0) && ys.contains(&2.0));

        let bounds = path.extents().unwrap();
        assert_eq!(bounds, (0.0, 0.0, 2.0, 2.0));
    }

    #[test]
    fn test_extents_versus_fill_bounds() {
        // 2x3 white block at (2, 2) inside a black frame
        let mut buffer = PixelBuffer::new(5, 6, BLACK).unwrap();
        for y in 2..5 {
            for x in 2..4 {
                buffer.set(x, y, WHITE);
            }
        }

        let path = vector_flood_fill(&buffer, 2, 2, RED, 0).unwrap();
        let raster = crate::fill::flood_fill_detailed(&buffer, 2, 2, &FillOptions::new(RED)).unwrap();

        // Corner coordinates for the path, origin and size for the raster fill
        assert_eq!(path.extents(), Some((2.0, 2.0, 3.0, 4.0)));
        assert_eq!(raster.bounds, Some((2, 2, 2, 3)));
    }

    #[test]
    fn test_buffer_is_not_modified() {
        let buffer = PixelBuffer::new(4, 4, WHITE).unwrap();
        let before = buffer.clone();
        vector_flood_fill(&buffer, 1, 1, RED, DEFAULT_VECTOR_TOLERANCE).unwrap();
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_out_of_bounds_seed_is_rejected() {
        let buffer = PixelBuffer::new(2, 2, WHITE).unwrap();
        assert!(matches!(
            vector_flood_fill(&buffer, 0, 5, RED, 0),
            Err(FillError::SeedOutOfBounds { .. })
        ));
    }
}
