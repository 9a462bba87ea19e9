//! Bucket tool: turns a fill on a canvas snapshot into a history operation.

use log::debug;

use crate::config::FillConfig;
use crate::error::FillError;
use crate::fill::{flood_fill_detailed, vector_flood_fill_with, PixelBuffer};
use crate::history::{CanvasOp, History};

/// Vector-fill `snapshot` at `(x, y)` and wrap the path as a stroke.
///
/// Returns `None` when the fill is a no-op (the seed already has `color`).
pub fn vector_fill_op(
    snapshot: &PixelBuffer,
    x: usize,
    y: usize,
    color: u32,
    config: &FillConfig,
) -> Result<Option<CanvasOp>, FillError> {
    let path = vector_flood_fill_with(snapshot, x, y, &config.vector_options(color))?;
    if path.is_empty() {
        return Ok(None);
    }
    Ok(Some(CanvasOp::Path {
        path,
        paint: config.vector_paint(color),
    }))
}

/// Raster-fill `snapshot` at `(x, y)` and wrap the result as a bitmap snapshot.
///
/// Returns `None` when the fill is a no-op.
pub fn raster_fill_op(
    snapshot: &PixelBuffer,
    x: usize,
    y: usize,
    color: u32,
    config: &FillConfig,
) -> Result<Option<CanvasOp>, FillError> {
    let result = flood_fill_detailed(snapshot, x, y, &config.raster_options(color))?;
    if result.pixel_count == 0 {
        return Ok(None);
    }
    Ok(Some(CanvasOp::Bitmap(result.image)))
}

/// Run the vector bucket fill and record it. Returns whether anything was recorded.
pub fn bucket_fill(
    history: &mut History,
    snapshot: &PixelBuffer,
    x: usize,
    y: usize,
    color: u32,
    config: &FillConfig,
) -> Result<bool, FillError> {
    match vector_fill_op(snapshot, x, y, color, config)? {
        Some(op) => {
            history.push(op);
            Ok(true)
        }
        None => {
            debug!("bucket fill at ({}, {}) left the canvas unchanged", x, y);
            Ok(false)
        }
    }
}
