//! WebAssembly exports for the bucket fill.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Images are
//! passed as flat RGBA byte arrays (length = width * height * 4), colors as
//! `0xAARRGGBB` numbers.

use wasm_bindgen::prelude::*;

use crate::fill::{flood_fill_owned, vector_flood_fill_with, FillOptions, PixelBuffer};
use crate::FillError;

fn to_js_err(err: FillError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ============================================================================
// Raster Fill
// ============================================================================

/// Flood fill an RGBA image from (x, y).
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `x`, `y` - Seed pixel
/// * `color` - Fill color as 0xAARRGGBB
/// * `tolerance` - Per-channel tolerance (0-255)
///
/// # Returns
/// Flat array of RGBA bytes with the region filled
#[wasm_bindgen]
pub fn flood_fill_rgba_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    color: u32,
    tolerance: u8,
) -> Result<Vec<u8>, JsValue> {
    let buffer = PixelBuffer::from_rgba_bytes(width, height, data).map_err(to_js_err)?;
    let options = FillOptions::new(color).with_tolerance(tolerance);
    let result = flood_fill_owned(buffer, x, y, &options).map_err(to_js_err)?;
    Ok(result.image.to_rgba_bytes())
}

// ============================================================================
// Vector Fill
// ============================================================================

/// Trace the region around (x, y) as SVG path data.
///
/// # Returns
/// Path data (`M`/`L` commands), empty if the seed already has `color`
#[wasm_bindgen]
pub fn vector_flood_fill_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    color: u32,
    tolerance: u8,
) -> Result<String, JsValue> {
    let buffer = PixelBuffer::from_rgba_bytes(width, height, data).map_err(to_js_err)?;
    let options = FillOptions::new(color).with_tolerance(tolerance);
    let path = vector_flood_fill_with(&buffer, x, y, &options).map_err(to_js_err)?;
    Ok(path.to_string())
}
