//! Bucket fill engine.
//!
//! Two fillers share one scan-line skeleton:
//! - **Raster**: paints the region into a copy of the buffer (`raster.rs`)
//! - **Vector**: traces the region as scan-line path segments (`vector.rs`)
//!
//! ## Buffer Format
//!
//! | Item | Layout |
//! |------|--------|
//! | Pixel | `u32`, `0xAARRGGBB` |
//! | Buffer | row-major, index `y * width + x` |
//! | Tolerance | per-channel max absolute difference on R, G, B |
//!
//! Alpha never takes part in matching. Both fillers are pure functions of
//! their inputs: each call allocates its own visited set and worklist, so
//! fills on independent buffers can run on separate threads.

pub mod pixel_buffer;
pub mod tolerance;
pub mod scanline;
pub mod raster;
pub mod vector;

pub use pixel_buffer::PixelBuffer;
pub use raster::{flood_fill, flood_fill_detailed, flood_fill_owned, FloodFillResult, DEFAULT_RASTER_TOLERANCE};
pub use scanline::{scanline_fill, FillOptions, FillRange, FillStats, FillVisitor};
pub use tolerance::{argb, matches, ColorMatcher, Rgb, Tolerance};
pub use vector::{vector_flood_fill, vector_flood_fill_with, DEFAULT_VECTOR_TOLERANCE};
