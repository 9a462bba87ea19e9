//! Bucketfill
//!
//! Scan-line flood fill engine behind the bucket tool of a touch drawing
//! app, with Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! Fills operate on [`PixelBuffer`](fill::PixelBuffer): packed `0xAARRGGBB`
//! pixels, row-major. Interleaved RGBA bytes and `(height, width, 4)`
//! ndarray images convert to and from it.
//!
//! ## Fill Modes
//! - **Raster**: returns a filled copy of the buffer
//! - **Vector**: returns a path of scan-line segments covering the region,
//!   rendered as a stroke by the canvas
//!
//! Both fills are synchronous and CPU-bound. Run them off the UI thread;
//! independent buffers can be filled in parallel.
//!
//! ## Canvas Model
//! Strokes ([`path`], [`paint`]) and fill results are recorded as
//! [`history::CanvasOp`]s in a bounded undo/redo [`history::History`],
//! exported to and imported from SVG by [`svg`].

pub mod bucket;
pub mod config;
pub mod error;
pub mod fill;
pub mod history;
pub mod paint;
pub mod path;
pub mod svg;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::FillConfig;
pub use error::{Error, FillError, Result};
pub use fill::{flood_fill, vector_flood_fill, PixelBuffer};
pub use path::{Path, PathOp};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::fill::{
        flood_fill_owned, vector_flood_fill_with, FillOptions, PixelBuffer,
        DEFAULT_RASTER_TOLERANCE, DEFAULT_VECTOR_TOLERANCE,
    };
    use crate::FillError;

    fn to_py_err(err: FillError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    // ========================================================================
    // Raster Fill
    // ========================================================================

    /// Flood fill an RGBA u8 image from (x, y).
    ///
    /// # Arguments
    /// * `image` - RGBA image (height, width, 4)
    /// * `x`, `y` - Seed pixel
    /// * `color` - Fill color as 0xAARRGGBB
    /// * `tolerance` - Per-channel tolerance (default: 10)
    ///
    /// Returns a new RGBA image; the input is not modified.
    #[pyfunction]
    #[pyo3(signature = (image, x, y, color, tolerance=DEFAULT_RASTER_TOLERANCE))]
    pub fn flood_fill_rgba<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        x: usize,
        y: usize,
        color: u32,
        tolerance: u8,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let buffer = PixelBuffer::from_rgba_array(image.as_array()).map_err(to_py_err)?;
        let options = FillOptions::new(color).with_tolerance(tolerance);
        let result = py
            .allow_threads(|| flood_fill_owned(buffer, x, y, &options))
            .map_err(to_py_err)?;
        Ok(result.image.to_rgba_array().into_pyarray(py))
    }

    // ========================================================================
    // Vector Fill
    // ========================================================================

    /// Trace the region around (x, y) as SVG path data.
    ///
    /// Returns an empty string if the seed already has `color`.
    #[pyfunction]
    #[pyo3(signature = (image, x, y, color, tolerance=DEFAULT_VECTOR_TOLERANCE))]
    pub fn vector_flood_fill<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        x: usize,
        y: usize,
        color: u32,
        tolerance: u8,
    ) -> PyResult<String> {
        let buffer = PixelBuffer::from_rgba_array(image.as_array()).map_err(to_py_err)?;
        let options = FillOptions::new(color).with_tolerance(tolerance);
        let path = py
            .allow_threads(|| vector_flood_fill_with(&buffer, x, y, &options))
            .map_err(to_py_err)?;
        Ok(path.to_string())
    }

    #[pymodule]
    pub fn bucketfill(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(flood_fill_rgba, m)?)?;
        m.add_function(wrap_pyfunction!(vector_flood_fill, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::bucketfill;
