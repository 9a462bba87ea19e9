//! Packed ARGB pixel buffer.
//!
//! Pixels are stored row-major as `0xAARRGGBB` words and addressed by the
//! linear index `y * width + x`. Conversions to and from interleaved RGBA
//! bytes (and `(height, width, 4)` ndarray views) are provided for the
//! snapshot facility that hands canvases to the fillers.

use ndarray::{Array3, ArrayView3};
use rayon::prelude::*;

use crate::error::FillError;

/// A dense `width * height` grid of ARGB pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Create a buffer with every pixel set to `color`.
    pub fn new(width: usize, height: usize, color: u32) -> Result<Self, FillError> {
        let len = pixel_count(width, height, 1).ok_or(FillError::InvalidDimensions {
            width,
            height,
            len: 0,
        })?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| FillError::Allocation { pixels: len })?;
        pixels.resize(len, color);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap an existing row-major ARGB vector.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u32>) -> Result<Self, FillError> {
        if pixel_count(width, height, 1) != Some(pixels.len()) {
            return Err(FillError::InvalidDimensions {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a buffer from interleaved RGBA bytes (4 bytes per pixel).
    ///
    /// # Arguments
    /// * `data` - RGBA bytes, length must be `width * height * 4`
    pub fn from_rgba_bytes(width: usize, height: usize, data: &[u8]) -> Result<Self, FillError> {
        if pixel_count(width, height, 4) != Some(data.len()) {
            return Err(FillError::InvalidDimensions {
                width,
                height,
                len: data.len(),
            });
        }

        let pixels = data
            .par_chunks_exact(4)
            .map(|px| u32::from_be_bytes([px[3], px[0], px[1], px[2]]))
            .collect();

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Flatten to interleaved RGBA bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.pixels.len() * 4];
        out.par_chunks_exact_mut(4)
            .zip(self.pixels.par_iter())
            .for_each(|(dst, &argb)| {
                let [a, r, g, b] = argb.to_be_bytes();
                dst.copy_from_slice(&[r, g, b, a]);
            });
        out
    }

    /// Build a buffer from an RGBA image of shape `(height, width, 4)`.
    pub fn from_rgba_array(image: ArrayView3<u8>) -> Result<Self, FillError> {
        let (height, width, channels) = image.dim();
        if channels != 4 {
            return Err(FillError::InvalidDimensions {
                width,
                height,
                len: image.len(),
            });
        }

        match image.as_slice() {
            Some(data) => Self::from_rgba_bytes(width, height, data),
            None => {
                // Non-standard layout (e.g. a transposed view)
                let data: Vec<u8> = image.iter().copied().collect();
                Self::from_rgba_bytes(width, height, &data)
            }
        }
    }

    /// Convert to an RGBA image of shape `(height, width, 4)`.
    pub fn to_rgba_array(&self) -> Array3<u8> {
        Array3::from_shape_fn((self.height, self.width, 4), |(y, x, c)| {
            let [a, r, g, b] = self.pixels[y * self.width + x].to_be_bytes();
            [r, g, b, a][c]
        })
    }

    /// Copy the buffer, reporting allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self, FillError> {
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(self.pixels.len())
            .map_err(|_| FillError::Allocation {
                pixels: self.pixels.len(),
            })?;
        pixels.extend_from_slice(&self.pixels);

        Ok(Self {
            width: self.width,
            height: self.height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Linear index of `(x, y)`. The coordinate is not bounds-checked.
    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Inverse of [`index_of`](Self::index_of): `x = index mod width`,
    /// `y = (index - x) / width`.
    #[inline]
    pub fn coords_of(&self, index: usize) -> (usize, usize) {
        let x = index % self.width;
        (x, (index - x) / self.width)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if self.contains(x, y) {
            Some(self.pixels[self.index_of(x, y)])
        } else {
            None
        }
    }

    /// Pixel at `(x, y)`, or [`FillError::SeedOutOfBounds`] when outside.
    pub fn seed(&self, x: usize, y: usize) -> Result<u32, FillError> {
        self.get(x, y).ok_or(FillError::SeedOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    /// Set the pixel at `(x, y)`. Returns false when the coordinate is outside.
    pub fn set(&mut self, x: usize, y: usize, color: u32) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let idx = self.index_of(x, y);
        self.pixels[idx] = color;
        true
    }
}

/// `width * height * channels`, or `None` if it does not fit in `usize`.
fn pixel_count(width: usize, height: usize, channels: usize) -> Option<usize> {
    width.checked_mul(height)?.checked_mul(channels)
}
