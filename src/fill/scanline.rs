//! Queue-driven scan-line flood fill.
//!
//! This is the skeleton shared by the raster and vector fillers. It finds
//! the 4-connected region of pixels matching a [`ColorMatcher`], walking
//! whole horizontal runs at a time and keeping the runs whose upper and
//! lower neighbours still need probing in a FIFO worklist. What happens to
//! a discovered pixel is up to the [`FillVisitor`].
//!
//! Every region pixel is marked in a visited set the moment it is reached
//! and never examined again, so a fill is linear in the buffer size and
//! never recurses.

use std::collections::VecDeque;

use super::tolerance::{ColorMatcher, Rgb, Tolerance};
use crate::error::FillError;

/// A horizontal run of region pixels on row `y`, `start_x..=end_x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillRange {
    pub start_x: usize,
    pub end_x: usize,
    pub y: usize,
}

impl FillRange {
    /// Number of pixels in the run. A single-pixel run has width 1.
    pub fn width(&self) -> usize {
        self.end_x - self.start_x + 1
    }
}

/// Per-call fill parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillOptions {
    /// ARGB color written by the raster filler and compared against the
    /// seed for the no-op check.
    pub fill_color: u32,
    pub tolerance: Tolerance,
    /// Reference color to match against. Sampled from the seed when `None`.
    pub reference: Option<Rgb>,
}

impl FillOptions {
    pub fn new(fill_color: u32) -> Self {
        Self {
            fill_color,
            tolerance: Tolerance::EXACT,
            reference: None,
        }
    }

    pub fn with_tolerance(mut self, tolerance: impl Into<Tolerance>) -> Self {
        self.tolerance = tolerance.into();
        self
    }

    pub fn with_reference(mut self, reference: Rgb) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Build the matcher for a fill seeded on a pixel of `seed_color`.
    pub fn matcher(&self, seed_color: u32) -> ColorMatcher {
        let reference = self
            .reference
            .unwrap_or_else(|| Rgb::from_argb(seed_color));
        ColorMatcher::new(reference, self.tolerance)
    }
}

/// Receives the pixels discovered by [`scanline_fill`].
pub trait FillVisitor {
    /// Current color of the pixel at linear index `index`.
    fn pixel(&self, index: usize) -> u32;

    /// Called exactly once for every region pixel, when it is marked visited.
    fn visit(&mut self, _index: usize) {}

    /// Called after each half of a linear walk: once for the leftward walk
    /// and once for the rightward walk, both starting at the walk's seed.
    fn walk(&mut self, _from: usize, _to: usize) {}
}

/// Summary of a finished fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FillStats {
    /// Number of pixels in the region
    pub pixel_count: usize,
    /// Number of ranges that passed through the worklist
    pub range_count: usize,
    /// Bounds of the region as origin and size: (x, y, width, height)
    pub bounds: Option<(usize, usize, usize, usize)>,
}

impl FillStats {
    fn record(&mut self, range: FillRange) {
        self.range_count += 1;
        self.pixel_count += range.width();
        self.bounds = Some(match self.bounds {
            None => (range.start_x, range.y, range.width(), 1),
            Some((x, y, w, h)) => {
                let min_x = x.min(range.start_x);
                let min_y = y.min(range.y);
                let max_x = (x + w - 1).max(range.end_x);
                let max_y = (y + h - 1).max(range.y);
                (min_x, min_y, max_x - min_x + 1, max_y - min_y + 1)
            }
        });
    }
}

/// Run a scan-line flood fill over a `width x height` grid from `(seed_x, seed_y)`.
///
/// The seed pixel is always part of the region; every other pixel joins
/// when it is 4-connected to the region and accepted by `matcher`.
///
/// # Errors
/// * [`FillError::SeedOutOfBounds`] if the seed lies outside the grid
/// * [`FillError::Allocation`] if the visited set cannot be allocated
pub fn scanline_fill<V: FillVisitor>(
    width: usize,
    height: usize,
    seed_x: usize,
    seed_y: usize,
    matcher: ColorMatcher,
    visitor: &mut V,
) -> Result<FillStats, FillError> {
    if seed_x >= width || seed_y >= height {
        return Err(FillError::SeedOutOfBounds {
            x: seed_x,
            y: seed_y,
            width,
            height,
        });
    }

    let len = width.checked_mul(height).ok_or(FillError::Allocation {
        pixels: width.saturating_mul(height),
    })?;
    let mut visited = Vec::new();
    visited
        .try_reserve_exact(len)
        .map_err(|_| FillError::Allocation { pixels: len })?;
    visited.resize(len, false);

    let mut fill = ScanlineFill {
        width,
        height,
        matcher,
        visited,
        ranges: VecDeque::new(),
        visitor,
        stats: FillStats::default(),
    };
    fill.run(seed_x, seed_y);

    Ok(fill.stats)
}

struct ScanlineFill<'a, V> {
    width: usize,
    height: usize,
    matcher: ColorMatcher,
    visited: Vec<bool>,
    ranges: VecDeque<FillRange>,
    visitor: &'a mut V,
    stats: FillStats,
}

impl<V: FillVisitor> ScanlineFill<'_, V> {
    fn run(&mut self, seed_x: usize, seed_y: usize) {
        self.linear_fill(seed_x, seed_y);

        while let Some(range) = self.ranges.pop_front() {
            self.stats.record(range);

            for x in range.start_x..=range.end_x {
                if range.y > 0 {
                    let up = (range.y - 1) * self.width + x;
                    if self.qualifies(up) {
                        self.linear_fill(x, range.y - 1);
                    }
                }

                if range.y + 1 < self.height {
                    let down = (range.y + 1) * self.width + x;
                    if self.qualifies(down) {
                        self.linear_fill(x, range.y + 1);
                    }
                }
            }
        }
    }

    /// Walk left then right from `(x, y)`, marking the run and queueing it.
    fn linear_fill(&mut self, x: usize, y: usize) {
        let row = y * self.width;
        let seed = row + x;
        self.mark(seed);

        let mut left = x;
        while left > 0 && self.qualifies(row + left - 1) {
            left -= 1;
            self.mark(row + left);
        }
        self.visitor.walk(seed, row + left);

        let mut right = x;
        while right + 1 < self.width && self.qualifies(row + right + 1) {
            right += 1;
            self.mark(row + right);
        }
        self.visitor.walk(seed, row + right);

        self.ranges.push_back(FillRange {
            start_x: left,
            end_x: right,
            y,
        });
    }

    #[inline]
    fn qualifies(&self, index: usize) -> bool {
        !self.visited[index] && self.matcher.matches(self.visitor.pixel(index))
    }

    #[inline]
    fn mark(&mut self, index: usize) {
        self.visited[index] = true;
        self.visitor.visit(index);
    }
}
