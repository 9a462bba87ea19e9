//! Stroke paths: ordered move/line/quad operations.
//!
//! Paths serialize to a subset of SVG path data, one token group per
//! operation separated by single spaces:
//!
//! | Op | Text |
//! |----|------|
//! | move | `M{x},{y}` |
//! | line | `L{x},{y}` |
//! | quad | `Q{x1},{y1} {x2},{y2}` |

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A single drawing operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathOp {
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    QuadTo { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl PathOp {
    /// Point the pen rests on after this operation.
    pub fn end_point(&self) -> (f32, f32) {
        match *self {
            PathOp::MoveTo { x, y } | PathOp::LineTo { x, y } => (x, y),
            PathOp::QuadTo { x2, y2, .. } => (x2, y2),
        }
    }
}

impl fmt::Display for PathOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathOp::MoveTo { x, y } => write!(f, "M{},{}", x, y),
            PathOp::LineTo { x, y } => write!(f, "L{},{}", x, y),
            PathOp::QuadTo { x1, y1, x2, y2 } => write!(f, "Q{},{} {},{}", x1, y1, x2, y2),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathParseError {
    #[error("malformed coordinates in `{0}`")]
    Malformed(String),

    #[error("quad `{0}` is missing its end point")]
    TruncatedQuad(String),
}

/// An ordered list of drawing operations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    ops: Vec<PathOp>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.ops.push(PathOp::MoveTo { x, y });
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.ops.push(PathOp::LineTo { x, y });
    }

    pub fn quad_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ops.push(PathOp::QuadTo { x1, y1, x2, y2 });
    }

    pub fn reset(&mut self) {
        self.ops.clear();
    }

    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Corner points of the box around all points, control points included:
    /// `(min_x, min_y, max_x, max_y)`.
    ///
    /// Unlike the `(x, y, width, height)` pixel bounds reported by the
    /// fillers, both corners are coordinates: a path over the single pixel
    /// `(3, 4)` has extents `(3, 4, 3, 4)`.
    pub fn extents(&self) -> Option<(f32, f32, f32, f32)> {
        let mut points = self.ops.iter().flat_map(|op| match *op {
            PathOp::MoveTo { x, y } | PathOp::LineTo { x, y } => [(x, y), (x, y)],
            PathOp::QuadTo { x1, y1, x2, y2 } => [(x1, y1), (x2, y2)],
        });

        let (x, y) = points.next()?;
        Some(points.fold((x, y, x, y), |(x0, y0, x1, y1), (x, y)| {
            (x0.min(x), y0.min(y), x1.max(x), y1.max(y))
        }))
    }

    /// Rasterize the horizontal move/line segments into a selection mask.
    ///
    /// Every line segment that stays on one row marks the pixels between
    /// its endpoints (inclusive). Other segments and points outside the
    /// `width x height` grid are ignored. This is how the scan-line output
    /// of the vector fill maps back to a pixel region.
    ///
    /// # Returns
    /// Mask of `width * height` bytes (255 = covered, 0 = not covered)
    pub fn scanline_mask(&self, width: usize, height: usize) -> Vec<u8> {
        let mut mask = vec![0u8; width * height];
        let mut pen: Option<(f32, f32)> = None;

        for op in &self.ops {
            if let (PathOp::LineTo { x, y }, Some((px, py))) = (*op, pen) {
                if y == py && y >= 0.0 && (y as usize) < height && px.max(x) >= 0.0 {
                    let row = y as usize * width;
                    let start = px.min(x).max(0.0) as usize;
                    let end = (px.max(x) as usize).min(width.saturating_sub(1));
                    for cell in mask.iter_mut().take(row + end + 1).skip(row + start) {
                        *cell = 255;
                    }
                }
            }
            pen = Some(op.end_point());
        }

        mask
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", op)?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = PathParseError;

    /// Parse path data. Tokens with an unknown command letter are skipped.
    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let mut path = Path::new();
        let mut tokens = data.split_whitespace();

        while let Some(token) = tokens.next() {
            match token.as_bytes()[0] {
                b'M' => {
                    let (x, y) = parse_point(&token[1..], token)?;
                    path.move_to(x, y);
                }
                b'L' => {
                    let (x, y) = parse_point(&token[1..], token)?;
                    path.line_to(x, y);
                }
                b'Q' => {
                    // "Qx1,y1 x2,y2" is split across two tokens
                    let end = tokens
                        .next()
                        .ok_or_else(|| PathParseError::TruncatedQuad(token.to_string()))?;
                    let (x1, y1) = parse_point(&token[1..], token)?;
                    let (x2, y2) = parse_point(end, end)?;
                    path.quad_to(x1, y1, x2, y2);
                }
                _ => {}
            }
        }

        Ok(path)
    }
}

fn parse_point(text: &str, token: &str) -> Result<(f32, f32), PathParseError> {
    let malformed = || PathParseError::Malformed(token.to_string());
    let (x, y) = text.split_once(',').ok_or_else(malformed)?;
    let x = x.trim().parse::<f32>().map_err(|_| malformed())?;
    let y = y.trim().parse::<f32>().map_err(|_| malformed())?;
    Ok((x, y))
}
