//! Stroke styling attached to each path on the canvas.

/// Style of a stroked path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintOptions {
    /// ARGB stroke color
    pub color: u32,
    pub stroke_width: f32,
    /// Eraser strokes paint with the canvas background and export without a stroke color.
    pub is_eraser: bool,
}

impl Default for PaintOptions {
    fn default() -> Self {
        Self {
            color: 0xFF000000,
            stroke_width: 5.0,
            is_eraser: false,
        }
    }
}

impl PaintOptions {
    pub fn new(color: u32, stroke_width: f32) -> Self {
        Self {
            color,
            stroke_width,
            is_eraser: false,
        }
    }

    pub fn eraser(stroke_width: f32) -> Self {
        Self {
            color: 0,
            stroke_width,
            is_eraser: true,
        }
    }

    /// SVG `stroke` attribute value: `#rrggbb`, or `none` for the eraser.
    pub fn color_to_export(&self) -> String {
        if self.is_eraser {
            "none".to_string()
        } else {
            format!("#{:06x}", self.color & 0x00FF_FFFF)
        }
    }
}
