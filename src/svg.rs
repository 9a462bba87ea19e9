//! SVG import/export of path operations.
//!
//! The exported document is deliberately flat: a root `<svg>` with the
//! canvas size, one background `<rect>`, then one stroked `<path>` per path
//! operation. Bitmap operations have no SVG form and are skipped.
//! Import reads back exactly that shape.

use std::io::Write;

use log::warn;
use thiserror::Error;

use crate::history::CanvasOp;
use crate::paint::PaintOptions;
use crate::path::{Path, PathParseError};

#[derive(Debug, Error)]
pub enum SvgError {
    #[error("failed to write SVG: {0}")]
    Io(#[from] std::io::Error),

    #[error("no <svg> root element")]
    MissingRoot,

    #[error("<{element}> is missing attribute `{name}`")]
    MissingAttribute {
        element: &'static str,
        name: &'static str,
    },

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("unsupported SVG, should only have one <rect>")]
    MultipleBackgrounds,

    #[error(transparent)]
    Path(#[from] PathParseError),
}

/// A stroked path read from an SVG document.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgPath {
    pub path: Path,
    pub paint: PaintOptions,
}

/// Contents of an imported SVG document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SvgDocument {
    pub width: u32,
    pub height: u32,
    /// ARGB background color from the `<rect>`, if any
    pub background: Option<u32>,
    pub paths: Vec<SvgPath>,
}

impl SvgDocument {
    /// Convert the paths into history operations, in document order.
    pub fn into_ops(self) -> Vec<CanvasOp> {
        self.paths
            .into_iter()
            .map(|p| CanvasOp::Path {
                path: p.path,
                paint: p.paint,
            })
            .collect()
    }
}

/// Render path operations as an SVG document.
///
/// # Arguments
/// * `background` - ARGB canvas color (alpha is dropped)
/// * `ops` - Operations in drawing order; bitmap operations are skipped
/// * `width`, `height` - Canvas size in pixels
pub fn to_svg_string<'a>(
    background: u32,
    ops: impl IntoIterator<Item = &'a CanvasOp>,
    width: u32,
    height: u32,
) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">",
        width, height
    ));
    svg.push_str(&format!(
        "<rect width=\"{}\" height=\"{}\" fill=\"#{:06x}\"/>",
        width,
        height,
        background & 0x00FF_FFFF
    ));

    for op in ops {
        if let CanvasOp::Path { path, paint } = op {
            svg.push_str(&format!(
                "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\"/>",
                path,
                paint.color_to_export(),
                paint.stroke_width
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Write path operations as an SVG document to `writer`.
pub fn write_svg<'a, W: Write>(
    writer: &mut W,
    background: u32,
    ops: impl IntoIterator<Item = &'a CanvasOp>,
    width: u32,
    height: u32,
) -> Result<(), SvgError> {
    writer.write_all(to_svg_string(background, ops, width, height).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Parse a document previously written by [`write_svg`].
pub fn parse_svg(source: &str) -> Result<SvgDocument, SvgError> {
    let mut doc = SvgDocument::default();
    let mut has_root = false;

    for (name, attrs) in tags(source) {
        let attrs = parse_attributes(attrs);
        match name {
            "svg" => {
                doc.width = parse_number(required(&attrs, "svg", "width")?)?;
                doc.height = parse_number(required(&attrs, "svg", "height")?)?;
                has_root = true;
            }
            "rect" => {
                if doc.background.is_some() {
                    return Err(SvgError::MultipleBackgrounds);
                }
                doc.background = Some(parse_color(required(&attrs, "rect", "fill")?)?);
            }
            "path" => {
                let path: Path = required(&attrs, "path", "d")?.parse()?;
                let width_attr = required(&attrs, "path", "stroke-width")?;
                let stroke_width = width_attr
                    .parse::<f32>()
                    .map_err(|_| SvgError::InvalidNumber(width_attr.to_string()))?;
                let paint = match required(&attrs, "path", "stroke")? {
                    "none" => PaintOptions::eraser(stroke_width),
                    color => PaintOptions::new(parse_color(color)?, stroke_width),
                };
                doc.paths.push(SvgPath { path, paint });
            }
            other => warn!("skipping unsupported SVG element <{}>", other),
        }
    }

    if !has_root {
        return Err(SvgError::MissingRoot);
    }
    Ok(doc)
}

/// Iterate over opening tags as `(name, attribute text)`, skipping closing
/// tags, comments and declarations.
fn tags(source: &str) -> impl Iterator<Item = (&str, &str)> {
    source.split('<').skip(1).filter_map(|chunk| {
        let body = chunk.split('>').next()?;
        if body.starts_with(['/', '!', '?']) {
            return None;
        }
        let body = body.trim_end_matches('/');
        let name_end = body
            .find(|c: char| c.is_ascii_whitespace())
            .unwrap_or(body.len());
        Some((&body[..name_end], &body[name_end..]))
    })
}

/// Split `name="value"` pairs. Both quote styles are accepted.
fn parse_attributes(text: &str) -> Vec<(&str, &str)> {
    let mut attrs = Vec::new();
    let mut rest = text;

    while let Some(eq) = rest.find('=') {
        let name = rest[..eq].trim();
        let after = rest[eq + 1..].trim_start();
        let Some(quote) = after.chars().next().filter(|c| *c == '"' || *c == '\'') else {
            break;
        };
        let value_text = &after[1..];
        let Some(end) = value_text.find(quote) else {
            break;
        };
        attrs.push((name, &value_text[..end]));
        rest = &value_text[end + 1..];
    }

    attrs
}

fn required<'a>(
    attrs: &[(&str, &'a str)],
    element: &'static str,
    name: &'static str,
) -> Result<&'a str, SvgError> {
    attrs
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
        .ok_or(SvgError::MissingAttribute { element, name })
}

fn parse_number(text: &str) -> Result<u32, SvgError> {
    text.trim()
        .parse()
        .map_err(|_| SvgError::InvalidNumber(text.to_string()))
}

/// Parse `#rrggbb` (opaque) or `#aarrggbb` into ARGB.
fn parse_color(text: &str) -> Result<u32, SvgError> {
    let invalid = || SvgError::InvalidColor(text.to_string());
    let hex = text.strip_prefix('#').ok_or_else(invalid)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
    match hex.len() {
        6 => Ok(0xFF00_0000 | value),
        8 => Ok(value),
        _ => Err(invalid()),
    }
}
