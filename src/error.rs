//! Error types shared across the crate.
//!
//! Each module owns the error enum for its own failures; [`Error`] wraps
//! all of them for callers that drive several modules at once.

use thiserror::Error;

use crate::history::HistoryError;
use crate::path::PathParseError;
use crate::svg::SvgError;

/// Failures of a flood fill call.
///
/// A seed whose color already equals the fill color is not an error; the
/// fillers return an unchanged buffer or an empty path for it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FillError {
    #[error("seed ({x}, {y}) lies outside the {width}x{height} buffer")]
    SeedOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("{len} values cannot form a {width}x{height} buffer")]
    InvalidDimensions {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("failed to allocate working memory for {pixels} pixels")]
    Allocation { pixels: usize },
}

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fill(#[from] FillError),

    #[error(transparent)]
    Path(#[from] PathParseError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Svg(#[from] SvgError),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
