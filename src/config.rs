//! Bucket tool configuration.
//!
//! The raster and vector fills keep separate tolerances: the raster fill
//! defaults to a looser match so it swallows anti-aliased edges, the
//! vector fill to a tight one. Settings load from TOML; missing keys fall
//! back to the defaults.
//!
//! ```toml
//! raster_tolerance = 10
//! vector_tolerance = 1
//! max_history = 1000
//! vector_stroke_width = 5.0
//! ```

use serde::{Deserialize, Serialize};

use crate::fill::{FillOptions, DEFAULT_RASTER_TOLERANCE, DEFAULT_VECTOR_TOLERANCE};
use crate::history::{History, DEFAULT_MAX_HISTORY};
use crate::paint::PaintOptions;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillConfig {
    pub raster_tolerance: u8,
    pub vector_tolerance: u8,
    pub max_history: usize,
    /// Stroke width used to render vector fill paths
    pub vector_stroke_width: f32,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            raster_tolerance: DEFAULT_RASTER_TOLERANCE,
            vector_tolerance: DEFAULT_VECTOR_TOLERANCE,
            max_history: DEFAULT_MAX_HISTORY,
            vector_stroke_width: 5.0,
        }
    }
}

impl FillConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    pub fn raster_options(&self, fill_color: u32) -> FillOptions {
        FillOptions::new(fill_color).with_tolerance(self.raster_tolerance)
    }

    pub fn vector_options(&self, fill_color: u32) -> FillOptions {
        FillOptions::new(fill_color).with_tolerance(self.vector_tolerance)
    }

    /// Paint for the stroke that renders a vector fill path.
    pub fn vector_paint(&self, fill_color: u32) -> PaintOptions {
        PaintOptions::new(fill_color, self.vector_stroke_width)
    }

    pub fn history(&self) -> History {
        History::with_max_len(self.max_history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fill::Tolerance;

    #[test]
    fn test_defaults() {
        let config = FillConfig::default();
        assert_eq!(config.raster_tolerance, 10);
        assert_eq!(config.vector_tolerance, 1);
        assert_eq!(config.max_history, 1000);
        assert_eq!(config.history().max_len(), 1000);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = FillConfig::from_toml_str("vector_tolerance = 4").unwrap();
        assert_eq!(config.vector_tolerance, 4);
        assert_eq!(config.raster_tolerance, DEFAULT_RASTER_TOLERANCE);
        assert_eq!(config.vector_options(0).tolerance, Tolerance::uniform(4));
        assert_eq!(config.raster_options(0).tolerance, Tolerance::uniform(10));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = FillConfig {
            raster_tolerance: 32,
            vector_tolerance: 0,
            max_history: 50,
            vector_stroke_width: 2.5,
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(FillConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_out_of_range_tolerance() {
        assert!(FillConfig::from_toml_str("raster_tolerance = 300").is_err());
    }
}
