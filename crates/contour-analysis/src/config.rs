//! Configuration for an analysis run.

use crate::{AnalysisOptions, BandSpec, ThresholdDefaults};
use field_common::{Color, FieldResult};
use serde::{Deserialize, Serialize};

/// User-facing analysis settings. Unset bounds fall back to the dialog defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of bands (and contour levels). `None` uses the default of 10.
    pub regions: Option<usize>,

    /// Low brightness bound; `None` uses the table-derived default.
    pub low: Option<f64>,

    /// High brightness bound; `None` uses the region maximum.
    pub high: Option<f64>,

    /// Spread bands and contour passes over the rayon pool.
    pub parallel: bool,

    /// Contour stroke width in pixels.
    pub line_width: f32,

    /// Contour stroke color.
    pub line_color: Color,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            regions: None,
            low: None,
            high: None,
            parallel: false,
            line_width: 0.2,
            line_color: Color::RED,
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("ISOPHOTE_REGIONS") {
            if let Ok(regions) = val.parse() {
                config.regions = Some(regions);
            }
        }

        if let Ok(val) = std::env::var("ISOPHOTE_LOW") {
            if let Ok(low) = val.parse() {
                config.low = Some(low);
            }
        }

        if let Ok(val) = std::env::var("ISOPHOTE_HIGH") {
            if let Ok(high) = val.parse() {
                config.high = Some(high);
            }
        }

        if let Ok(val) = std::env::var("ISOPHOTE_PARALLEL") {
            config.parallel = val.to_lowercase() == "true" || val == "1";
        }

        if let Ok(val) = std::env::var("ISOPHOTE_LINE_WIDTH") {
            if let Ok(width) = val.parse() {
                config.line_width = width;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.regions == Some(0) {
            return Err("regions must be > 0".to_string());
        }

        if self.line_width.is_nan() || self.line_width <= 0.0 {
            return Err("line_width must be > 0".to_string());
        }

        if let (Some(low), Some(high)) = (self.low, self.high) {
            if low > high {
                tracing::warn!(low, high, "Configured low bound is above high bound");
            }
        }

        Ok(())
    }

    pub fn options(&self) -> AnalysisOptions {
        AnalysisOptions {
            parallel: self.parallel,
        }
    }

    /// Combine with the defaults of the analysed region.
    pub fn band_spec(&self, defaults: &ThresholdDefaults) -> FieldResult<BandSpec> {
        defaults.resolve(self.regions, self.low, self.high)
    }
}
