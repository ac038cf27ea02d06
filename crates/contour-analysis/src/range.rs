//! Brightness range of a region and the defaults offered to the user.

use crate::BandSpec;
use field_common::{FieldError, FieldResult, Region, ScalarField};
use serde::Serialize;

/// Band count proposed before the user picks one.
pub const DEFAULT_REGIONS: usize = 10;

/// Smallest upper bound of the band count slider.
pub const MIN_REGION_SLIDER_MAX: usize = 20;

/// Default low threshold keyed by the maximum brightness, evaluated top-down.
///
/// The first row matches every maximum up to 1000, so the later rows never
/// fire. The table keeps that order on purpose.
pub const DEFAULT_LOW_TABLE: [(f64, f64); 4] = [
    (1000.0, 650.0),
    (800.0, 450.0),
    (600.0, 250.0),
    (400.0, 0.0),
];

/// Default low threshold when the maximum exceeds every table ceiling.
pub const FALLBACK_LOW: f64 = 850.0;

/// Observed minimum and maximum of a region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

/// Scan `roi` once and return its minimum and maximum.
///
/// The running maximum starts at 0, so a region with no positive sample
/// reports `max = 0`. NaN samples never compare smaller or larger and are skipped.
pub fn scan<F>(field: &F, roi: Region) -> FieldResult<ValueRange>
where
    F: ScalarField + ?Sized,
{
    roi.validate_within(field.width(), field.height())?;

    let mut min = f32::INFINITY;
    let mut max = 0.0f32;

    for x in roi.x..roi.right() {
        for y in roi.y..roi.bottom() {
            let value = field.value_at(x, y);
            if value < min {
                min = value;
            }
            if value > max {
                max = value;
            }
        }
    }

    if min > max {
        return Err(FieldError::invalid(
            "region",
            format!("{} contains no comparable samples", roi),
        ));
    }

    tracing::debug!(region = %roi, min = min, max = max, "Scanned brightness range");

    Ok(ValueRange { min, max })
}

/// Default low threshold for a region whose brightness spans `[min, max]`.
///
/// Looked up in [`DEFAULT_LOW_TABLE`], then raised to `min` if it falls below.
pub fn default_low_threshold(min: f64, max: f64) -> f64 {
    let suggested = DEFAULT_LOW_TABLE
        .iter()
        .find(|(ceiling, _)| max <= *ceiling)
        .map(|(_, value)| *value)
        .unwrap_or(FALLBACK_LOW);

    suggested.max(min)
}

/// Values the input dialog starts from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdDefaults {
    pub regions: usize,
    pub region_slider_max: usize,
    /// Floor of the observed minimum.
    pub min_brightness: f64,
    /// Ceiling of the observed maximum.
    pub max_brightness: f64,
    pub default_low: f64,
    pub default_high: f64,
}

impl ThresholdDefaults {
    /// Scan `roi` and derive the defaults from its range.
    pub fn suggest<F>(field: &F, roi: Region) -> FieldResult<Self>
    where
        F: ScalarField + ?Sized,
    {
        Ok(Self::from_range(scan(field, roi)?))
    }

    pub fn from_range(range: ValueRange) -> Self {
        let min_brightness = (range.min as f64).floor();
        let max_brightness = (range.max as f64).ceil();

        Self {
            regions: DEFAULT_REGIONS,
            region_slider_max: DEFAULT_REGIONS.max(MIN_REGION_SLIDER_MAX),
            min_brightness,
            max_brightness,
            default_low: default_low_threshold(min_brightness, max_brightness).floor(),
            default_high: max_brightness,
        }
    }

    /// Lower and upper limit of both brightness sliders.
    pub fn slider_bounds(&self) -> (f64, f64) {
        (
            self.min_brightness,
            self.min_brightness.max(self.max_brightness),
        )
    }

    /// Fill unset values with the defaults and truncate them into a [`BandSpec`].
    pub fn resolve(
        &self,
        regions: Option<usize>,
        low: Option<f64>,
        high: Option<f64>,
    ) -> FieldResult<BandSpec> {
        BandSpec::from_brightness(
            low.unwrap_or(self.default_low),
            high.unwrap_or(self.default_high),
            regions.unwrap_or(self.regions),
        )
    }
}
