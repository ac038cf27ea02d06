//! Band count and threshold bounds for one analysis request.

use field_common::{FieldError, FieldResult};
use serde::Serialize;

/// Validated `(low, high, regions)` triple.
///
/// Bounds are integers: brightness values entered by the user are truncated
/// toward zero before any band or threshold is derived from them. `low > high`
/// is accepted and simply yields empty or inverted bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BandSpec {
    low: i64,
    high: i64,
    regions: usize,
}

impl BandSpec {
    /// Create a spec. Fails when `regions` is zero.
    pub fn new(low: i64, high: i64, regions: usize) -> FieldResult<Self> {
        if regions == 0 {
            return Err(FieldError::invalid("regions", "band count must be at least 1"));
        }
        Ok(Self { low, high, regions })
    }

    /// Create a spec from floating point brightness bounds, truncating toward zero.
    pub fn from_brightness(low: f64, high: f64, regions: usize) -> FieldResult<Self> {
        if !low.is_finite() {
            return Err(FieldError::invalid("low", format!("{} is not finite", low)));
        }
        if !high.is_finite() {
            return Err(FieldError::invalid("high", format!("{} is not finite", high)));
        }
        Self::new(low.trunc() as i64, high.trunc() as i64, regions)
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    pub fn regions(&self) -> usize {
        self.regions
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }

    /// Width of each membership band: `(high - low) / regions + 1`.
    ///
    /// The `+ 1` means the last band can end above `high`.
    pub fn band_step(&self) -> i64 {
        (self.high - self.low) / self.regions as i64 + 1
    }

    /// Spacing between contour thresholds: `(high - low) / regions`.
    ///
    /// Deliberately not the same as [`band_step`](Self::band_step); contour
    /// levels and band edges drift apart by one unit per band.
    pub fn contour_step(&self) -> i64 {
        (self.high - self.low) / self.regions as i64
    }

    /// Exclusive `(lower, upper)` bounds of every band, lowest first.
    pub fn band_bounds(&self) -> Vec<(i64, i64)> {
        let step = self.band_step();
        (0..self.regions as i64)
            .map(|i| (self.low + i * step, self.low + (i + 1) * step))
            .collect()
    }

    /// Contour threshold of every pass, lowest first.
    pub fn contour_thresholds(&self) -> Vec<i64> {
        let step = self.contour_step();
        (0..self.regions as i64).map(|i| self.low + i * step).collect()
    }
}
