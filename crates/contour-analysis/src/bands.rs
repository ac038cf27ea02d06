//! Partitioning a region into brightness bands.
//!
//! Every band scans the whole region on its own; bands never consult each
//! other, which is what lets [`partition_parallel`] run them concurrently.

use crate::BandSpec;
use field_common::{FieldResult, GridPoint, Region, ScalarField};
use rayon::prelude::*;
use serde::Serialize;

/// Pixels whose value lies strictly between a band's bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipSet {
    /// Band index, 0 = lowest.
    pub index: usize,
    /// Exclusive lower bound.
    pub lower: i64,
    /// Exclusive upper bound.
    pub upper: i64,
    /// Member pixels in scan order (column by column), absolute coordinates.
    pub points: Vec<GridPoint>,
}

impl MembershipSet {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether `value` falls inside this band. Boundary values never do.
    #[inline]
    pub fn admits(&self, value: f32) -> bool {
        value > self.lower as f32 && value < self.upper as f32
    }
}

/// Split `roi` into `spec.regions()` bands, lowest first.
pub fn partition<F>(field: &F, roi: Region, spec: &BandSpec) -> FieldResult<Vec<MembershipSet>>
where
    F: ScalarField + ?Sized,
{
    prepare(field, roi, spec)?;

    let bands: Vec<MembershipSet> = spec
        .band_bounds()
        .into_iter()
        .enumerate()
        .map(|(index, (lower, upper))| collect_band(field, roi, index, lower, upper))
        .collect();

    log_bands(&bands);
    Ok(bands)
}

/// Same result as [`partition`], with one rayon task per band.
pub fn partition_parallel<F>(
    field: &F,
    roi: Region,
    spec: &BandSpec,
) -> FieldResult<Vec<MembershipSet>>
where
    F: ScalarField + Sync + ?Sized,
{
    prepare(field, roi, spec)?;

    let bands: Vec<MembershipSet> = spec
        .band_bounds()
        .into_par_iter()
        .enumerate()
        .map(|(index, (lower, upper))| collect_band(field, roi, index, lower, upper))
        .collect();

    log_bands(&bands);
    Ok(bands)
}

fn prepare<F>(field: &F, roi: Region, spec: &BandSpec) -> FieldResult<()>
where
    F: ScalarField + ?Sized,
{
    roi.validate_within(field.width(), field.height())?;

    if spec.is_inverted() {
        tracing::warn!(
            low = spec.low(),
            high = spec.high(),
            "Low bound above high bound; bands will be empty or inverted"
        );
    }

    tracing::debug!(
        region = %roi,
        low = spec.low(),
        high = spec.high(),
        regions = spec.regions(),
        step = spec.band_step(),
        "Partitioning region into bands"
    );

    Ok(())
}

fn collect_band<F>(field: &F, roi: Region, index: usize, lower: i64, upper: i64) -> MembershipSet
where
    F: ScalarField + ?Sized,
{
    let mut band = MembershipSet {
        index,
        lower,
        upper,
        points: Vec::new(),
    };

    for x in roi.x..roi.right() {
        for y in roi.y..roi.bottom() {
            if band.admits(field.value_at(x, y)) {
                band.points.push(GridPoint::new(x, y));
            }
        }
    }

    band
}

fn log_bands(bands: &[MembershipSet]) {
    for band in bands {
        tracing::debug!(
            band = band.index,
            lower = band.lower,
            upper = band.upper,
            count = band.len(),
            "Band membership"
        );
    }
}
