//! One complete analysis request: bands, contours, palette and counts.

use crate::bands::{self, MembershipSet};
use crate::contour::{self, ContourPath};
use crate::palette;
use crate::BandSpec;
use field_common::{Color, FieldResult, Region, ScalarField};
use serde::Serialize;
use std::time::Instant;

/// How an analysis is executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Run bands and contour passes on the rayon pool.
    pub parallel: bool,
}

/// Everything the compositor and the counts table need.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub region: Region,
    pub spec: BandSpec,
    pub bands: Vec<MembershipSet>,
    pub palette: Vec<Color>,
    pub contours: ContourPath,
}

impl Analysis {
    /// Number of member pixels per band, lowest band first.
    pub fn counts(&self) -> Vec<usize> {
        self.bands.iter().map(MembershipSet::len).collect()
    }

    /// Serializable summary of the run.
    pub fn report(&self) -> AnalysisReport {
        AnalysisReport {
            region: self.region,
            low: self.spec.low(),
            high: self.spec.high(),
            regions: self.spec.regions(),
            band_step: self.spec.band_step(),
            contour_step: self.spec.contour_step(),
            segments: self.contours.len(),
            bands: self
                .bands
                .iter()
                .zip(&self.palette)
                .map(|(band, color)| BandReport {
                    index: band.index,
                    lower: band.lower,
                    upper: band.upper,
                    color: color.to_hex(),
                    count: band.len(),
                })
                .collect(),
        }
    }
}

/// Per-band row of the counts table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandReport {
    pub index: usize,
    pub lower: i64,
    pub upper: i64,
    pub color: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub region: Region,
    pub low: i64,
    pub high: i64,
    pub regions: usize,
    pub band_step: i64,
    pub contour_step: i64,
    pub segments: usize,
    pub bands: Vec<BandReport>,
}

/// Partition `roi` into bands, trace the band thresholds and color the bands.
///
/// All arguments are checked before the first scan. Band partitioning and
/// contour tracing run independently over the same field.
pub fn analyze<F>(
    field: &F,
    roi: Region,
    spec: &BandSpec,
    options: AnalysisOptions,
) -> FieldResult<Analysis>
where
    F: ScalarField + Sync + ?Sized,
{
    roi.validate_within(field.width(), field.height())?;
    let palette = palette::palette(spec.regions())?;

    let start = Instant::now();

    let (bands, contours) = if options.parallel {
        let (bands, contours) = rayon::join(
            || bands::partition_parallel(field, roi, spec),
            || contour::trace_parallel(field, roi, spec),
        );
        (bands?, contours?)
    } else {
        (
            bands::partition(field, roi, spec)?,
            contour::trace(field, roi, spec)?,
        )
    };

    tracing::info!(
        region = %roi,
        low = spec.low(),
        high = spec.high(),
        regions = spec.regions(),
        members = bands.iter().map(MembershipSet::len).sum::<usize>(),
        segments = contours.len(),
        parallel = options.parallel,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Analysis complete"
    );

    Ok(Analysis {
        region: roi,
        spec: *spec,
        bands,
        palette,
        contours,
    })
}
