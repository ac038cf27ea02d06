//! Contour lines via marching squares over binary threshold grids.
//!
//! For every threshold the region is reduced to a 0/1 grid (`value > t`), and
//! every 2x2 neighborhood is looked up in a fixed 16-entry table of edge
//! pairs. Segments always join the midpoints of two cell edges; there is no
//! interpolation along the edges and saddle cells (cases 5 and 10) always get
//! the same pair of diagonals regardless of the corner values.

use crate::grid_pool::{release_oversized, with_binary_grid};
use crate::BandSpec;
use field_common::{FieldResult, Region, ScalarField};
use rayon::prelude::*;
use serde::Serialize;

/// A point in 2D space (pixel coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A line segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// Edge of a marching squares cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    North,
    East,
    South,
    West,
}

impl Edge {
    /// Offset of the edge midpoint from the cell's top-left pixel corner.
    ///
    /// A cell spans the centers of pixels `(x, y)` to `(x + 1, y + 1)`, so its
    /// edges sit half a pixel in from the pixel borders.
    pub const fn offset(self) -> (f32, f32) {
        match self {
            Edge::North => (1.0, 0.5),
            Edge::East => (1.5, 1.0),
            Edge::South => (1.0, 1.5),
            Edge::West => (0.5, 1.0),
        }
    }

    /// Edge midpoint for the cell whose top-left pixel is at `(x, y)`.
    #[inline]
    pub fn midpoint(self, x: f32, y: f32) -> Point {
        let (dx, dy) = self.offset();
        Point::new(x + dx, y + dy)
    }
}

/// Corner weights of the 4-bit cell case.
pub const TOP_LEFT: u8 = 8;
pub const TOP_RIGHT: u8 = 4;
pub const BOTTOM_RIGHT: u8 = 2;
pub const BOTTOM_LEFT: u8 = 1;

use Edge::{East as E, North as N, South as S, West as W};

/// Segments drawn for each cell case, as `(start, end)` edge pairs.
///
/// Case `c` and `15 - c` draw the same segments (4 and 11 are both N-E),
/// except for the saddles 5 and 10, which get different fixed diagonals.
pub const CASE_TABLE: [&[(Edge, Edge)]; 16] = [
    &[],               // 0: all below
    &[(S, W)],         // 1: BL
    &[(S, E)],         // 2: BR
    &[(W, E)],         // 3: BL + BR
    &[(N, E)],         // 4: TR
    &[(S, E), (W, N)], // 5: TR + BL (saddle)
    &[(N, S)],         // 6: TR + BR
    &[(W, N)],         // 7: all but TL
    &[(W, N)],         // 8: TL
    &[(N, S)],         // 9: TL + BL
    &[(S, W), (N, E)], // 10: TL + BR (saddle)
    &[(N, E)],         // 11: all but TR
    &[(W, E)],         // 12: TL + TR
    &[(S, E)],         // 13: all but BR
    &[(S, W)],         // 14: all but BL
    &[],               // 15: all above
];

/// Build the 4-bit case from the four corners of a cell.
#[inline]
pub fn cell_case(top_left: bool, top_right: bool, bottom_right: bool, bottom_left: bool) -> u8 {
    let mut case = 0;
    if top_left {
        case |= TOP_LEFT;
    }
    if top_right {
        case |= TOP_RIGHT;
    }
    if bottom_right {
        case |= BOTTOM_RIGHT;
    }
    if bottom_left {
        case |= BOTTOM_LEFT;
    }
    case
}

/// Segments for `case` in the cell whose top-left pixel is at `(x, y)`.
pub fn cell_segments(case: u8, x: f32, y: f32) -> impl Iterator<Item = Segment> {
    CASE_TABLE[(case & 0x0f) as usize]
        .iter()
        .map(move |&(start, end)| Segment {
            start: start.midpoint(x, y),
            end: end.midpoint(x, y),
        })
}

/// Segment count and threshold of one tracing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContourLevel {
    pub threshold: i64,
    pub segment_count: usize,
}

/// All segments of a trace, in pass order (lowest threshold first).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContourPath {
    segments: Vec<Segment>,
    levels: Vec<ContourLevel>,
}

impl ContourPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the segments of one pass.
    pub fn push_level(&mut self, threshold: i64, segments: Vec<Segment>) {
        self.levels.push(ContourLevel {
            threshold,
            segment_count: segments.len(),
        });
        self.segments.extend(segments);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn levels(&self) -> &[ContourLevel] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments produced by pass `index`.
    pub fn level_segments(&self, index: usize) -> &[Segment] {
        let start: usize = self.levels[..index].iter().map(|l| l.segment_count).sum();
        let end = start + self.levels[index].segment_count;
        &self.segments[start..end]
    }
}

/// Write `1` for every pixel of `roi` above `threshold`, `0` otherwise.
///
/// `grid` is row-major, `roi.width * roi.height` cells, region-relative.
pub fn fill_binary_grid<F>(field: &F, roi: Region, threshold: i64, grid: &mut [u8])
where
    F: ScalarField + ?Sized,
{
    let threshold = threshold as f32;
    for y in 0..roi.height {
        let row = &mut grid[y * roi.width..(y + 1) * roi.width];
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = u8::from(field.value_at(roi.x + x, roi.y + y) > threshold);
        }
    }
}

/// Walk every cell of a binary grid and append its segments to `out`.
///
/// Cells start at `x in 0..width - 2`, `y in 0..height - 2`, so the last
/// pixel row and column of the region never anchor a cell.
pub fn march_binary_grid(grid: &[u8], roi: Region, out: &mut Vec<Segment>) {
    let width = roi.width;
    let at = |x: usize, y: usize| grid[y * width + x] == 1;

    for x in 0..roi.width.saturating_sub(2) {
        for y in 0..roi.height.saturating_sub(2) {
            let case = cell_case(at(x, y), at(x + 1, y), at(x + 1, y + 1), at(x, y + 1));
            let origin_x = (roi.x + x) as f32;
            let origin_y = (roi.y + y) as f32;
            out.extend(cell_segments(case, origin_x, origin_y));
        }
    }
}

/// Trace a single threshold over `roi`.
pub fn trace_level<F>(field: &F, roi: Region, threshold: i64) -> FieldResult<Vec<Segment>>
where
    F: ScalarField + ?Sized,
{
    roi.validate_within(field.width(), field.height())?;
    Ok(trace_pass(field, roi, threshold))
}

fn trace_pass<F>(field: &F, roi: Region, threshold: i64) -> Vec<Segment>
where
    F: ScalarField + ?Sized,
{
    with_binary_grid(roi.width, roi.height, |grid| {
        fill_binary_grid(field, roi, threshold, grid);
        let mut segments = Vec::new();
        march_binary_grid(grid, roi, &mut segments);
        segments
    })
}

/// Trace one contour per threshold of `spec`, accumulated into one path.
pub fn trace<F>(field: &F, roi: Region, spec: &BandSpec) -> FieldResult<ContourPath>
where
    F: ScalarField + ?Sized,
{
    roi.validate_within(field.width(), field.height())?;

    let mut path = ContourPath::new();
    for threshold in spec.contour_thresholds() {
        let segments = trace_pass(field, roi, threshold);
        path.push_level(threshold, segments);
    }
    release_oversized();

    log_path(roi, spec, &path);
    Ok(path)
}

/// Same result as [`trace`], with one rayon task per threshold.
pub fn trace_parallel<F>(field: &F, roi: Region, spec: &BandSpec) -> FieldResult<ContourPath>
where
    F: ScalarField + Sync + ?Sized,
{
    roi.validate_within(field.width(), field.height())?;

    let passes: Vec<(i64, Vec<Segment>)> = spec
        .contour_thresholds()
        .into_par_iter()
        .map(|threshold| (threshold, trace_pass(field, roi, threshold)))
        .collect();

    rayon::broadcast(|_| release_oversized());

    let mut path = ContourPath::new();
    for (threshold, segments) in passes {
        path.push_level(threshold, segments);
    }

    log_path(roi, spec, &path);
    Ok(path)
}

fn log_path(roi: Region, spec: &BandSpec, path: &ContourPath) {
    tracing::debug!(
        region = %roi,
        levels = path.levels().len(),
        step = spec.contour_step(),
        first_level = path.levels().first().map(|l| l.threshold).unwrap_or(0),
        last_level = path.levels().last().map(|l| l.threshold).unwrap_or(0),
        segments = path.len(),
        "Traced contours"
    );
}
