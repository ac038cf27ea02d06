//! Tests for marching squares contour tracing.

use contour_analysis::contour::{
    cell_case, cell_segments, march_binary_grid, trace, trace_level, trace_parallel, Edge,
    CASE_TABLE,
};
use contour_analysis::{BandSpec, Point, Segment};
use field_common::{GridField, Region, ScalarField};
use test_utils::fixtures::regions;
use test_utils::{checkerboard_field, horizontal_gradient, spike_field, star_field, uniform_field};

// ============================================================================
// Case table
// ============================================================================

#[test]
fn test_segment_count_per_case() {
    for case in 0..16u8 {
        let count = cell_segments(case, 0.0, 0.0).count();
        let expected = match case {
            0 | 15 => 0,
            5 | 10 => 2,
            _ => 1,
        };
        assert_eq!(count, expected, "case {}", case);
    }
}

#[test]
fn test_complementary_cases_share_segments() {
    for case in 0..16usize {
        if case == 5 || case == 10 {
            continue;
        }
        assert_eq!(CASE_TABLE[case], CASE_TABLE[15 - case], "case {}", case);
    }
    assert_ne!(CASE_TABLE[5], CASE_TABLE[10]);
}

#[test]
fn test_top_right_cases_both_north_east() {
    assert_eq!(CASE_TABLE[4], &[(Edge::North, Edge::East)]);
    assert_eq!(CASE_TABLE[11], &[(Edge::North, Edge::East)]);
    assert_eq!(CASE_TABLE[7], &[(Edge::West, Edge::North)]);
    assert_eq!(CASE_TABLE[8], &[(Edge::West, Edge::North)]);
}

#[test]
fn test_saddles_use_fixed_diagonals() {
    assert_eq!(
        CASE_TABLE[5],
        &[(Edge::South, Edge::East), (Edge::West, Edge::North)]
    );
    assert_eq!(
        CASE_TABLE[10],
        &[(Edge::South, Edge::West), (Edge::North, Edge::East)]
    );
}

#[test]
fn test_segments_join_edge_midpoints() {
    let midpoints = [
        Point::new(11.0, 20.5),
        Point::new(11.5, 21.0),
        Point::new(11.0, 21.5),
        Point::new(10.5, 21.0),
    ];
    for case in 0..16u8 {
        for segment in cell_segments(case, 10.0, 20.0) {
            assert!(midpoints.contains(&segment.start));
            assert!(midpoints.contains(&segment.end));
            assert_ne!(segment.start, segment.end);
        }
    }
}

#[test]
fn test_case_index_from_binary_grid() {
    // Each 2x2 grid reproduces its own case number
    for case in 0..16u8 {
        let grid = [
            u8::from(case & 8 != 0),
            u8::from(case & 4 != 0),
            0,
            u8::from(case & 1 != 0),
            u8::from(case & 2 != 0),
            0,
            0,
            0,
            0,
        ];
        let mut segments = Vec::new();
        march_binary_grid(&grid, Region::new(0, 0, 3, 3), &mut segments);
        let expected: Vec<Segment> = cell_segments(case, 0.0, 0.0).collect();
        assert_eq!(segments, expected, "case {}", case);
        assert_eq!(
            cell_case(case & 8 != 0, case & 4 != 0, case & 2 != 0, case & 1 != 0),
            case
        );
    }
}

#[test]
fn test_smallest_region_walks_one_cell() {
    let field = spike_field(3, 3, 0.0, 10.0, 0, 0);
    let (x, y, width, height) = regions::MIN_CELL;
    let segments = trace_level(&field, Region::new(x, y, width, height), 5).unwrap();
    let expected: Vec<Segment> = cell_segments(8, 0.0, 0.0).collect();
    assert_eq!(segments, expected);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_uniform_field_above_threshold_has_no_segments() {
    let field = uniform_field(4, 4, 500.0);
    let segments = trace_level(&field, field.bounds(), 400).unwrap();
    assert!(segments.is_empty());
}

#[test]
fn test_uniform_field_below_threshold_has_no_segments() {
    let field = uniform_field(4, 4, 500.0);
    let segments = trace_level(&field, field.bounds(), 600).unwrap();
    assert!(segments.is_empty());
}

#[test]
fn test_value_equal_to_threshold_is_below() {
    let field = uniform_field(4, 4, 500.0);
    let segments = trace_level(&field, field.bounds(), 500).unwrap();
    assert!(segments.is_empty());

    let field = spike_field(4, 4, 0.0, 500.0, 1, 1);
    assert!(trace_level(&field, field.bounds(), 500).unwrap().is_empty());
    assert_eq!(trace_level(&field, field.bounds(), 499).unwrap().len(), 4);
}

#[test]
fn test_checkerboard_gives_saddles() {
    let field = checkerboard_field(4, 4, 300.0, 700.0);
    let segments = trace_level(&field, field.bounds(), 500).unwrap();

    // 2x2 cells, two segments each
    assert_eq!(segments.len(), 8);

    // Cell (0, 0): TR and BL above -> case 5
    let case5: Vec<Segment> = cell_segments(5, 0.0, 0.0).collect();
    assert_eq!(&segments[0..2], case5.as_slice());

    // Cell (0, 1): TL and BR above -> case 10 (walk is column by column)
    let case10: Vec<Segment> = cell_segments(10, 0.0, 1.0).collect();
    assert_eq!(&segments[2..4], case10.as_slice());
}

#[test]
fn test_spike_is_enclosed() {
    let field = spike_field(5, 5, 0.0, 10.0, 2, 2);
    let segments = trace_level(&field, field.bounds(), 5).unwrap();
    // The four cells around the spike each draw one corner segment
    assert_eq!(segments.len(), 4);

    let expected = [
        // cell (1, 1): BR -> S-E
        Segment {
            start: Point::new(2.0, 2.5),
            end: Point::new(2.5, 2.0),
        },
        // cell (1, 2): TR -> N-E
        Segment {
            start: Point::new(2.0, 2.5),
            end: Point::new(2.5, 3.0),
        },
        // cell (2, 1): BL -> S-W
        Segment {
            start: Point::new(3.0, 2.5),
            end: Point::new(2.5, 2.0),
        },
        // cell (2, 2): TL -> W-N
        Segment {
            start: Point::new(2.5, 3.0),
            end: Point::new(3.0, 2.5),
        },
    ];
    assert_eq!(segments, expected);
}

#[test]
fn test_vertical_edge_from_gradient() {
    let field = horizontal_gradient(6, 4, 0.0, 10.0);
    let segments = trace_level(&field, field.bounds(), 25).unwrap();

    // Columns 3.. are above 25; cells anchored at x = 2 straddle the edge
    assert_eq!(segments.len(), 2);
    for segment in &segments {
        assert_eq!(segment.start.x, 3.0);
        assert_eq!(segment.end.x, 3.0);
    }
}

// ============================================================================
// Multi-level tracing
// ============================================================================

#[test]
fn test_levels_follow_contour_step() {
    let field = horizontal_gradient(12, 6, 0.0, 10.0);
    let spec = BandSpec::new(0, 100, 4).unwrap();
    let path = trace(&field, field.bounds(), &spec).unwrap();

    let thresholds: Vec<i64> = path.levels().iter().map(|l| l.threshold).collect();
    assert_eq!(thresholds, vec![0, 25, 50, 75]);

    // Every threshold crosses between two columns inside the walked cells
    for (index, level) in path.levels().iter().enumerate() {
        assert_eq!(level.segment_count, 4, "level {}", index);
    }

    // Segments accumulate lowest threshold first
    assert_eq!(path.level_segments(0)[0].start.x, 1.0);
    assert_eq!(path.level_segments(3)[0].start.x, 8.0);
}

#[test]
fn test_trace_is_idempotent() {
    let field = star_field(32, 24, 600.0, 3000.0, 4.0);
    let spec = BandSpec::new(650, 3600, 10).unwrap();

    let first = trace(&field, field.bounds(), &spec).unwrap();
    let second = trace(&field, field.bounds(), &spec).unwrap();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_parallel_trace_matches_sequential() {
    let field = star_field(40, 40, 600.0, 3000.0, 6.0);
    let spec = BandSpec::new(650, 3600, 12).unwrap();
    let roi = Region::new(3, 5, 30, 28);

    let sequential = trace(&field, roi, &spec).unwrap();
    let parallel = trace_parallel(&field, roi, &spec).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_segments_stay_inside_region() {
    let field = star_field(30, 30, 0.0, 1000.0, 5.0);
    let roi = Region::new(5, 7, 18, 15);
    let spec = BandSpec::new(10, 900, 6).unwrap();
    let path = trace(&field, roi, &spec).unwrap();

    for segment in path.segments() {
        for point in [segment.start, segment.end] {
            assert!(point.x >= roi.x as f32 + 0.5 && point.x <= (roi.right() - 1) as f32);
            assert!(point.y >= roi.y as f32 + 0.5 && point.y <= (roi.bottom() - 1) as f32);
        }
    }
}

#[test]
fn test_trace_rejects_bad_regions() {
    let field = GridField::from_fn(8, 8, |x, _| x as f32);
    let spec = BandSpec::new(0, 8, 2).unwrap();
    assert!(trace(&field, Region::new(0, 0, 0, 8), &spec).is_err());
    assert!(trace(&field, Region::new(4, 4, 8, 2), &spec).is_err());
    assert!(trace_level(&field, Region::new(0, 0, 9, 1), 3).is_err());
    assert_eq!(field.width(), 8);
}
