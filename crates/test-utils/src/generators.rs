//! Synthetic scalar fields with predictable brightness layouts.
//!
//! All generators return a row-major [`GridField`] so tests can check
//! individual samples with `value_at(x, y)`.

use field_common::GridField;

/// A field where every pixel has the same value.
pub fn uniform_field(width: usize, height: usize, value: f32) -> GridField {
    GridField::from_fn(width, height, |_, _| value)
}

/// Alternating `low`/`high` pixels; `(0, 0)` is `low`.
///
/// Every 2x2 neighborhood has two diagonal corners above any threshold
/// between `low` and `high`, so every cell is a saddle.
pub fn checkerboard_field(width: usize, height: usize, low: f32, high: f32) -> GridField {
    GridField::from_fn(width, height, |x, y| if (x + y) % 2 == 0 { low } else { high })
}

/// Values increasing left to right from `start` by `step` per column.
pub fn horizontal_gradient(width: usize, height: usize, start: f32, step: f32) -> GridField {
    GridField::from_fn(width, height, |x, _| start + step * x as f32)
}

/// Values increasing top to bottom from `start` by `step` per row.
pub fn vertical_gradient(width: usize, height: usize, start: f32, step: f32) -> GridField {
    GridField::from_fn(width, height, |_, y| start + step * y as f32)
}

/// Every pixel holds its own row-major index: `y * width + x`.
///
/// Each value appears exactly once, which makes band counts easy to derive.
pub fn index_field(width: usize, height: usize) -> GridField {
    GridField::from_fn(width, height, |x, y| (y * width + x) as f32)
}

/// A single gaussian "star" on a flat sky background.
///
/// # Arguments
///
/// * `background` - Sky level
/// * `peak` - Brightness added at the center
/// * `sigma` - Gaussian width in pixels
pub fn star_field(width: usize, height: usize, background: f32, peak: f32, sigma: f32) -> GridField {
    let cx = (width as f32 - 1.0) / 2.0;
    let cy = (height as f32 - 1.0) / 2.0;
    let two_sigma_sq = 2.0 * sigma * sigma;

    GridField::from_fn(width, height, |x, y| {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        background + peak * (-(dx * dx + dy * dy) / two_sigma_sq).exp()
    })
}

/// A field of `value` with a single `spike` pixel at `(sx, sy)`.
pub fn spike_field(width: usize, height: usize, value: f32, spike: f32, sx: usize, sy: usize) -> GridField {
    GridField::from_fn(width, height, |x, y| if x == sx && y == sy { spike } else { value })
}
