//! One color per band, sweeping hue downward from violet.

use field_common::{Color, FieldError, FieldResult};

/// Hue given to the highest band.
pub const START_HUE: f32 = 0.8;

/// Hue of every band, indexed by band (0 = lowest).
///
/// The highest band gets [`START_HUE`]; each lower band is `START_HUE / regions`
/// further down, so band 0 ends at `START_HUE / regions`.
pub fn band_hues(regions: usize) -> FieldResult<Vec<f32>> {
    if regions == 0 {
        return Err(FieldError::invalid("regions", "band count must be at least 1"));
    }

    let step = START_HUE / regions as f32;
    let mut hues = vec![0.0f32; regions];
    let mut hue = START_HUE;
    for slot in hues.iter_mut().rev() {
        *slot = hue;
        hue -= step;
    }
    Ok(hues)
}

/// Fully saturated, full brightness color for every band.
pub fn palette(regions: usize) -> FieldResult<Vec<Color>> {
    Ok(band_hues(regions)?
        .into_iter()
        .map(|hue| Color::from_hsb(hue, 1.0, 1.0))
        .collect())
}
