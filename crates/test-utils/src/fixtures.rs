//! Common fixtures for isophote tests.

/// Region definitions as `(x, y, width, height)`.
pub mod regions {
    /// Smallest region that still has one marching squares cell.
    pub const MIN_CELL: (usize, usize, usize, usize) = (0, 0, 3, 3);

    /// Interior of a 16x16 field, one pixel margin on every side.
    pub const INSET_16: (usize, usize, usize, usize) = (1, 1, 14, 14);

    /// Degenerate region with no rows.
    pub const NO_ROWS: (usize, usize, usize, usize) = (0, 0, 8, 0);

    /// Degenerate region with no columns.
    pub const NO_COLUMNS: (usize, usize, usize, usize) = (0, 0, 0, 8);
}

/// Brightness values typical of 10-bit and 16-bit camera frames.
pub mod brightness {
    /// Dark sky background of a 16-bit frame.
    pub const SKY_16BIT: f32 = 612.0;

    /// Saturated pixel of a 16-bit frame.
    pub const SATURATED_16BIT: f32 = 65535.0;

    /// Full scale of a 10-bit sensor.
    pub const FULL_SCALE_10BIT: f32 = 1023.0;
}
