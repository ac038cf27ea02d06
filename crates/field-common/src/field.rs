//! Read-only scalar fields.

use crate::{FieldError, FieldResult, Region};

/// Read-only access to a 2D field of brightness values.
///
/// Implementations must be pure: the same `(x, y)` always returns the same value
/// while an analysis runs. Coordinates are absolute (not region-relative).
pub trait ScalarField {
    /// Field width in pixels.
    fn width(&self) -> usize;

    /// Field height in pixels.
    fn height(&self) -> usize;

    /// Value at column `x`, row `y`. Callers stay within `width() x height()`.
    fn value_at(&self, x: usize, y: usize) -> f32;

    /// Region covering the whole field.
    fn bounds(&self) -> Region {
        Region::full(self.width(), self.height())
    }
}

impl<T: ScalarField + ?Sized> ScalarField for &T {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    #[inline]
    fn value_at(&self, x: usize, y: usize) -> f32 {
        (**self).value_at(x, y)
    }
}

/// A dense field stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct GridField {
    data: Vec<f32>,
    width: usize,
    height: usize,
}

impl GridField {
    /// Wrap row-major `data` of `width * height` samples.
    pub fn new(data: Vec<f32>, width: usize, height: usize) -> FieldResult<Self> {
        if data.len() != width * height {
            return Err(FieldError::invalid(
                "data",
                format!(
                    "expected {} samples for {}x{}, got {}",
                    width * height,
                    width,
                    height,
                    data.len()
                ),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build a field by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f32,
    {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Raw samples, row-major.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}

impl ScalarField for GridField {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn value_at(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }
}
