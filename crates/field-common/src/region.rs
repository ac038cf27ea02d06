//! Rectangular regions of interest.

use crate::{FieldError, FieldResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A rectangular region of interest in pixel coordinates.
///
/// `x`/`y` is the inclusive top-left origin; every coordinate reported by the
/// analysis is offset by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    /// Create a new region from origin and size.
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A region covering a whole `width` x `height` field.
    pub fn full(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }

    /// True when the region has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Exclusive right edge.
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }

    /// Check that the region is non-empty and lies inside a field of the given size.
    pub fn validate_within(&self, field_width: usize, field_height: usize) -> FieldResult<()> {
        if self.is_empty() {
            return Err(FieldError::invalid(
                "region",
                format!("{} has zero width or height", self),
            ));
        }

        let right = self.x.checked_add(self.width);
        let bottom = self.y.checked_add(self.height);
        let inside = matches!((right, bottom), (Some(r), Some(b)) if r <= field_width && b <= field_height);
        if !inside {
            return Err(FieldError::OutOfBounds {
                requested: self.to_string(),
                field: format!("{}x{}", field_width, field_height),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}x{}]", self.x, self.y, self.width, self.height)
    }
}

impl FromStr for Region {
    type Err = RegionParseError;

    /// Parse "x,y,width,height".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(RegionParseError::InvalidFormat(s.to_string()));
        }

        let mut values = [0usize; 4];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part
                .parse()
                .map_err(|_| RegionParseError::InvalidNumber(part.to_string()))?;
        }

        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegionParseError {
    #[error("Invalid region format: {0}. Expected 'x,y,width,height'")]
    InvalidFormat(String),

    #[error("Invalid number in region: {0}")]
    InvalidNumber(String),
}
