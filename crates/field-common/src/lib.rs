//! Common types shared by the isophote crates.
//!
//! - [`ScalarField`]: read-only access to pixel brightness values
//! - [`Region`]: rectangular region of interest inside a field
//! - [`GridPoint`]: integer pixel coordinate
//! - [`Color`]: RGBA color with HSB conversion

pub mod color;
pub mod error;
pub mod field;
pub mod grid;
pub mod region;

pub use color::Color;
pub use error::{FieldError, FieldResult};
pub use field::{GridField, ScalarField};
pub use grid::GridPoint;
pub use region::{Region, RegionParseError};
