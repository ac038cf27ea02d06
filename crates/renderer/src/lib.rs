//! Image rendering for brightness band analyses.
//!
//! - [`composite`]: paints band membership over the source image and strokes
//!   the contour path on top
//! - [`png`]: PNG encoding of the composite (indexed or RGBA)

pub mod composite;
pub mod error;
pub mod png;

pub use composite::{composite, OverlayStyle};
pub use error::{RenderError, RenderResult};
