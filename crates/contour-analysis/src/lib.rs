//! Brightness band analysis for scalar images.
//!
//! Splits a region of a scalar field into equal-width brightness bands and
//! traces contour lines at the band thresholds:
//! - [`range`]: min/max scan and dialog defaults
//! - [`bands`]: per-band membership sets
//! - [`contour`]: marching squares with a fixed 16-case table
//! - [`palette`]: hue ramp, one color per band
//! - [`analysis`]: runs all of the above for one request

pub mod analysis;
pub mod bands;
pub mod config;
pub mod contour;
pub mod grid_pool;
pub mod palette;
pub mod range;
pub mod thresholds;

pub use analysis::{analyze, Analysis, AnalysisOptions, AnalysisReport, BandReport};
pub use bands::MembershipSet;
pub use config::AnalysisConfig;
pub use contour::{ContourLevel, ContourPath, Edge, Point, Segment};
pub use range::{ThresholdDefaults, ValueRange};
pub use thresholds::BandSpec;
