//! Chart rendering for the rainfall toolkit.
//!
//! The renderers take a series or a year table plus display metadata and
//! draw to a file through one of two plotters backends: SVG for vector
//! output, bitmap for PNG. They never touch aggregation results.

pub mod bar;
pub mod error;
pub mod line;
pub mod palette;
pub mod style;
