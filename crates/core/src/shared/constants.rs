use std::time::Duration;

/// Smallest width/height a region may shrink to, as a fraction of the surface.
pub const MIN_SIZE: f64 = 0.04;

pub const REGION_COLOR: &str = "#22d3ee";

pub const DEFAULT_X: f64 = 0.0;
pub const DEFAULT_Y: f64 = 0.25;
pub const DEFAULT_WIDTH: f64 = 1.0;
pub const DEFAULT_HEIGHT: f64 = 0.2;

/// Roughly one display frame.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Lower bound on crop extents when exporting a region.
pub const MIN_CROP_SIZE: f64 = 0.001;
