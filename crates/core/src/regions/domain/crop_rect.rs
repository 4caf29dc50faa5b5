use crate::regions::domain::geometry::clamp;
use crate::shared::constants::MIN_CROP_SIZE;
use crate::shared::region::Region;

/// Normalized crop window used when exporting a region's page area.
///
/// Resolves size before position (the reverse of `clamp_region`), so an
/// oversized region keeps as much of its extent as fits and slides back
/// inside the page instead of shrinking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Crop window in whole pixels of a concrete surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub fn from_region(region: &Region) -> Self {
        let width = clamp(region.width, MIN_CROP_SIZE, 1.0);
        let height = clamp(region.height, MIN_CROP_SIZE, 1.0);
        Self {
            x: clamp(region.x, 0.0, 1.0 - width),
            y: clamp(region.y, 0.0, 1.0 - height),
            width,
            height,
        }
    }

    /// Scales to a `surface_w` x `surface_h` surface. The result is at least
    /// one pixel in each dimension and never extends past the surface.
    pub fn to_pixels(&self, surface_w: u32, surface_h: u32) -> PixelRect {
        let (x, width) = scale_span(self.x, self.width, surface_w);
        let (y, height) = scale_span(self.y, self.height, surface_h);
        PixelRect {
            x,
            y,
            width,
            height,
        }
    }
}

fn scale_span(offset: f64, extent: f64, size: u32) -> (u32, u32) {
    if size == 0 {
        return (0, 0);
    }
    let size_f = size as f64;
    let start = ((offset * size_f).floor() as u32).min(size - 1);
    let len = ((extent * size_f).round() as u32).clamp(1, size - start);
    (start, len)
}
