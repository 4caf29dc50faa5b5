use serde::{Deserialize, Serialize};

/// A rectangular annotation anchored to one page, optionally tagged with
/// the playback time at which it becomes active.
///
/// Geometry is expressed as fractions of the rendering surface, so the same
/// record stays valid at any zoom level. The bounds (`x + width <= 1`,
/// `width >= MIN_SIZE`, ...) are enforced by
/// [`clamp_region`](crate::regions::domain::geometry::clamp_region), not by
/// construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub color: String,
    pub page_index: u32,
    /// Playback start in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
}

impl Region {
    /// Start time used for ordering; regions without a start sort as 0.
    pub fn effective_start(&self) -> f64 {
        self.start.unwrap_or(0.0)
    }

    pub fn has_start(&self) -> bool {
        self.start.is_some()
    }

    pub fn with_start(self, start: f64) -> Self {
        Self {
            start: Some(start),
            ..self
        }
    }
}
