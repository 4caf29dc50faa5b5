use crate::regions::domain::id_generator::IdGenerator;
use crate::shared::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_X, DEFAULT_Y};
use crate::shared::region::Region;

/// Builds new regions with default geometry and a fresh identifier.
///
/// New regions span the full page width as a band starting a quarter of
/// the way down; they carry no playback start until the caller assigns one.
pub struct RegionFactory {
    ids: Box<dyn IdGenerator>,
}

impl RegionFactory {
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    /// `page_index` is zero-based; the label shows it one-based, e.g. `"3-2"`
    /// for the second region on the third page. No validation is performed.
    pub fn create(&self, page_index: u32, seq: u32, color: &str) -> Region {
        Region {
            id: self.ids.next_id(),
            x: DEFAULT_X,
            y: DEFAULT_Y,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            label: region_label(page_index, seq),
            color: color.to_string(),
            page_index,
            start: None,
        }
    }
}

pub fn region_label(page_index: u32, seq: u32) -> String {
    format!("{}-{seq}", u64::from(page_index) + 1)
}
