use uuid::Uuid;

use crate::regions::domain::id_generator::IdGenerator;
use crate::regions::domain::region_factory::RegionFactory;
use crate::shared::region::Region;

/// Random (v4) UUID identifiers in hyphenated lowercase form.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl Default for RegionFactory {
    fn default() -> Self {
        Self::new(Box::new(UuidIdGenerator))
    }
}

/// Shorthand for [`RegionFactory::create`] with UUID identifiers.
pub fn create_region(page_index: u32, seq: u32, color: &str) -> Region {
    RegionFactory::default().create(page_index, seq, color)
}
