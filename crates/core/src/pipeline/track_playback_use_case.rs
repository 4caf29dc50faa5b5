use std::sync::Arc;

use crate::playback::domain::playback_clock::PlaybackClock;
use crate::playback::domain::region_locator::{locate_index, sort_by_start};
use crate::pipeline::playback_logger::PlaybackLogger;
use crate::shared::region::Region;

/// Reported by [`TrackPlaybackUseCase::tick`] when the active region changes.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveChange {
    pub time: f64,
    pub previous: Option<String>,
    pub current: Option<String>,
}

/// Follows the playback clock and keeps track of which region is active,
/// the per-tick work of the viewer's highlight loop.
///
/// Regions are sorted by start once at construction, so each tick is a
/// single binary search.
pub struct TrackPlaybackUseCase {
    regions: Vec<Region>,
    clock: Arc<dyn PlaybackClock>,
    logger: Box<dyn PlaybackLogger>,
    active: Option<usize>,
}

impl TrackPlaybackUseCase {
    pub fn new(
        mut regions: Vec<Region>,
        clock: Arc<dyn PlaybackClock>,
        mut logger: Box<dyn PlaybackLogger>,
    ) -> Self {
        sort_by_start(&mut regions);
        logger.info(&format!("Tracking {} regions", regions.len()));
        Self {
            regions,
            clock,
            logger,
            active: None,
        }
    }

    /// Reads the clock and updates the active region. Returns the change,
    /// or `None` when the same region is still active.
    pub fn tick(&mut self) -> Option<ActiveChange> {
        let time = self.clock.current_time();
        let next = locate_index(&self.regions, time);
        if next == self.active {
            return None;
        }

        let previous = self.active.map(|i| self.regions[i].id.clone());
        self.active = next;
        let current = self.active().map(|r| r.id.clone());
        self.logger.active_changed(time, current.as_deref());

        Some(ActiveChange {
            time,
            previous,
            current,
        })
    }

    pub fn active(&self) -> Option<&Region> {
        self.active.map(|i| &self.regions[i])
    }

    /// Regions in the order used for lookup.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn finish(&self) {
        self.logger.summary();
    }
}
