use std::sync::atomic::{AtomicU64, Ordering};

use crate::playback::domain::playback_clock::PlaybackClock;

/// Clock whose time is set explicitly, for driving playback without an
/// audio engine (simulations, tests).
///
/// Stores the `f64` bit pattern atomically so it can be shared between the
/// tick thread and the caller without a lock.
#[derive(Debug, Default)]
pub struct ManualClock {
    bits: AtomicU64,
}

impl ManualClock {
    pub fn new(time: f64) -> Self {
        Self {
            bits: AtomicU64::new(time.to_bits()),
        }
    }

    pub fn set(&self, time: f64) {
        self.bits.store(time.to_bits(), Ordering::Release);
    }

    /// Moves the clock forward by `delta` seconds and returns the new time.
    pub fn advance(&self, delta: f64) -> f64 {
        let mut current = self.bits.load(Ordering::Acquire);
        loop {
            let next = (f64::from_bits(current) + delta).to_bits();
            match self
                .bits
                .compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return f64::from_bits(next),
                Err(observed) => current = observed,
            }
        }
    }
}

impl PlaybackClock for ManualClock {
    fn current_time(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }
}
