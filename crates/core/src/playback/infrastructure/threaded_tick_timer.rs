use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{RecvTimeoutError, Sender};

use crate::playback::domain::tick_timer::{TickFn, TickTimer};
use crate::shared::constants::DEFAULT_TICK_INTERVAL;

struct RunningTimer {
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

/// Runs the tick callback on a dedicated thread.
///
/// The worker waits on a stop channel with the tick interval as timeout,
/// so `stop` wakes it immediately instead of waiting out the interval.
/// `stop` joins the worker: once it returns, no further ticks fire.
pub struct ThreadedTickTimer {
    running: Option<RunningTimer>,
}

impl ThreadedTickTimer {
    pub fn new() -> Self {
        Self { running: None }
    }

    /// Starts with [`DEFAULT_TICK_INTERVAL`].
    pub fn start_default(&mut self, on_tick: TickFn) {
        self.start(on_tick, DEFAULT_TICK_INTERVAL);
    }
}

impl Default for ThreadedTickTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TickTimer for ThreadedTickTimer {
    fn start(&mut self, mut on_tick: TickFn, interval: Duration) {
        self.stop();

        let (stop_tx, stop_rx) = crossbeam_channel::bounded::<()>(1);
        let handle = thread::spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => on_tick(),
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        log::debug!("Tick timer started ({} ms)", interval.as_millis());
        self.running = Some(RunningTimer { stop_tx, handle });
    }

    fn stop(&mut self) {
        let Some(running) = self.running.take() else {
            return;
        };
        let _ = running.stop_tx.send(());
        if running.handle.join().is_err() {
            log::warn!("Tick callback panicked");
        }
        log::debug!("Tick timer stopped");
    }

    fn is_running(&self) -> bool {
        self.running.is_some()
    }
}

impl Drop for ThreadedTickTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
