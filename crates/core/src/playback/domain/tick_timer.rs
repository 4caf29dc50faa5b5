use std::time::Duration;

/// Callback invoked on every tick.
pub type TickFn = Box<dyn FnMut() + Send>;

/// Repeating timer controller owned by the caller.
///
/// At most one timer runs per controller: `start` replaces any running
/// timer, and `stop` on an idle controller does nothing.
pub trait TickTimer {
    fn start(&mut self, on_tick: TickFn, interval: Duration);

    fn stop(&mut self);

    fn is_running(&self) -> bool;
}
