/// Current position of the external audio playback engine, in seconds.
pub trait PlaybackClock: Send + Sync {
    fn current_time(&self) -> f64;
}
