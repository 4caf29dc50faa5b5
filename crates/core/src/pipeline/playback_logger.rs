use std::collections::HashMap;

/// Observer for playback tracking events.
///
/// Decouples the tracking use case from where its output goes (log crate,
/// GUI highlight, nothing at all).
pub trait PlaybackLogger: Send {
    /// The active region changed; `None` means no region is active.
    fn active_changed(&mut self, time: f64, region_id: Option<&str>);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-playback summary. Default: no-op.
    fn summary(&self) {}
}

/// Discards all events.
pub struct NullPlaybackLogger;

impl PlaybackLogger for NullPlaybackLogger {
    fn active_changed(&mut self, _time: f64, _region_id: Option<&str>) {}
    fn info(&mut self, _message: &str) {}
}

/// Forwards events to the `log` crate and counts how often each region
/// became active, for a summary at the end of playback.
#[derive(Default)]
pub struct LogPlaybackLogger {
    activations: HashMap<String, usize>,
    changes: usize,
}

impl LogPlaybackLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changes(&self) -> usize {
        self.changes
    }

    pub fn activations_for(&self, region_id: &str) -> usize {
        self.activations.get(region_id).copied().unwrap_or(0)
    }

    /// Returns the formatted summary string, or `None` if nothing happened.
    pub fn summary_string(&self) -> Option<String> {
        if self.changes == 0 {
            return None;
        }

        let mut lines = vec![format!(
            "Playback summary ({} region changes):",
            self.changes
        )];
        let mut ids: Vec<_> = self.activations.keys().collect();
        ids.sort();
        for id in ids {
            lines.push(format!("  {id}: {} activations", self.activations[id]));
        }
        Some(lines.join("\n"))
    }
}

impl PlaybackLogger for LogPlaybackLogger {
    fn active_changed(&mut self, time: f64, region_id: Option<&str>) {
        self.changes += 1;
        match region_id {
            Some(id) => {
                *self.activations.entry(id.to_string()).or_default() += 1;
                log::info!("{time:.2}s: region {id} active");
            }
            None => log::info!("{time:.2}s: no active region"),
        }
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}
