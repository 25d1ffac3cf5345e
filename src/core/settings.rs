//! core/settings.rs
//! Player tunables: timer cadence, progress step, starting volume and likes.

use std::collections::BTreeSet;
use std::time::Duration;

use super::types::TrackIndex;

#[derive(Clone, Debug)]
pub struct Settings {
    /// Period of the progress timer while playing.
    pub tick_interval: Duration,
    /// Percent added to progress on every tick.
    pub progress_step: f32,
    /// Track length used for the elapsed-time label.
    /// Fixed at 3:42 for every track, the per-track label is not consulted.
    pub reference_duration_secs: u32,
    pub initial_volume: u8,
    pub initial_liked: BTreeSet<TrackIndex>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(100),
            progress_step: 0.5,
            reference_duration_secs: 3 * 60 + 42,
            initial_volume: 75,
            initial_liked: BTreeSet::from([0, 2]),
        }
    }
}
