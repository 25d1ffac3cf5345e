//! core/playback/mod.rs
//! Transport state machine (play/pause, skip, like, shuffle/repeat flags)
//! plus the timer-driven fake progress.
//!
//! No timer lives here. The controller only says *whether* it wants ticks
//! (`tick_interval`) and what a tick does (`tick`). Whoever owns the timer
//! must drop it as soon as `tick_interval` returns `None`.

use strum::Display;

use super::types::TrackIndex;

mod controller;

pub use controller::{PlaybackController, PlayerState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum PlaybackStatus {
    #[default]
    Paused,
    Playing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Repeat control. Cycles off -> all -> one -> off.
///
/// Display only: does not change what `advance_track` or auto-advance pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum RepeatMode {
    #[default]
    Off,
    All,
    One,
}

impl RepeatMode {
    pub fn cycled(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }
}

/// What a single timer tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Paused: the tick was stale and ignored.
    Idle,
    /// Progress moved to the contained percentage.
    Progressed(f32),
    /// Progress ran past 100%, playback moved on to `to` at 0%.
    Advanced { to: TrackIndex },
}
