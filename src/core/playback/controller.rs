//! core/playback/controller.rs
//! PlaybackController: owns all mutable player state.
//!
//! Every operation is total. Indices coming from the UI are always in range;
//! anything else is logged and ignored, the same way a click on a stale row
//! would be.

use std::collections::BTreeSet;
use std::time::Duration;

use tracing::{debug, info, trace, warn};

use super::{Direction, PlaybackStatus, RepeatMode, TickOutcome};
use crate::core::catalog::{self, TRACK_COUNT};
use crate::core::settings::Settings;
use crate::core::time::{elapsed_secs, format_clock};
use crate::core::types::{Track, TrackIndex};

/// Snapshot of everything the view needs to render the player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Always a valid index into the catalog.
    pub current_track_index: TrackIndex,
    pub status: PlaybackStatus,
    /// 0.0..=100.0, reset to 0 on every track change.
    pub progress_percent: f32,
    pub volume_percent: u8,
    pub shuffle_enabled: bool,
    pub repeat_mode: RepeatMode,
    pub liked_tracks: BTreeSet<TrackIndex>,
}

impl PlayerState {
    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }
}

#[derive(Debug, Clone)]
pub struct PlaybackController {
    settings: Settings,
    state: PlayerState,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl PlaybackController {
    pub fn new(settings: Settings) -> Self {
        let liked_tracks = settings
            .initial_liked
            .iter()
            .copied()
            .filter(|&i| i < TRACK_COUNT)
            .collect();

        let state = PlayerState {
            current_track_index: 0,
            status: PlaybackStatus::Paused,
            progress_percent: 0.0,
            volume_percent: settings.initial_volume.min(100),
            shuffle_enabled: false,
            repeat_mode: RepeatMode::Off,
            liked_tracks,
        };

        Self { settings, state }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn current_track(&self) -> &'static Track {
        &catalog::TRACKS[self.state.current_track_index]
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn is_liked(&self, index: TrackIndex) -> bool {
        self.state.liked_tracks.contains(&index)
    }

    /// How often the owner should call `tick`, or `None` when no timer
    /// should be running at all.
    pub fn tick_interval(&self) -> Option<Duration> {
        self.is_playing().then_some(self.settings.tick_interval)
    }

    // Transport

    pub fn toggle_play(&mut self) -> PlaybackStatus {
        self.state.status = match self.state.status {
            PlaybackStatus::Paused => PlaybackStatus::Playing,
            PlaybackStatus::Playing => PlaybackStatus::Paused,
        };

        info!(
            status = %self.state.status,
            track = self.current_track().title,
            "playback toggled"
        );
        self.state.status
    }

    pub fn advance_track(&mut self, direction: Direction) -> TrackIndex {
        let n = TRACK_COUNT;
        let cur = self.state.current_track_index;
        let to = match direction {
            Direction::Next => (cur + 1) % n,
            Direction::Previous => (cur + n - 1) % n,
        };

        self.move_to(to);
        to
    }

    pub fn select_track(&mut self, index: TrackIndex) {
        if index >= TRACK_COUNT {
            warn!(index, "select_track: index outside catalog, ignoring");
            return;
        }

        self.move_to(index);
    }

    fn move_to(&mut self, index: TrackIndex) {
        self.state.current_track_index = index;
        self.state.progress_percent = 0.0;

        info!(index, track = self.current_track().title, "track changed");
    }

    /// One timer tick. Stale ticks (arriving after pause) are ignored.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_playing() {
            trace!("tick while paused");
            return TickOutcome::Idle;
        }

        let next = self.state.progress_percent + self.settings.progress_step;
        if next > 100.0 {
            let to = self.advance_track(Direction::Next);
            debug!(to, "track finished, auto-advancing");
            return TickOutcome::Advanced { to };
        }

        self.state.progress_percent = next;
        trace!(progress = next, "tick");
        TickOutcome::Progressed(next)
    }

    // Library

    /// Returns whether `index` is liked afterwards.
    pub fn toggle_like(&mut self, index: TrackIndex) -> bool {
        if index >= TRACK_COUNT {
            warn!(index, "toggle_like: index outside catalog, ignoring");
            return false;
        }

        let liked = if self.state.liked_tracks.remove(&index) {
            false
        } else {
            self.state.liked_tracks.insert(index);
            true
        };

        debug!(index, liked, "like toggled");
        liked
    }

    // Flags (display only)

    pub fn toggle_shuffle(&mut self) -> bool {
        self.state.shuffle_enabled = !self.state.shuffle_enabled;
        debug!(shuffle = self.state.shuffle_enabled, "shuffle toggled");
        self.state.shuffle_enabled
    }

    pub fn cycle_repeat_mode(&mut self) -> RepeatMode {
        self.state.repeat_mode = self.state.repeat_mode.cycled();
        debug!(repeat = %self.state.repeat_mode, "repeat mode cycled");
        self.state.repeat_mode
    }

    pub fn set_volume(&mut self, percent: u8) {
        self.state.volume_percent = percent.min(100);
    }

    // Derived

    /// Elapsed time label (`M:SS`).
    ///
    /// Uses the fixed reference duration for every track, not the current
    /// track's own label.
    pub fn displayed_elapsed_time(&self) -> String {
        format_clock(elapsed_secs(
            self.state.progress_percent,
            self.settings.reference_duration_secs,
        ))
    }
}

#[cfg(test)]
#[path = "./controller_test.rs"]
mod controller_test;
