//! GUI state + messages.
//! Pure data definitions used by update/ + view/.

use crate::core::playback::PlaybackController;
use crate::core::types::TrackIndex;

/// App state.
///
/// Everything mutable lives in the controller; the GUI only forwards
/// intents and reads snapshots back.
#[derive(Debug, Default)]
pub(crate) struct SoundWave {
    pub player: PlaybackController,
}

/// Message = "something happened".
#[derive(Debug, Clone)]
pub(crate) enum Message {
    /// Progress timer fired (only subscribed while playing).
    Tick,

    // Transport
    TogglePlay,
    Next,
    Previous,
    ToggleShuffle,
    CycleRepeat,
    SetVolume(f32),

    // Track list
    SelectTrack(TrackIndex),
    ToggleLike(TrackIndex),
}
