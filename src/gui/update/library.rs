//! gui/update/library.rs
//! Track-list clicks: select a row, toggle a heart.

use iced::Task;

use super::super::state::{Message, SoundWave};
use crate::core::types::TrackIndex;

pub(crate) fn select_track(state: &mut SoundWave, index: TrackIndex) -> Task<Message> {
    state.player.select_track(index);
    Task::none()
}

pub(crate) fn toggle_like(state: &mut SoundWave, index: TrackIndex) -> Task<Message> {
    state.player.toggle_like(index);
    Task::none()
}
