//! gui/update/transport.rs
//! GUI -> controller bridge for play/pause, skip, flags, volume and ticks.
//!
//! Starting/stopping the timer is not done here: flipping the play state
//! is enough, `subscription()` follows it.

use iced::Task;

use super::super::state::{Message, SoundWave};
use super::super::util::volume_percent;
use crate::core::playback::Direction;

pub(crate) fn tick(state: &mut SoundWave) -> Task<Message> {
    state.player.tick();
    Task::none()
}

pub(crate) fn toggle_play(state: &mut SoundWave) -> Task<Message> {
    state.player.toggle_play();
    Task::none()
}

pub(crate) fn next(state: &mut SoundWave) -> Task<Message> {
    state.player.advance_track(Direction::Next);
    Task::none()
}

pub(crate) fn previous(state: &mut SoundWave) -> Task<Message> {
    state.player.advance_track(Direction::Previous);
    Task::none()
}

pub(crate) fn toggle_shuffle(state: &mut SoundWave) -> Task<Message> {
    state.player.toggle_shuffle();
    Task::none()
}

pub(crate) fn cycle_repeat(state: &mut SoundWave) -> Task<Message> {
    state.player.cycle_repeat_mode();
    Task::none()
}

pub(crate) fn set_volume(state: &mut SoundWave, value: f32) -> Task<Message> {
    state.player.set_volume(volume_percent(value));
    Task::none()
}
