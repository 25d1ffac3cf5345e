//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Message, SoundWave};

mod library;
mod transport;

pub(crate) fn update(state: &mut SoundWave, message: Message) -> Task<Message> {
    match message {
        Message::Tick => transport::tick(state),

        // Transport
        Message::TogglePlay => transport::toggle_play(state),
        Message::Next => transport::next(state),
        Message::Previous => transport::previous(state),
        Message::ToggleShuffle => transport::toggle_shuffle(state),
        Message::CycleRepeat => transport::cycle_repeat(state),
        Message::SetVolume(value) => transport::set_volume(state, value),

        // Track list
        Message::SelectTrack(i) => library::select_track(state, i),
        Message::ToggleLike(i) => library::toggle_like(state, i),
    }
}
