//! gui/subscription.rs
//! Progress timer: emit Tick at the controller's interval while playing.
//!
//! The timer exists only while this function returns it. As soon as the
//! controller stops asking for ticks (pause) or the app exits, the runtime
//! drops the stream, so no tick can outlive playback.

use iced::{Subscription, time};

use super::state::{Message, SoundWave};

pub(crate) fn subscription(state: &SoundWave) -> Subscription<Message> {
    let Some(interval) = state.player.tick_interval() else {
        return Subscription::none();
    };

    time::every(interval).map(|_| Message::Tick)
}
