//! SoundWave
//!
//! # What this program is
//! A small desktop music player mock-up (built with the `iced` GUI library).
//! There is no audio: six hardcoded tracks, a fake progress bar that a timer
//! pushes forward, transport buttons, hearts, and a static playlist sidebar.
//!
//! # How it is wired
//! - `SoundWave` = the app state, which is just one `PlaybackController`
//! - `Message` = a click, a slider move, or a timer tick
//! - `update(state, message)` forwards the message to the controller
//! - `view(state)` draws the controller's current state
//! - `subscription(state)` runs the 100ms progress timer while playing
//!
//! # Known gaps (kept on purpose)
//! - Shuffle and repeat only change how their buttons look.
//! - The elapsed-time label always assumes a 3:42 track.
//! - The progress bar cannot be dragged.

mod core;
mod gui;
mod telemetry;

use gui::{SoundWave, subscription, update, view};

fn main() -> iced::Result {
    telemetry::init_logging();
    tracing::info!("starting SoundWave");

    iced::application(SoundWave::default, update, view)
        .title("SoundWave")
        .subscription(subscription)
        .window_size((1100.0, 780.0))
        .run()
}
