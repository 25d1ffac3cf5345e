//! gui/mod.rs
//!
//! The iced frontend for the player:
//! - 'SoundWave' holds the one PlaybackController
//! - 'Message' carries clicks, slider moves and timer ticks
//! - 'update()' forwards each message to a controller operation
//! - 'view()' renders header, playlist sidebar, now playing and "Up Next"
//! - 'subscription()' runs the progress timer only while playing
//! - 'util' has the slider/label helpers

pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod util;
pub(crate) mod view;

pub(crate) use state::SoundWave;
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::view;
