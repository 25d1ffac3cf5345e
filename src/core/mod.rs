//! core/mod.rs
//!
//! Everything the player knows, with no GUI imports:
//! - the static catalog (tracks + sidebar playlists)
//! - the playback/transport state machine
//! - clock formatting
//!
//! The GUI holds one `PlaybackController`, forwards user intents to it and
//! renders whatever state it reports.

pub mod catalog;
pub mod playback;
pub mod settings;
pub mod time;
pub mod types;
