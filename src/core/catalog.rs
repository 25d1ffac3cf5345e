//! core/catalog.rs
//! The hardcoded catalog: six tracks and five sidebar playlists.

use super::time::{DurationLabelError, parse_duration_label};
use super::types::{PlaylistSummary, Track};

pub const TRACKS: [Track; 6] = [
    Track {
        id: 1,
        title: "Midnight Dreams",
        artist: "Luna Eclipse",
        album: "Neon Nights",
        duration: "3:42",
        cover: "🌙",
    },
    Track {
        id: 2,
        title: "Electric Pulse",
        artist: "Cyber Groove",
        album: "Digital Waves",
        duration: "4:15",
        cover: "⚡",
    },
    Track {
        id: 3,
        title: "Ocean Breeze",
        artist: "Tranquil Sounds",
        album: "Nature's Symphony",
        duration: "5:23",
        cover: "🌊",
    },
    Track {
        id: 4,
        title: "City Lights",
        artist: "Urban Beats",
        album: "Metropolitan",
        duration: "3:58",
        cover: "🌃",
    },
    Track {
        id: 5,
        title: "Sunset Vibes",
        artist: "Chill Masters",
        album: "Golden Hour",
        duration: "4:32",
        cover: "🌅",
    },
    Track {
        id: 6,
        title: "Starlight Serenade",
        artist: "Cosmic Jazz",
        album: "Space Lounge",
        duration: "6:12",
        cover: "✨",
    },
];

pub const PLAYLISTS: [PlaylistSummary; 5] = [
    PlaylistSummary {
        name: "Recently Played",
        count: 12,
        glyph: "🕒",
    },
    PlaylistSummary {
        name: "Favorites",
        count: 8,
        glyph: "❤️",
    },
    PlaylistSummary {
        name: "Chill Vibes",
        count: 24,
        glyph: "😌",
    },
    PlaylistSummary {
        name: "Workout Mix",
        count: 18,
        glyph: "💪",
    },
    PlaylistSummary {
        name: "Study Session",
        count: 15,
        glyph: "📚",
    },
];

/// Number of tracks the controller wraps around.
pub const TRACK_COUNT: usize = TRACKS.len();

/// Sum of every track's duration label, in seconds.
pub fn total_runtime_secs() -> Result<u32, DurationLabelError> {
    TRACKS
        .iter()
        .map(|t| parse_duration_label(t.duration))
        .sum()
}

#[cfg(test)]
#[path = "./catalog_test.rs"]
mod catalog_test;
