//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs are "boring bags of data"
//! - No GUI code
//! - Everything here is static display data: nothing is loaded at runtime

/// Position of a track inside the catalog (0..N).
///
/// Indices, not ids, are what the controller tracks. The `id` field on
/// `Track` is display identity only.
pub type TrackIndex = usize;

/// One entry in the static track catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub id: u32,
    pub title: &'static str,
    pub artist: &'static str,
    pub album: &'static str,

    /// Display string like "3:42". Not used for timing.
    pub duration: &'static str,

    /// Single glyph shown in place of cover art.
    pub cover: &'static str,
}

/// Sidebar playlist entry.
///
/// `count` is a label, it is not checked against any real track list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaylistSummary {
    pub name: &'static str,
    pub count: u32,
    pub glyph: &'static str,
}
