//! Small pure helper functions used by the GUI.
//! - no UI widgets or state mutation

use crate::core::catalog;
use crate::core::time::format_clock;

/// Slider value (0.0..=100.0) -> whole volume percent.
pub(crate) fn volume_percent(value: f32) -> u8 {
    value.clamp(0.0, 100.0).round() as u8
}

/// "6 songs · 28:02" for the track list header.
/// Falls back to the song count alone if a duration label is malformed.
pub(crate) fn catalog_summary() -> String {
    let songs = catalog::TRACK_COUNT;
    match catalog::total_runtime_secs() {
        Ok(secs) => format!("{songs} songs · {}", format_clock(secs as f32)),
        Err(e) => {
            tracing::warn!(error = %e, "could not total catalog runtime");
            format!("{songs} songs")
        }
    }
}

/// Heart glyph for a like toggle.
pub(crate) fn heart(liked: bool) -> &'static str {
    if liked { "♥" } else { "♡" }
}
