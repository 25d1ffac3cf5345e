//! View constants (layout/sizing/colors).

use iced::Color;

pub(crate) const SIDEBAR_W: f32 = 240.0;

// text sizing
pub(crate) const TITLE_TEXT: f32 = 32.0;
pub(crate) const NOW_PLAYING_TITLE_TEXT: f32 = 28.0;
pub(crate) const SECTION_TEXT: f32 = 18.0;
pub(crate) const ROW_TEXT: f32 = 14.0;
pub(crate) const SMALL_TEXT: f32 = 12.0;

pub(crate) const COVER_BIG: f32 = 180.0;
pub(crate) const COVER_GLYPH_BIG: f32 = 64.0;
pub(crate) const COVER_GLYPH_ROW: f32 = 22.0;

pub(crate) const TRACK_ROW_VPAD: f32 = 6.0;
pub(crate) const TRACK_ROW_HPAD: f32 = 10.0;
pub(crate) const TRACK_LIST_SPACING: f32 = 4.0;
pub(crate) const DURATION_W: f32 = 56.0;
pub(crate) const INDEX_W: f32 = 20.0;

pub(crate) const VOLUME_W: f32 = 120.0;

pub(crate) const ACCENT: Color = Color {
    r: 0.753,
    g: 0.518,
    b: 0.988,
    a: 1.0,
};
pub(crate) const LIKED: Color = Color {
    r: 0.937,
    g: 0.267,
    b: 0.267,
    a: 1.0,
};
pub(crate) const MUTED: Color = Color {
    r: 0.612,
    g: 0.639,
    b: 0.686,
    a: 1.0,
};
