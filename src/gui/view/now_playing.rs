//! Now-playing panel: cover, track info, fake progress, transport, volume.
//!
//! The progress bar is display only; there is no seeking.

use iced::widget::{button, column, container, progress_bar, row, slider, text};
use iced::{Alignment, Length};

use super::super::state::{Message, SoundWave};
use super::constants::{
    ACCENT, COVER_BIG, COVER_GLYPH_BIG, MUTED, NOW_PLAYING_TITLE_TEXT, SECTION_TEXT, SMALL_TEXT,
    VOLUME_W,
};
use super::widgets::{cover, flag_button, heart_button};
use crate::core::playback::RepeatMode;

pub(crate) fn build_now_playing(state: &SoundWave) -> iced::widget::Container<'_, Message> {
    let player = &state.player;
    let s = player.state();
    let track = player.current_track();

    let info = column![
        text(track.title).size(NOW_PLAYING_TITLE_TEXT),
        text(track.artist).size(SECTION_TEXT).color(ACCENT),
        text(track.album).color(MUTED),
    ]
    .spacing(4);

    let progress = column![
        row![
            text(player.displayed_elapsed_time()).size(SMALL_TEXT).color(MUTED),
            container(text(track.duration).size(SMALL_TEXT).color(MUTED))
                .align_right(Length::Fill),
        ],
        progress_bar(0.0..=100.0, s.progress_percent),
    ]
    .spacing(6);

    let play_label = if s.is_playing() { "⏸ Pause" } else { "▶ Play" };

    let repeat_label = match s.repeat_mode {
        RepeatMode::Off => "Repeat".to_string(),
        mode => format!("Repeat {mode}"),
    };

    let transport = row![
        flag_button("Shuffle".into(), s.shuffle_enabled, Message::ToggleShuffle),
        button("⏮").style(button::text).on_press(Message::Previous),
        button(text(play_label).size(SECTION_TEXT))
            .padding([10.0, 20.0])
            .style(button::primary)
            .on_press(Message::TogglePlay),
        button("⏭").style(button::text).on_press(Message::Next),
        flag_button(
            repeat_label,
            s.repeat_mode != RepeatMode::Off,
            Message::CycleRepeat
        ),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let secondary = row![
        heart_button(
            player.is_liked(s.current_track_index),
            SECTION_TEXT,
            Message::ToggleLike(s.current_track_index),
        ),
        text("Vol").size(SMALL_TEXT).color(MUTED),
        slider(0.0..=100.0, f32::from(s.volume_percent), Message::SetVolume)
            .width(Length::Fixed(VOLUME_W)),
        text(format!("{}%", s.volume_percent)).size(SMALL_TEXT).color(MUTED),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let details = column![info, progress, transport, secondary]
        .spacing(18)
        .width(Length::Fill);

    let body = row![cover(track.cover, COVER_BIG, COVER_GLYPH_BIG), details]
        .spacing(24)
        .align_y(Alignment::Center);

    container(body).padding(24).style(container::rounded_box)
}
