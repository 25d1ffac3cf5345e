//! "Up Next": every catalog track as a clickable row.

use iced::widget::{column, container, mouse_area, row, scrollable, text};
use iced::{Alignment, Length};

use super::super::state::{Message, SoundWave};
use super::super::util::catalog_summary;
use super::constants::{
    ACCENT, COVER_GLYPH_ROW, DURATION_W, INDEX_W, MUTED, ROW_TEXT, SECTION_TEXT, SMALL_TEXT,
    TRACK_LIST_SPACING, TRACK_ROW_HPAD, TRACK_ROW_VPAD,
};
use super::widgets::heart_button;
use crate::core::catalog::TRACKS;

pub(crate) fn build_up_next(state: &SoundWave) -> iced::widget::Container<'_, Message> {
    let current = state.player.state().current_track_index;

    let header = row![
        text("Up Next").size(SECTION_TEXT),
        container(text(catalog_summary()).size(SMALL_TEXT).color(MUTED))
            .align_right(Length::Fill),
    ]
    .align_y(Alignment::Center);

    let mut list = column![].spacing(TRACK_LIST_SPACING);

    for (i, t) in TRACKS.iter().enumerate() {
        let is_current = i == current;

        let title = if is_current {
            text(t.title).size(ROW_TEXT).color(ACCENT)
        } else {
            text(t.title).size(ROW_TEXT)
        };

        // The heart is a button inside the mouse_area: iced lets the button
        // capture its press, so the row's SelectTrack is not emitted too.
        let cells = row![
            text(t.id.to_string())
                .size(SMALL_TEXT)
                .color(MUTED)
                .width(Length::Fixed(INDEX_W)),
            text(t.cover).size(COVER_GLYPH_ROW),
            column![title, text(t.artist).size(SMALL_TEXT).color(MUTED)]
                .spacing(2)
                .width(Length::Fill),
            text(t.duration)
                .size(SMALL_TEXT)
                .color(MUTED)
                .width(Length::Fixed(DURATION_W)),
            heart_button(state.player.is_liked(i), ROW_TEXT, Message::ToggleLike(i)),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let mut cell = container(cells)
            .padding([TRACK_ROW_VPAD, TRACK_ROW_HPAD])
            .width(Length::Fill);
        if is_current {
            cell = cell.style(container::rounded_box);
        }

        list = list.push(mouse_area(cell).on_press(Message::SelectTrack(i)));
    }

    let col = column![header, scrollable(list).height(Length::Fill)].spacing(16);

    container(col).padding(16).style(container::rounded_box)
}
