//! Left sidebar: static playlist summaries.

use iced::widget::{column, container, row, text};
use iced::{Alignment, Length};

use super::super::state::Message;
use super::constants::{COVER_GLYPH_ROW, MUTED, ROW_TEXT, SECTION_TEXT, SMALL_TEXT};
use crate::core::catalog::PLAYLISTS;

pub(crate) fn build_sidebar() -> iced::widget::Container<'static, Message> {
    let mut list = column![].spacing(10);

    for p in &PLAYLISTS {
        let entry = row![
            text(p.glyph).size(COVER_GLYPH_ROW),
            column![
                text(p.name).size(ROW_TEXT),
                text(format!("{} songs", p.count)).size(SMALL_TEXT).color(MUTED),
            ]
            .spacing(2),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        list = list.push(entry);
    }

    let col = column![text("Playlists").size(SECTION_TEXT), list].spacing(16);

    container(col)
        .padding(16)
        .height(Length::Fill)
        .style(container::rounded_box)
}
