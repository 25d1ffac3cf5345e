//! GUI renderer (reads state, produces widgets; no mutation).

mod constants;
mod now_playing;
mod sidebar;
mod tracks;
mod widgets;

use iced::widget::{Column, column, row, text};
use iced::{Alignment, Length};

use super::state::{Message, SoundWave};
use constants::{ACCENT, MUTED, SIDEBAR_W, TITLE_TEXT};

pub(crate) fn view(state: &SoundWave) -> Column<'_, Message> {
    let header = column![
        row![
            text("Sound").size(TITLE_TEXT),
            text("Wave").size(TITLE_TEXT).color(ACCENT),
        ]
        .align_y(Alignment::Center),
        text("Your personal music universe").color(MUTED),
    ]
    .spacing(4);

    let sidebar = sidebar::build_sidebar().width(Length::Fixed(SIDEBAR_W));
    let main = column![
        now_playing::build_now_playing(state),
        tracks::build_up_next(state).height(Length::Fill),
    ]
    .spacing(16)
    .width(Length::Fill);

    let body = row![sidebar, main].spacing(16).height(Length::Fill);
    column![header, body].spacing(16).padding(16)
}
