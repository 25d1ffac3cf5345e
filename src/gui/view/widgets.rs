//! Reusable small widgets used across view modules.

use iced::Length;
use iced::widget::{Button, button, container, text};

use super::super::state::Message;
use super::super::util::heart;
use super::constants::{LIKED, MUTED};

/// Cover art stand-in: the track's glyph centered in a box.
pub(crate) fn cover(
    glyph: &'static str,
    size: f32,
    glyph_size: f32,
) -> container::Container<'static, Message> {
    container(text(glyph).size(glyph_size))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .center_x(Length::Fixed(size))
        .center_y(Length::Fixed(size))
        .style(container::rounded_box)
}

/// Heart toggle. Red when liked.
pub(crate) fn heart_button(liked: bool, size: f32, on_press: Message) -> Button<'static, Message> {
    let color = if liked { LIKED } else { MUTED };

    button(text(heart(liked)).size(size).color(color))
        .style(button::text)
        .on_press(on_press)
}

/// Flag button (shuffle/repeat): highlighted while `active`.
pub(crate) fn flag_button(
    label: String,
    active: bool,
    on_press: Message,
) -> Button<'static, Message> {
    let style = if active {
        button::primary
    } else {
        button::secondary
    };

    button(text(label)).style(style).on_press(on_press)
}
