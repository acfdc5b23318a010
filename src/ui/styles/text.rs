// SPDX-License-Identifier: MPL-2.0
//! Typography applied to text widgets.

use crate::ui::rent_apartment::style::TextStyle;
use iced::widget::text::LineHeight;
use iced::widget::Text;
use iced::{font, Font, Pixels};

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Applies a region's typography to a text widget, if it has one.
pub fn apply<'a>(text: Text<'a>, style: Option<&TextStyle>) -> Text<'a> {
    match style {
        Some(style) => text
            .size(style.size)
            .line_height(LineHeight::Absolute(Pixels(style.line_height)))
            .color(style.color)
            .font(if style.bold { BOLD } else { Font::DEFAULT }),
        None => text,
    }
}
