// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::rent_apartment::style::RegionStyle;
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Background and corner radius of a region.
pub fn region(style: &RegionStyle) -> impl Fn(&Theme) -> container::Style {
    let background = style.background;
    let radius = style.radius;
    move |_theme: &Theme| container::Style {
        background: background.map(Background::Color),
        border: Border {
            radius: radius.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Flat fill, used for separators and image placeholders.
pub fn fill(color: Color, radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Full-window surface of secondary screens.
pub fn surface(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.basic_100;
    let text_color = colors.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_without_background_is_transparent() {
        let style = region(&RegionStyle::default())(&Theme::Light);
        assert!(style.background.is_none());
    }

    #[test]
    fn fill_paints_color() {
        let style = fill(Color::BLACK, 0.0)(&Theme::Dark);
        assert_eq!(style.background, Some(Background::Color(Color::BLACK)));
    }
}
