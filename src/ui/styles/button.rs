// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::radius;
use crate::ui::rent_apartment::style::RegionStyle;
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled button painted from a region style (the "BOOK NOW" button).
pub fn region(style: &RegionStyle, hover: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    let background = style.background;
    let text_color = style.text.map(|text| text.color).unwrap_or(Color::WHITE);
    let radius = style.radius;

    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => Some(hover),
            button::Status::Disabled => background.map(|color| Color { a: 0.5, ..color }),
            button::Status::Active | button::Status::Pressed => background,
        };
        button::Style {
            background: background.map(Background::Color),
            text_color,
            border: Border {
                radius: radius.into(),
                ..Default::default()
            },
            ..button::Style::default()
        }
    }
}

/// Filled brand-colored action outside the listing sheet (booking confirmation).
pub fn primary(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let background = colors.brand_primary;
    let hover = colors.brand_hover;
    let text_color = colors.text_on_brand;

    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => hover,
            button::Status::Disabled => Color {
                a: 0.5,
                ..background
            },
            button::Status::Active => background,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..button::Style::default()
        }
    }
}

/// Borderless tappable area, highlighted on hover (facility tiles, thumbnails).
pub fn tile(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let hover = colors.basic_200;
    let text_color = colors.text_primary;

    move |_theme: &Theme, status: button::Status| button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(hover)),
            button::Status::Active | button::Status::Disabled => None,
        },
        text_color,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..button::Style::default()
    }
}

/// Outlined secondary action (back, stepper buttons).
pub fn secondary(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let border_color = colors.basic_200;
    let hover = colors.basic_200;
    let text_color = colors.text_primary;
    let disabled_text = colors.text_hint;

    move |_theme: &Theme, status: button::Status| button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(hover)),
            button::Status::Active | button::Status::Disabled => None,
        },
        text_color: match status {
            button::Status::Disabled => disabled_text,
            _ => text_color,
        },
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}
