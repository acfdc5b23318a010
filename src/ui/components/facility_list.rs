// SPDX-License-Identifier: MPL-2.0
//! Facility lists of a listing.
//!
//! The primary tier is a row of tappable tiles with an optional icon; the
//! secondary tier is a wrapped row of plain chips.

use crate::domain::listing::{Facility, ImageSource};
use crate::media::PhotoCache;
use crate::ui::components::photo_list;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::theming::ColorScheme;
use iced::alignment::Horizontal;
use iced::widget::{button, text, Column, Container, Row};
use iced::{Element, Length};

/// Tappable tiles, one per primary facility. `on_press` receives the tile index.
pub fn primary<'a, M: Clone + 'a>(
    facilities: &[Facility],
    photos: &PhotoCache,
    colors: &ColorScheme,
    on_press: impl Fn(usize) -> M,
) -> Element<'a, M> {
    let tiles = facilities.iter().enumerate().map(|(index, facility)| -> Element<'a, M> {
        let mut tile: Column<'a, M> = Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .width(Length::Fill);

        if let Some(icon) = &facility.icon {
            tile = tile.push(photo_list::photo(
                photos.get(&ImageSource::new(icon.as_str())),
                Length::Fixed(sizing::FACILITY_ICON),
                Length::Fixed(sizing::FACILITY_ICON),
                colors.basic_200,
                radius::SM,
            ));
        }

        tile = tile.push(
            text(facility.title.clone())
                .size(typography::CAPTION)
                .color(colors.text_primary)
                .center(),
        );

        button(tile)
            .width(Length::Fixed(sizing::FACILITY_TILE_WIDTH))
            .padding(spacing::XS)
            .style(button_styles::tile(colors))
            .on_press(on_press(index))
            .into()
    });

    let row: Row<'a, M> = Row::with_children(tiles).spacing(spacing::XS);
    row.into()
}

/// Non-interactive chips for the secondary facilities, wrapping onto new lines.
pub fn secondary<'a, M: 'a>(facilities: &[Facility], colors: &ColorScheme) -> Element<'a, M> {
    let chips = facilities.iter().map(|facility| -> Element<'a, M> {
        Container::new(
            text(facility.title.clone())
                .size(typography::CAPTION)
                .color(colors.text_hint),
        )
        .padding([spacing::XXS, spacing::XS])
        .style(container_styles::fill(colors.basic_200, radius::SM))
        .into()
    });

    let row: Row<'a, M> = Row::with_children(chips)
        .spacing(spacing::XS)
        .align_y(iced::alignment::Vertical::Center);
    row.wrap().vertical_spacing(spacing::XS).into()
}
