// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! A slim top bar (notice banner and theme toggle) sits above the active
//! screen.

use super::{Message, Screen};
use crate::app::i18n::fluent::I18n;
use crate::domain::listing::{Apartment, ImageSource};
use crate::media::PhotoCache;
use crate::ui::booking;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::photo_viewer;
use crate::ui::rent_apartment::{self, style::StyleSheet};
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::{button, text, Column, Container, Row, Space};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub apartment: &'a Apartment,
    pub gallery: &'a [ImageSource],
    pub styles: &'a StyleSheet,
    pub colors: &'a ColorScheme,
    pub photos: &'a PhotoCache,
    pub photo_viewer: &'a photo_viewer::State,
    pub booking: &'a booking::State,
    pub is_dark_theme: bool,
    pub notice: Option<&'a str>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Listing => rent_apartment::view(rent_apartment::ViewContext {
            apartment: ctx.apartment,
            styles: ctx.styles,
            colors: ctx.colors,
            photos: ctx.photos,
            i18n: ctx.i18n,
        })
        .map(Message::Listing),
        Screen::PhotoViewer => photo_viewer::view(photo_viewer::ViewContext {
            state: ctx.photo_viewer,
            gallery: ctx.gallery,
            photos: ctx.photos,
            colors: ctx.colors,
            i18n: ctx.i18n,
        })
        .map(Message::PhotoViewer),
        Screen::Booking => booking::view(booking::ViewContext {
            state: ctx.booking,
            apartment: ctx.apartment,
            colors: ctx.colors,
            i18n: ctx.i18n,
        })
        .map(Message::Booking),
    };

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(top_bar(&ctx))
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}

fn top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let toggle_label = if ctx.is_dark_theme {
        ctx.i18n.tr("theme-toggle-light")
    } else {
        ctx.i18n.tr("theme-toggle-dark")
    };

    let mut bar = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XXS, spacing::XS])
        .align_y(Vertical::Center);

    match ctx.notice {
        Some(key) => {
            bar = bar
                .push(
                    text(ctx.i18n.tr(key))
                        .size(typography::CAPTION)
                        .color(ctx.colors.text_hint)
                        .width(Length::Fill),
                )
                .push(
                    button(text(ctx.i18n.tr("notice-dismiss")).size(typography::CAPTION))
                        .style(button_styles::secondary(ctx.colors))
                        .on_press(Message::DismissNotice),
                );
        }
        None => bar = bar.push(Space::new().width(Length::Fill)),
    }

    bar = bar.push(
        button(text(toggle_label).size(typography::CAPTION))
            .style(button_styles::secondary(ctx.colors))
            .on_press(Message::ToggleTheme),
    );

    Container::new(bar)
        .width(Length::Fill)
        .style(container_styles::surface(ctx.colors))
        .into()
}
