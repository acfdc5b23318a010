// SPDX-License-Identifier: MPL-2.0
//! Full-size gallery screen opened from a listing photo.
//!
//! The listing forwards the tapped index as-is; this screen clamps it to
//! the gallery and then navigates with wrap-around in both directions.

use crate::app::i18n::fluent::I18n;
use crate::domain::listing::ImageSource;
use crate::media::{PhotoCache, PhotoStatus};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::theming::ColorScheme;
use fluent_bundle::FluentValue;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Image;
use iced::widget::{button, text, Column, Container, Row, Space};
use iced::{ContentFit, Element, Length};

/// Position in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct State {
    index: usize,
}

impl State {
    /// Opens the gallery at `requested`, clamped to the last photo.
    #[must_use]
    pub fn new(requested: usize, total: usize) -> Self {
        Self {
            index: requested.min(total.saturating_sub(1)),
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves to the next photo, wrapping to the first after the last.
    pub fn next(&mut self, total: usize) {
        if total > 0 {
            self.index = (self.index + 1) % total;
        }
    }

    /// Moves to the previous photo, wrapping to the last before the first.
    pub fn previous(&mut self, total: usize) {
        if total > 0 {
            self.index = (self.index + total - 1) % total;
        }
    }
}

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub gallery: &'a [ImageSource],
    pub photos: &'a PhotoCache,
    pub colors: &'a ColorScheme,
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    Back,
    Next,
    Previous,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Back,
    /// The visible photo changed to this index.
    Shown(usize),
}

/// Process a gallery message against a gallery of `total` photos.
pub fn update(state: &mut State, message: &Message, total: usize) -> Event {
    match message {
        Message::Back => Event::Back,
        Message::Next => {
            state.next(total);
            Event::Shown(state.index)
        }
        Message::Previous => {
            state.previous(total);
            Event::Shown(state.index)
        }
    }
}

/// Render the gallery screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let total = ctx.gallery.len();

    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("photo-viewer-back-button"))).size(typography::BUTTON),
    )
    .style(button_styles::secondary(ctx.colors))
    .on_press(Message::Back);

    let body: Element<'_, Message> = match ctx.gallery.get(ctx.state.index) {
        Some(source) => build_photo(&ctx, source),
        None => centered_caption(ctx.i18n.tr("photo-viewer-empty"), ctx.colors),
    };

    let counter = ctx.i18n.tr_with_args(
        "photo-viewer-counter",
        &[
            ("current", FluentValue::from(ctx.state.index + 1)),
            ("total", FluentValue::from(total)),
        ],
    );

    let navigation_button = |label: String, message: Message| {
        button(text(label).size(typography::BUTTON))
            .style(button_styles::secondary(ctx.colors))
            .on_press_maybe((total > 1).then_some(message))
    };

    let navigation = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(navigation_button(
            ctx.i18n.tr("photo-viewer-previous"),
            Message::Previous,
        ))
        .push(
            text(if total > 0 { counter } else { String::new() })
                .size(typography::CAPTION)
                .color(ctx.colors.text_hint),
        )
        .push(navigation_button(
            ctx.i18n.tr("photo-viewer-next"),
            Message::Next,
        ));

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .push(Container::new(back_button).width(Length::Fill))
        .push(body)
        .push(navigation);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container_styles::surface(ctx.colors))
        .into()
}

fn build_photo<'a>(ctx: &ViewContext<'a>, source: &ImageSource) -> Element<'a, Message> {
    match ctx.photos.status(source) {
        PhotoStatus::Ready(handle) => Image::new(handle)
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        PhotoStatus::Failed(err) => centered_caption(ctx.i18n.tr(err.i18n_key()), ctx.colors),
        PhotoStatus::Loading | PhotoStatus::Unknown => {
            centered_caption(ctx.i18n.tr("photo-viewer-loading"), ctx.colors)
        }
    }
}

fn centered_caption<'a>(caption: String, colors: &ColorScheme) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .align_x(Horizontal::Center)
            .push(Space::new().height(Length::Fixed(spacing::XL)))
            .push(text(caption).size(typography::PARAGRAPH).color(colors.text_hint)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}
