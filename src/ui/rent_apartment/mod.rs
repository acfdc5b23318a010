// SPDX-License-Identifier: MPL-2.0
//! Apartment listing screen.
//!
//! Presents one apartment (header photo, price and booking action,
//! facilities, description, photo gallery) and reports what the user asked
//! for through [`Event`]. The screen has no state of its own: rendering is a
//! function of the record, the resolved [`StyleSheet`], the labels and the
//! photo cache snapshot.

pub mod style;

use crate::app::i18n::fluent::I18n;
use crate::domain::listing::{image_sources, Apartment, ImageSource};
use crate::media::PhotoCache;
use crate::ui::components::{facility_list, photo_list, price_text};
use crate::ui::design_tokens::{radius, sizing};
use crate::ui::styles::{button as button_styles, container as container_styles, text as text_styles};
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, scrollable, text, Column, Container, Row, Space};
use iced::{Element, Length, Padding};
use style::{Region, RegionStyle, StyleSheet};

/// Contextual data needed to render the listing screen.
pub struct ViewContext<'a> {
    pub apartment: &'a Apartment,
    pub styles: &'a StyleSheet,
    pub colors: &'a ColorScheme,
    pub photos: &'a PhotoCache,
    pub i18n: &'a I18n,
}

/// Messages emitted by the listing screen.
#[derive(Debug, Clone)]
pub enum Message {
    BookPressed,
    PrimaryFacilityPressed(usize),
    PhotoPressed(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    BookRequested,
    /// Index into the listing's photo list, as tapped. Not bounds-checked.
    PhotoRequested(usize),
}

/// Process a listing screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BookPressed => Event::BookRequested,
        // Tiles react to taps but facilities have no detail view.
        Message::PrimaryFacilityPressed(_) => Event::None,
        Message::PhotoPressed(index) => Event::PhotoRequested(*index),
    }
}

/// Everything the screen displays, before layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingModel {
    pub header: ImageSource,
    pub title: String,
    pub rent_label: String,
    pub price_value: String,
    pub price_scale: String,
    pub book_label: String,
    pub facilities_label: String,
    pub about_label: String,
    pub description: String,
    pub photos_label: String,
    pub gallery: Vec<ImageSource>,
}

impl ListingModel {
    #[must_use]
    pub fn build(apartment: &Apartment, i18n: &I18n) -> Self {
        let (price_value, price_scale) = price_text::labels(&apartment.price, i18n);
        Self {
            header: ImageSource::new(apartment.primary_photo.as_str()),
            title: apartment.title.clone(),
            rent_label: i18n.tr("listing-rent-label"),
            price_value,
            price_scale,
            book_label: i18n.tr("listing-book-button"),
            facilities_label: i18n.tr("listing-facilities-section"),
            about_label: i18n.tr("listing-about-section"),
            description: apartment.description.clone(),
            photos_label: i18n.tr("listing-photos-section"),
            gallery: image_sources(apartment),
        }
    }
}

/// Render the listing screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let model = ListingModel::build(ctx.apartment, ctx.i18n);

    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(build_header(&ctx, &model.header))
        .push(build_info_card(&ctx, &model))
        .push(build_about_section(&ctx, &model))
        .push(build_photo_section(&ctx, &model));

    let page = Container::new(content)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .style(container_styles::region(ctx.styles.get(Region::Container)));

    scrollable(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Wraps content in a region: padding and background inside, margin outside.
fn region<'a>(content: impl Into<Element<'a, Message>>, style: &RegionStyle) -> Element<'a, Message> {
    let inner = Container::new(content)
        .width(Length::Fill)
        .padding(style.padding)
        .style(container_styles::region(style));

    let inner: Element<'a, Message> = match style.bottom_border {
        Some(border) => Column::new()
            .push(inner)
            .push(
                Container::new(Space::new())
                    .width(Length::Fill)
                    .height(Length::Fixed(border.width))
                    .style(container_styles::fill(border.color, radius::NONE)),
            )
            .into(),
        None => inner.into(),
    };

    with_margin(inner, style.margin)
}

fn with_margin<'a>(content: Element<'a, Message>, margin: Padding) -> Element<'a, Message> {
    if margin == Padding::ZERO {
        content
    } else {
        Container::new(content).padding(margin).into()
    }
}

fn label<'a>(content: &str, style: &RegionStyle) -> Element<'a, Message> {
    let styled = text_styles::apply(text(content.to_string()), style.text.as_ref());
    with_margin(styled.into(), style.margin)
}

fn build_header<'a>(ctx: &ViewContext<'a>, source: &ImageSource) -> Element<'a, Message> {
    let style = ctx.styles.get(Region::BackgroundImage);
    photo_list::photo(
        ctx.photos.get(source),
        Length::Fill,
        Length::Fixed(style.min_height.unwrap_or(sizing::HEADER_MIN_HEIGHT)),
        style.background.unwrap_or(ctx.colors.basic_200),
        style.radius,
    )
}

fn build_info_card<'a>(ctx: &ViewContext<'a>, model: &ListingModel) -> Element<'a, Message> {
    let styles = ctx.styles;

    let book_button_style = styles.get(Region::BookButton);
    let book_button = button(text_styles::apply(
        text(model.book_label.clone()),
        book_button_style.text.as_ref(),
    ))
    .padding(book_button_style.padding)
    .style(button_styles::region(book_button_style, ctx.colors.brand_hover))
    .on_press(Message::BookPressed);

    let price: Element<'a, Message> = price_text::view(
        &ctx.apartment.price,
        price_text::PriceStyles {
            value: styles.get(Region::PriceValueLabel),
            scale: styles.get(Region::PriceScaleLabel),
        },
        ctx.i18n,
    );

    let book_row = Row::new()
        .width(Length::Fill)
        .align_y(Vertical::Center)
        .push(
            Container::new(with_margin(price, styles.get(Region::PriceLabel).margin))
                .width(Length::Fill),
        )
        .push(book_button);

    let details = Column::new()
        .push(label(&model.title, styles.get(Region::TitleLabel)))
        .push(label(&model.rent_label, styles.get(Region::RentLabel)))
        .push(region(book_row, styles.get(Region::BookContainer)));

    let facilities = Column::new()
        .push(label(&model.facilities_label, styles.get(Region::SectionLabel)))
        .push(region(
            facility_list::primary(
                &ctx.apartment.primary_facilities,
                ctx.photos,
                ctx.colors,
                Message::PrimaryFacilityPressed,
            ),
            styles.get(Region::PrimaryFacilityList),
        ))
        .push(region(
            facility_list::secondary(&ctx.apartment.facilities, ctx.colors),
            styles.get(Region::FacilityList),
        ));

    let card = Column::new()
        .push(region(details, styles.get(Region::DetailsContainer)))
        .push(region(facilities, styles.get(Region::FacilitiesContainer)));

    region(card, styles.get(Region::InfoContainer))
}

fn build_about_section<'a>(ctx: &ViewContext<'a>, model: &ListingModel) -> Element<'a, Message> {
    let styles = ctx.styles;
    let about = Column::new()
        .push(label(&model.about_label, styles.get(Region::SectionLabel)))
        .push(label(&model.description, styles.get(Region::AboutLabel)));

    region(about, styles.get(Region::AboutSection))
}

fn build_photo_section<'a>(ctx: &ViewContext<'a>, model: &ListingModel) -> Element<'a, Message> {
    let styles = ctx.styles;
    let photos_label = styles.merged(Region::SectionLabel, Region::PhotoLabel);

    let section = Column::new()
        .push(label(&model.photos_label, &photos_label))
        .push(region(
            photo_list::view(
                &model.gallery,
                ctx.photos,
                ctx.colors,
                Message::PhotoPressed,
            ),
            styles.get(Region::PhotoList),
        ));

    region(section, styles.get(Region::PhotoSection))
}
