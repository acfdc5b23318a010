// SPDX-License-Identifier: MPL-2.0
//! Horizontal strip of photo thumbnails.
//!
//! Each thumbnail is a tap target reporting its index in the gallery.
//! Photos that are not in the cache yet render as a flat placeholder of the
//! same size, so the strip never changes layout while photos arrive.

use crate::domain::listing::ImageSource;
use crate::media::PhotoCache;
use crate::ui::design_tokens::{radius, sizing, spacing};
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::theming::ColorScheme;
use iced::widget::image::{Handle, Image};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, container, Container, Row, Scrollable};
use iced::{Color, ContentFit, Element, Length};

/// A cached photo, or a placeholder fill while it is unresolved.
pub fn photo<'a, M: 'a>(
    handle: Option<Handle>,
    width: Length,
    height: Length,
    placeholder: Color,
    corner_radius: f32,
) -> Element<'a, M> {
    match handle {
        Some(handle) => Image::new(handle)
            .width(width)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(iced::widget::Space::new())
            .width(width)
            .height(height)
            .style(container_styles::fill(placeholder, corner_radius))
            .into(),
    }
}

/// Renders the gallery as a horizontally scrolling row of thumbnails.
pub fn view<'a, M: Clone + 'a>(
    sources: &[ImageSource],
    photos: &PhotoCache,
    colors: &ColorScheme,
    on_press: impl Fn(usize) -> M,
) -> Element<'a, M> {
    let thumbnails = sources.iter().enumerate().map(|(index, source)| -> Element<'a, M> {
        let thumbnail = photo(
            photos.get(source),
            Length::Fixed(sizing::PHOTO_THUMBNAIL),
            Length::Fixed(sizing::PHOTO_THUMBNAIL),
            colors.basic_200,
            radius::MD,
        );

        button(thumbnail)
            .padding(0)
            .style(button_styles::tile(colors))
            .on_press(on_press(index))
            .into()
    });

    let row: Row<'a, M> = Row::with_children(thumbnails).spacing(spacing::XS);

    Scrollable::new(container(row).padding(iced::Padding {
        bottom: spacing::XS,
        ..iced::Padding::ZERO
    }))
    .direction(Direction::Horizontal(Scrollbar::new()))
    .width(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Tap {
        Photo(usize),
    }

    #[test]
    fn view_renders_unresolved_gallery() {
        let sources = vec![ImageSource::new("a.jpg"), ImageSource::new("b.jpg")];
        let cache = PhotoCache::new(4);
        let _element = view(&sources, &cache, &ColorScheme::light(), Tap::Photo);
    }

    #[test]
    fn view_renders_cached_photo() {
        let source = ImageSource::new("a.jpg");
        let mut cache = PhotoCache::new(4);
        cache.finish_load(
            source.uri.clone(),
            Ok(Handle::from_rgba(1, 1, vec![255, 255, 255, 255])),
        );
        let _element = view(&[source], &cache, &ColorScheme::dark(), Tap::Photo);
    }

    #[test]
    fn empty_gallery_still_renders() {
        let _element = view(&[], &PhotoCache::default(), &ColorScheme::light(), Tap::Photo);
    }
}
