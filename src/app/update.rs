// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each screen reports an event; the handlers here turn it into navigation,
//! photo fetches or config persistence.

use super::{config, listing_photo_sources, App, Message, Screen};
use crate::ui::booking::{self, Event as BookingEvent};
use crate::ui::photo_viewer::{self, Event as PhotoViewerEvent};
use crate::ui::rent_apartment::{self, style::StyleSheet, Event as ListingEvent};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::Task;

impl App {
    pub(super) fn handle_listing_message(
        &mut self,
        message: &rent_apartment::Message,
    ) -> Task<Message> {
        match rent_apartment::update(message) {
            ListingEvent::None => Task::none(),
            ListingEvent::BookRequested => {
                self.booking = booking::State::default();
                self.screen = Screen::Booking;
                Task::none()
            }
            ListingEvent::PhotoRequested(index) => {
                self.photo_viewer = photo_viewer::State::new(index, self.gallery.len());
                if index >= self.gallery.len() {
                    log::debug!(
                        "Photo {index} requested from a gallery of {}",
                        self.gallery.len()
                    );
                }
                self.screen = Screen::PhotoViewer;
                self.show_photo(self.photo_viewer.index())
            }
        }
    }

    pub(super) fn handle_photo_viewer_message(
        &mut self,
        message: &photo_viewer::Message,
    ) -> Task<Message> {
        match photo_viewer::update(&mut self.photo_viewer, message, self.gallery.len()) {
            PhotoViewerEvent::None => Task::none(),
            PhotoViewerEvent::Back => self.return_to_listing(),
            PhotoViewerEvent::Shown(index) => self.show_photo(index),
        }
    }

    pub(super) fn handle_booking_message(&mut self, message: &booking::Message) -> Task<Message> {
        match booking::update(&mut self.booking, message) {
            BookingEvent::None => Task::none(),
            BookingEvent::Back => self.return_to_listing(),
            BookingEvent::Confirmed { stay } => {
                let price = &self.apartment.price;
                log::info!(
                    "Booking requested: \"{}\" for {} x {:?}, total {}",
                    self.apartment.title,
                    stay.value(),
                    price.scale,
                    self.booking.total(price)
                );
                Task::none()
            }
        }
    }

    /// Shows the listing again, refetching any of its photos the cache lost.
    fn return_to_listing(&mut self) -> Task<Message> {
        self.screen = Screen::Listing;
        self.request_photos(listing_photo_sources(&self.apartment))
    }

    /// Marks the gallery photo as recently used, fetching it again if it failed.
    fn show_photo(&mut self, index: usize) -> Task<Message> {
        let Some(source) = self.gallery.get(index).cloned() else {
            return Task::none();
        };
        self.photos.touch(&source);
        self.photos.clear_failure(&source);
        self.request_photos(std::iter::once(source))
    }

    /// Switches between light and dark, restyles, and saves the choice.
    pub(super) fn toggle_theme(&mut self) {
        self.theme_mode = ThemeMode::toggled_from(self.dark_theme);
        self.dark_theme = !self.dark_theme;
        self.colors = ColorScheme::for_dark(self.dark_theme);
        self.styles = StyleSheet::resolve(&self.colors);

        self.config.general.theme_mode = self.theme_mode;
        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            log::warn!("Failed to save theme preference: {err}");
        }
    }
}
