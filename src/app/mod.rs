// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the listing and the
//! screens it opens.
//!
//! The `App` struct wires together the domains (listing record, photo cache,
//! localization, theme) and translates screen events into navigation and side
//! effects like photo fetches or config persistence.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog;
use crate::domain::listing::{image_sources, Apartment, ImageSource};
use crate::media::{self, FetchLimits, PhotoCache};
use crate::ui::booking;
use crate::ui::photo_viewer;
use crate::ui::rent_apartment::style::StyleSheet;
use crate::ui::theming::{self, ColorScheme, ThemeMode};
use i18n::fluent::I18n;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    /// `theme_mode` resolved once; `System` is not re-detected per frame.
    dark_theme: bool,
    colors: ColorScheme,
    /// Listing styles, resolved from `colors` whenever the theme changes.
    styles: StyleSheet,
    apartment: Apartment,
    /// Gallery of `apartment`, kept for the photo viewer.
    gallery: Vec<ImageSource>,
    photos: PhotoCache,
    fetch_limits: FetchLimits,
    photo_viewer: photo_viewer::State,
    booking: booking::State,
    /// Loaded settings, written back when a preference changes.
    config: config::Config,
    config_dir: Option<PathBuf>,
    /// i18n key of a startup problem shown in the top bar.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("listing", &self.apartment.title)
            .field("photos", &self.photos)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and the listing, then starts fetching its photos.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.as_ref().map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);

        let catalog_path = flags
            .catalog_path
            .clone()
            .or_else(|| config::resolve_catalog_path(&config, config_dir.clone()));
        let (apartment, catalog_warning) = catalog::load_or_sample(catalog_path.as_ref());

        let theme_mode = flags.theme.unwrap_or(config.general.theme_mode);
        let dark_theme = theme_mode.is_dark();
        let colors = ColorScheme::for_dark(dark_theme);
        let styles = StyleSheet::resolve(&colors);

        let listing_sources = listing_photo_sources(&apartment);
        let cache_capacity = config
            .photos
            .effective_cache_capacity()
            .max(listing_sources.len());

        let fetch_limits = FetchLimits {
            max_bytes: config.photos.effective_max_bytes(),
            timeout: config.photos.effective_timeout(),
        };

        log::info!(
            "Showing \"{}\" ({} photos, locale {})",
            apartment.title,
            apartment.photos.len(),
            i18n.current_locale()
        );

        let mut app = App {
            i18n,
            screen: Screen::default(),
            theme_mode,
            dark_theme,
            colors,
            styles,
            photos: PhotoCache::new(cache_capacity),
            gallery: image_sources(&apartment),
            apartment,
            fetch_limits,
            photo_viewer: photo_viewer::State::default(),
            booking: booking::State::default(),
            config,
            config_dir,
            notice: catalog_warning.or(config_warning),
        };

        let task = app.request_photos(listing_sources);
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        if self.apartment.title.is_empty() {
            app_name
        } else {
            format!("{} - {app_name}", self.apartment.title)
        }
    }

    fn theme(&self) -> Theme {
        theming::iced_theme(self.dark_theme)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.screen)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Listing(message) => self.handle_listing_message(&message),
            Message::PhotoViewer(message) => self.handle_photo_viewer_message(&message),
            Message::Booking(message) => self.handle_booking_message(&message),
            Message::PhotoLoaded { uri, result } => {
                if let Err(err) = &result {
                    log::warn!("Photo {uri} unavailable: {err}");
                }
                self.photos.finish_load(uri, result);
                Task::none()
            }
            Message::ToggleTheme => {
                self.toggle_theme();
                Task::none()
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            apartment: &self.apartment,
            gallery: &self.gallery,
            styles: &self.styles,
            colors: &self.colors,
            photos: &self.photos,
            photo_viewer: &self.photo_viewer,
            booking: &self.booking,
            is_dark_theme: self.dark_theme,
            notice: self.notice.as_deref(),
        })
    }

    /// Starts a fetch for every source the cache does not already know about.
    fn request_photos(&mut self, sources: impl IntoIterator<Item = ImageSource>) -> Task<Message> {
        let limits = self.fetch_limits;
        let tasks: Vec<_> = sources
            .into_iter()
            .filter(|source| self.photos.begin_load(source))
            .map(|source| {
                let uri = source.uri.clone();
                Task::perform(media::load(source, limits), move |result| {
                    Message::PhotoLoaded {
                        uri: uri.clone(),
                        result,
                    }
                })
            })
            .collect();

        if tasks.is_empty() {
            Task::none()
        } else {
            log::debug!("Fetching {} photo(s)", tasks.len());
            Task::batch(tasks)
        }
    }
}

/// Every photo the listing screen shows: header, facility icons, gallery.
///
/// The photo cache is sized to hold at least all of them.
fn listing_photo_sources(apartment: &Apartment) -> Vec<ImageSource> {
    let mut sources = vec![ImageSource::new(apartment.primary_photo.as_str())];
    sources.extend(
        apartment
            .primary_facilities
            .iter()
            .filter_map(|facility| facility.icon.as_deref())
            .map(ImageSource::from),
    );
    sources.extend(image_sources(apartment));
    sources
}
