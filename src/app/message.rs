// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::PhotoError;
use crate::ui::booking;
use crate::ui::photo_viewer;
use crate::ui::rent_apartment;
use crate::ui::theming::ThemeMode;
use iced::widget::image::Handle;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level screen messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Listing(rent_apartment::Message),
    PhotoViewer(photo_viewer::Message),
    Booking(booking::Message),
    /// A photo fetch finished.
    PhotoLoaded {
        uri: String,
        result: Result<Handle, PhotoError>,
    },
    ToggleTheme,
    /// Hide the startup notice banner.
    DismissNotice,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional listing file to display instead of the configured one.
    pub catalog_path: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_RENTALS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional theme override for this session; not persisted.
    pub theme: Option<ThemeMode>,
}
