// SPDX-License-Identifier: MPL-2.0
//! User interface screens, components and styling.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each
//! exposes a `ViewContext`, a `Message`, an `Event` and `update`/`view`
//! functions.
//!
//! # Screens
//!
//! - [`rent_apartment`] - Apartment listing with its style sheet
//! - [`photo_viewer`] - Full-size gallery opened from a listing photo
//! - [`booking`] - Night selection and total opened from the book action
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Price text, facility lists, photo list
//! - [`styles`] - Conversions from region styles to widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and color schemes

pub mod booking;
pub mod components;
pub mod design_tokens;
pub mod photo_viewer;
pub mod rent_apartment;
pub mod styles;
pub mod theming;
