// SPDX-License-Identifier: MPL-2.0
//! `iced_rentals` shows an apartment rental listing with the Iced GUI framework.
//!
//! The listing screen renders one apartment record (photos, price, facilities,
//! description) with an explicit, theme-resolved style sheet, and forwards
//! booking and photo intents to the application, which opens a booking
//! summary or a photo viewer. Listings are read from TOML files; photos are
//! fetched from disk or over HTTP into an LRU cache.

pub mod app;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod media;
pub mod ui;
