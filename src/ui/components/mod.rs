// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across screens.
//!
//! Components are plain functions from borrowed data to an [`iced::Element`].
//! They own no state; taps are reported through a message constructor
//! supplied by the caller.
//!
//! # Components
//!
//! - [`price_text`] - Price value followed by its billing scale
//! - [`facility_list`] - Primary facility tiles and secondary facility chips
//! - [`photo_list`] - Horizontal strip of photo thumbnails, plus the shared
//!   photo-or-placeholder primitive

pub mod facility_list;
pub mod photo_list;
pub mod price_text;
