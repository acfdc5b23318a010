// SPDX-License-Identifier: MPL-2.0
//! Listing photo loading and caching.
//!
//! - [`photo_loader`] fetches a photo reference (URL or file) into an image handle
//! - [`photo_cache`] keeps loaded handles and the status of in-flight fetches

pub mod photo_cache;
pub mod photo_loader;

pub use photo_cache::{PhotoCache, PhotoStatus};
pub use photo_loader::{load, FetchLimits};
