// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Photos**: Cache capacity, payload limit and fetch timeout
//! - **Catalog**: Listing file name

// ==========================================================================
// Photo Defaults
// ==========================================================================

/// Default number of decoded photo handles kept in memory.
pub const DEFAULT_PHOTO_CACHE_CAPACITY: usize = 32;

/// Minimum photo cache capacity.
pub const MIN_PHOTO_CACHE_CAPACITY: usize = 4;

/// Maximum photo cache capacity.
pub const MAX_PHOTO_CACHE_CAPACITY: usize = 256;

/// Default maximum size of a single photo payload (16 MiB).
pub const DEFAULT_PHOTO_MAX_BYTES: usize = 16 * 1024 * 1024;

/// Minimum photo payload limit (256 KiB).
pub const MIN_PHOTO_MAX_BYTES: usize = 256 * 1024;

/// Maximum photo payload limit (128 MiB).
pub const MAX_PHOTO_MAX_BYTES: usize = 128 * 1024 * 1024;

/// Default timeout for one photo fetch, in seconds.
pub const DEFAULT_PHOTO_TIMEOUT_SECS: u64 = 20;

/// Minimum photo fetch timeout, in seconds.
pub const MIN_PHOTO_TIMEOUT_SECS: u64 = 1;

/// Maximum photo fetch timeout, in seconds.
pub const MAX_PHOTO_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Listing file looked up in the config directory when no path is configured.
pub const DEFAULT_CATALOG_FILE: &str = "apartment.toml";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_PHOTO_CACHE_CAPACITY > 0);
    assert!(DEFAULT_PHOTO_CACHE_CAPACITY >= MIN_PHOTO_CACHE_CAPACITY);
    assert!(DEFAULT_PHOTO_CACHE_CAPACITY <= MAX_PHOTO_CACHE_CAPACITY);
    assert!(DEFAULT_PHOTO_MAX_BYTES >= MIN_PHOTO_MAX_BYTES);
    assert!(DEFAULT_PHOTO_MAX_BYTES <= MAX_PHOTO_MAX_BYTES);
    assert!(DEFAULT_PHOTO_TIMEOUT_SECS >= MIN_PHOTO_TIMEOUT_SECS);
    assert!(DEFAULT_PHOTO_TIMEOUT_SECS <= MAX_PHOTO_TIMEOUT_SECS);
};
