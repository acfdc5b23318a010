// SPDX-License-Identifier: MPL-2.0
//! Loading apartment records from listing files.
//!
//! A listing file is TOML:
//!
//! ```toml
//! title = "Loft"
//! description = "Quiet loft near the station."
//! primary_photo = "photos/lead.jpg"
//! photos = ["photos/1.jpg", "https://example.com/2.jpg"]
//!
//! [price]
//! value = 35
//! currency = "$"
//! scale = "night"
//!
//! [[primary_facilities]]
//! title = "2 Bedroom"
//! icon = "icons/bed.png"
//!
//! [[facilities]]
//! title = "Wi-Fi"
//! ```
//!
//! Relative photo and icon paths are resolved against the directory that
//! contains the listing file. A sample listing is embedded in the binary.

use crate::domain::listing::{Apartment, Facility, Price, PriceScale};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const SAMPLE_LISTING: &str = "sample.toml";

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct Asset;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ListingFile {
    title: String,
    #[serde(default)]
    description: String,
    price: PriceEntry,
    primary_photo: String,
    #[serde(default)]
    photos: Vec<String>,
    #[serde(default)]
    primary_facilities: Vec<FacilityEntry>,
    #[serde(default)]
    facilities: Vec<FacilityEntry>,
}

#[derive(Debug, Deserialize)]
struct PriceEntry {
    value: f64,
    #[serde(default = "default_currency")]
    currency: String,
    #[serde(default)]
    scale: ScaleEntry,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ScaleEntry {
    #[default]
    Night,
    Week,
    Month,
}

#[derive(Debug, Deserialize)]
struct FacilityEntry {
    title: String,
    #[serde(default)]
    icon: Option<String>,
}

fn default_currency() -> String {
    "$".to_string()
}

impl From<ScaleEntry> for PriceScale {
    fn from(scale: ScaleEntry) -> Self {
        match scale {
            ScaleEntry::Night => PriceScale::Night,
            ScaleEntry::Week => PriceScale::Week,
            ScaleEntry::Month => PriceScale::Month,
        }
    }
}

/// Makes a relative file reference absolute against `base_dir`.
///
/// URLs and absolute paths are returned unchanged.
fn resolve_reference(reference: &str, base_dir: Option<&Path>) -> String {
    if reference.contains("://") || reference.is_empty() {
        return reference.to_string();
    }
    match base_dir {
        Some(dir) if Path::new(reference).is_relative() => {
            dir.join(reference).to_string_lossy().into_owned()
        }
        _ => reference.to_string(),
    }
}

/// Parses a listing from TOML text.
pub fn parse(content: &str, base_dir: Option<&Path>) -> Result<Apartment> {
    let file: ListingFile =
        toml::from_str(content).map_err(|e| Error::Catalog(e.to_string()))?;

    let facility = |entry: FacilityEntry| Facility {
        title: entry.title,
        icon: entry
            .icon
            .map(|icon| resolve_reference(&icon, base_dir)),
    };

    Ok(Apartment {
        title: file.title,
        description: file.description,
        price: Price {
            value: file.price.value,
            currency: file.price.currency,
            scale: file.price.scale.into(),
        },
        primary_photo: resolve_reference(&file.primary_photo, base_dir),
        photos: file
            .photos
            .iter()
            .map(|photo| resolve_reference(photo, base_dir))
            .collect(),
        primary_facilities: file.primary_facilities.into_iter().map(facility).collect(),
        facilities: file.facilities.into_iter().map(facility).collect(),
    })
}

/// Loads a listing file from disk.
pub fn load_from_path(path: &Path) -> Result<Apartment> {
    let content = fs::read_to_string(path)?;
    parse(&content, path.parent())
}

/// The listing embedded in the binary.
pub fn sample() -> Result<Apartment> {
    let file = Asset::get(SAMPLE_LISTING)
        .ok_or_else(|| Error::Catalog(format!("{SAMPLE_LISTING} is not embedded")))?;
    parse(&String::from_utf8_lossy(file.data.as_ref()), None)
}

/// Loads the listing at `path`, falling back to the embedded sample.
///
/// Returns the listing and an optional warning key when the file could not be used.
pub fn load_or_sample(path: Option<&PathBuf>) -> (Apartment, Option<String>) {
    let mut warning = None;

    if let Some(path) = path {
        match load_from_path(path) {
            Ok(apartment) => {
                log::info!("Loaded listing from {}", path.display());
                return (apartment, None);
            }
            Err(err) => {
                log::warn!("Falling back to sample listing: {}", err);
                warning = Some("notification-catalog-load-error".to_string());
            }
        }
    }

    match sample() {
        Ok(apartment) => (apartment, warning),
        Err(err) => {
            log::error!("Embedded sample listing is unusable: {}", err);
            (Apartment::default(), warning)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const LISTING: &str = r#"
title = "Loft"
description = "Quiet loft."
primary_photo = "lead.jpg"
photos = ["a.jpg", "https://example.com/b.jpg", "/abs/c.jpg"]

[price]
value = 42.5
currency = "€"
scale = "week"

[[primary_facilities]]
title = "1 Bedroom"
icon = "icons/bed.png"

[[facilities]]
title = "Wi-Fi"
"#;

    #[test]
    fn parse_maps_every_field() {
        let apartment = parse(LISTING, None).expect("listing parses");

        assert_eq!(apartment.title, "Loft");
        assert_eq!(apartment.description, "Quiet loft.");
        assert_eq!(apartment.price.value, 42.5);
        assert_eq!(apartment.price.currency, "€");
        assert_eq!(apartment.price.scale, PriceScale::Week);
        assert_eq!(apartment.photos.len(), 3);
        assert_eq!(apartment.primary_facilities[0].title, "1 Bedroom");
        assert_eq!(apartment.facilities, vec![Facility::new("Wi-Fi")]);
    }

    #[test]
    fn relative_references_resolve_against_base_dir() {
        let base = Path::new("/listings/loft");
        let apartment = parse(LISTING, Some(base)).expect("listing parses");

        assert_eq!(
            apartment.primary_photo,
            base.join("lead.jpg").to_string_lossy()
        );
        assert_eq!(apartment.photos[0], base.join("a.jpg").to_string_lossy());
        assert_eq!(apartment.photos[1], "https://example.com/b.jpg");
        assert_eq!(
            apartment.primary_facilities[0].icon.as_deref(),
            Some(base.join("icons/bed.png").to_string_lossy().as_ref())
        );
    }

    #[cfg(unix)]
    #[test]
    fn absolute_references_are_kept() {
        let apartment = parse(LISTING, Some(Path::new("/listings"))).expect("listing parses");
        assert_eq!(apartment.photos[2], "/abs/c.jpg");
    }

    #[test]
    fn price_defaults_to_dollars_per_night() {
        let apartment = parse(
            "title = \"T\"\nprimary_photo = \"p.jpg\"\n[price]\nvalue = 10\n",
            None,
        )
        .expect("minimal listing parses");

        assert_eq!(apartment.price.currency, "$");
        assert_eq!(apartment.price.scale, PriceScale::Night);
        assert!(apartment.photos.is_empty());
    }

    #[test]
    fn missing_required_field_is_a_catalog_error() {
        let err = parse("title = \"T\"\n", None).expect_err("price is required");
        assert!(matches!(err, Error::Catalog(_)));
    }

    #[test]
    fn embedded_sample_parses() {
        let apartment = sample().expect("sample parses");
        assert!(!apartment.title.is_empty());
        assert!(!apartment.photos.is_empty());
    }

    #[test]
    fn load_or_sample_falls_back_with_warning() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "title = ").expect("write");

        let (apartment, warning) = load_or_sample(Some(&path));

        assert_eq!(apartment, sample().expect("sample parses"));
        assert_eq!(warning.as_deref(), Some("notification-catalog-load-error"));
    }

    #[test]
    fn load_from_path_uses_file_directory_as_base() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("loft.toml");
        fs::write(&path, LISTING).expect("write");

        let apartment = load_from_path(&path).expect("listing loads");
        assert_eq!(
            apartment.primary_photo,
            dir.path().join("lead.jpg").to_string_lossy()
        );
    }
}
