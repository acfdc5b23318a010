// SPDX-License-Identifier: MPL-2.0
use iced_rentals::app::config::{self, Config, GeneralConfig};
use iced_rentals::app::i18n::fluent::I18n;
use iced_rentals::catalog;
use iced_rentals::domain::listing::image_sources;
use iced_rentals::ui::rent_apartment::{self, ListingModel};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&english, &config_path).expect("Failed to write english config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load english config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french, &config_path).expect("Failed to write french config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn test_invalid_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[general\nlanguage = ")
        .expect("Failed to write broken config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn test_configured_catalog_is_resolved_against_config_dir() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let listing = r#"
title = "Garden Studio"
description = "Small studio with a garden."
primary_photo = "photos/lead.jpg"
photos = ["photos/1.jpg", "photos/2.jpg"]

[price]
value = 20
"#;
    fs::write(dir.path().join("studio.toml"), listing).expect("Failed to write listing");
    fs::write(
        dir.path().join("settings.toml"),
        "[catalog]\npath = \"studio.toml\"\n",
    )
    .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let path = config::resolve_catalog_path(&config, Some(dir.path().to_path_buf()))
        .expect("catalog path is configured");
    let (apartment, warning) = catalog::load_or_sample(Some(&path));

    assert!(warning.is_none());
    assert_eq!(apartment.title, "Garden Studio");
    assert_eq!(
        apartment.photos[0],
        dir.path().join("photos/1.jpg").to_string_lossy()
    );
}

#[test]
fn test_sample_listing_renders_as_model() {
    let apartment = catalog::sample().expect("sample parses");
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());

    let model = ListingModel::build(&apartment, &i18n);

    assert_eq!(model.title, apartment.title);
    assert_eq!(model.description, apartment.description);
    assert_eq!(model.gallery, image_sources(&apartment));
    assert_eq!(
        rent_apartment::update(&rent_apartment::Message::PhotoPressed(1)),
        rent_apartment::Event::PhotoRequested(1)
    );
}

#[test]
fn test_french_labels() {
    let config = Config::default();
    let i18n = I18n::new(Some("fr".to_string()), &config);
    let apartment = catalog::sample().expect("sample parses");

    let model = ListingModel::build(&apartment, &i18n);

    assert_eq!(model.book_label, "RÉSERVER");
    assert_eq!(model.title, apartment.title);
}
