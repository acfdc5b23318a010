// SPDX-License-Identifier: MPL-2.0
//! Theme modes and the color tokens each mode resolves to.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Color tokens of a theme.
///
/// Field names follow the catalog token names (`color-basic-100`,
/// `color-basic-200`, `color-white`...).
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub basic_100: Color,
    pub basic_200: Color,
    /// Card surface (`color-white` in light mode).
    pub white: Color,

    // Text colors
    pub text_primary: Color,
    pub text_hint: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_hover: Color,
    pub text_on_brand: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            basic_100: palette::BASIC_100,
            basic_200: palette::BASIC_200,
            white: palette::WHITE,

            text_primary: palette::BASIC_900,
            text_hint: palette::BASIC_600,

            brand_primary: palette::PRIMARY_500,
            brand_hover: palette::PRIMARY_400,
            text_on_brand: palette::WHITE,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            basic_100: palette::BASIC_1100,
            basic_200: palette::BASIC_800,
            white: palette::BASIC_1000,

            text_primary: palette::WHITE,
            text_hint: palette::BASIC_600,

            brand_primary: palette::PRIMARY_400,
            brand_hover: palette::PRIMARY_500,
            text_on_brand: palette::WHITE,
        }
    }

    #[must_use]
    pub fn for_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Resolves `mode`, querying the system theme for `ThemeMode::System`.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        Self::for_dark(mode.is_dark())
    }
}

/// Built-in Iced theme used for widgets the style sheet does not cover.
#[must_use]
pub fn iced_theme(is_dark: bool) -> Theme {
    if is_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme, which may block;
    /// callers resolve it once and keep the result.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to light on detection error
                matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
            }
        }
    }

    /// The explicit mode a theme toggle switches to from a resolved theme.
    #[must_use]
    pub fn toggled_from(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme mode: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.basic_100.r > 0.9);
        assert_eq!(scheme.white, palette::WHITE);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.basic_100.r < 0.2);
    }

    #[test]
    fn both_themes_have_blue_brand() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();
        assert!(light.brand_primary.b > light.brand_primary.r);
        assert!(dark.brand_primary.b > dark.brand_primary.r);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn toggled_from_picks_the_opposite_explicit_mode() {
        assert_eq!(ThemeMode::toggled_from(false), ThemeMode::Dark);
        assert_eq!(ThemeMode::toggled_from(true), ThemeMode::Light);
    }

    #[test]
    fn scheme_and_iced_theme_follow_the_same_flag() {
        assert_eq!(ColorScheme::for_dark(true), ColorScheme::dark());
        assert_eq!(ColorScheme::for_dark(false), ColorScheme::light());
        assert_eq!(iced_theme(true), Theme::Dark);
        assert_eq!(iced_theme(false), Theme::Light);
    }

    #[test]
    fn theme_mode_parses_case_insensitively() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("system".parse::<ThemeMode>(), Ok(ThemeMode::System));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }
}
