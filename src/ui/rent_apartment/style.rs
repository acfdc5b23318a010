// SPDX-License-Identifier: MPL-2.0
//! Style sheet of the listing screen.
//!
//! Every visual region of the screen has a [`Region`] name and a
//! [`RegionStyle`]. A [`StyleSheet`] holds one style per region; it is
//! resolved from a [`ColorScheme`] when the theme changes and handed to the
//! view by reference, so rendering never touches theme state.

use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::{Color, Padding};

/// Named visual regions of the listing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Container,
    BackgroundImage,
    InfoContainer,
    DetailsContainer,
    BookContainer,
    FacilitiesContainer,
    PrimaryFacilityList,
    FacilityList,
    AboutSection,
    PhotoSection,
    PhotoList,
    TitleLabel,
    RentLabel,
    BookButton,
    PriceLabel,
    PriceValueLabel,
    PriceScaleLabel,
    SectionLabel,
    AboutLabel,
    PhotoLabel,
}

impl Region {
    pub const COUNT: usize = 20;

    /// Every region, in declaration order.
    pub const ALL: [Region; Region::COUNT] = [
        Region::Container,
        Region::BackgroundImage,
        Region::InfoContainer,
        Region::DetailsContainer,
        Region::BookContainer,
        Region::FacilitiesContainer,
        Region::PrimaryFacilityList,
        Region::FacilityList,
        Region::AboutSection,
        Region::PhotoSection,
        Region::PhotoList,
        Region::TitleLabel,
        Region::RentLabel,
        Region::BookButton,
        Region::PriceLabel,
        Region::PriceValueLabel,
        Region::PriceScaleLabel,
        Region::SectionLabel,
        Region::AboutLabel,
        Region::PhotoLabel,
    ];

    /// Stable camelCase name, used in logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Region::Container => "container",
            Region::BackgroundImage => "backgroundImage",
            Region::InfoContainer => "infoContainer",
            Region::DetailsContainer => "detailsContainer",
            Region::BookContainer => "bookContainer",
            Region::FacilitiesContainer => "facilitiesContainer",
            Region::PrimaryFacilityList => "primaryFacilityList",
            Region::FacilityList => "facilityList",
            Region::AboutSection => "aboutSection",
            Region::PhotoSection => "photoSection",
            Region::PhotoList => "photoList",
            Region::TitleLabel => "titleLabel",
            Region::RentLabel => "rentLabel",
            Region::BookButton => "bookButton",
            Region::PriceLabel => "priceLabel",
            Region::PriceValueLabel => "priceValueLabel",
            Region::PriceScaleLabel => "priceScaleLabel",
            Region::SectionLabel => "sectionLabel",
            Region::AboutLabel => "aboutLabel",
            Region::PhotoLabel => "photoLabel",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Typography of a text region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub line_height: f32,
    pub color: Color,
    pub bold: bool,
}

/// A one-sided border drawn under a region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BottomBorder {
    pub width: f32,
    pub color: Color,
}

/// Style attributes of one region. Unset attributes leave the widget default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStyle {
    pub background: Option<Color>,
    pub padding: Padding,
    /// Space kept around the region, applied by wrapping it.
    pub margin: Padding,
    pub min_height: Option<f32>,
    pub radius: f32,
    pub bottom_border: Option<BottomBorder>,
    pub text: Option<TextStyle>,
}

impl Default for RegionStyle {
    fn default() -> Self {
        Self {
            background: None,
            padding: Padding::ZERO,
            margin: Padding::ZERO,
            min_height: None,
            radius: radius::NONE,
            bottom_border: None,
            text: None,
        }
    }
}

impl RegionStyle {
    /// Layers `other` on top of `self`: every attribute `other` sets wins.
    #[must_use]
    pub fn merge(&self, other: &RegionStyle) -> RegionStyle {
        RegionStyle {
            background: other.background.or(self.background),
            padding: if other.padding == Padding::ZERO {
                self.padding
            } else {
                other.padding
            },
            margin: if other.margin == Padding::ZERO {
                self.margin
            } else {
                other.margin
            },
            min_height: other.min_height.or(self.min_height),
            radius: if other.radius == radius::NONE {
                self.radius
            } else {
                other.radius
            },
            bottom_border: other.bottom_border.or(self.bottom_border),
            text: other.text.or(self.text),
        }
    }
}

/// Resolved styles for every [`Region`].
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    regions: [RegionStyle; Region::COUNT],
}

impl StyleSheet {
    /// Resolves the sheet for a color scheme.
    #[must_use]
    pub fn resolve(colors: &ColorScheme) -> Self {
        let mut regions = [RegionStyle::default(); Region::COUNT];
        for region in Region::ALL {
            regions[region.index()] = region_style(region, colors);
        }
        Self { regions }
    }

    /// Style of a region.
    #[must_use]
    pub fn get(&self, region: Region) -> &RegionStyle {
        &self.regions[region.index()]
    }

    /// Style of `base` with `overlay` layered on top.
    #[must_use]
    pub fn merged(&self, base: Region, overlay: Region) -> RegionStyle {
        self.get(base).merge(self.get(overlay))
    }
}

fn all(value: f32) -> Padding {
    Padding {
        top: value,
        right: value,
        bottom: value,
        left: value,
    }
}

fn symmetric(vertical: f32, horizontal: f32) -> Padding {
    Padding {
        top: vertical,
        right: horizontal,
        bottom: vertical,
        left: horizontal,
    }
}

fn top(value: f32) -> Padding {
    Padding {
        top: value,
        ..Padding::ZERO
    }
}

fn headline(colors: &ColorScheme) -> TextStyle {
    TextStyle {
        size: typography::HEADLINE,
        line_height: typography::HEADLINE_LINE_HEIGHT,
        color: colors.text_primary,
        bold: true,
    }
}

fn subtitle(colors: &ColorScheme) -> TextStyle {
    TextStyle {
        size: typography::SUBTITLE,
        line_height: typography::SUBTITLE_LINE_HEIGHT,
        color: colors.text_primary,
        bold: true,
    }
}

fn paragraph(colors: &ColorScheme) -> TextStyle {
    TextStyle {
        size: typography::PARAGRAPH,
        line_height: typography::PARAGRAPH_LINE_HEIGHT,
        color: colors.text_hint,
        bold: false,
    }
}

fn region_style(region: Region, colors: &ColorScheme) -> RegionStyle {
    let base = RegionStyle::default();

    match region {
        Region::Container => RegionStyle {
            background: Some(colors.basic_100),
            ..base
        },
        Region::BackgroundImage => RegionStyle {
            background: Some(colors.basic_200),
            min_height: Some(sizing::HEADER_MIN_HEIGHT),
            ..base
        },
        Region::InfoContainer => RegionStyle {
            background: Some(colors.white),
            margin: symmetric(0.0, spacing::MD),
            radius: radius::LG,
            ..base
        },
        Region::DetailsContainer => RegionStyle {
            padding: all(spacing::LG),
            bottom_border: Some(BottomBorder {
                width: border::WIDTH_SM,
                color: colors.basic_200,
            }),
            ..base
        },
        Region::BookContainer => base,
        Region::FacilitiesContainer => RegionStyle {
            padding: all(spacing::LG),
            ..base
        },
        Region::PrimaryFacilityList => RegionStyle {
            padding: symmetric(spacing::MD, 0.0),
            ..base
        },
        Region::FacilityList => RegionStyle {
            padding: symmetric(spacing::SM, 0.0),
            ..base
        },
        Region::AboutSection => RegionStyle {
            margin: all(spacing::LG),
            ..base
        },
        Region::PhotoSection => RegionStyle {
            margin: symmetric(spacing::XS, 0.0),
            ..base
        },
        Region::PhotoList => RegionStyle {
            margin: all(spacing::MD),
            ..base
        },
        Region::TitleLabel => RegionStyle {
            text: Some(headline(colors)),
            ..base
        },
        Region::RentLabel => RegionStyle {
            margin: top(spacing::LG),
            text: Some(paragraph(colors)),
            ..base
        },
        Region::BookButton => RegionStyle {
            background: Some(colors.brand_primary),
            padding: symmetric(spacing::SM, spacing::MD),
            radius: radius::SM,
            text: Some(TextStyle {
                size: typography::BUTTON,
                line_height: typography::PARAGRAPH_LINE_HEIGHT,
                color: colors.text_on_brand,
                bold: true,
            }),
            ..base
        },
        Region::PriceLabel => RegionStyle {
            margin: top(spacing::XS),
            ..base
        },
        Region::PriceValueLabel => RegionStyle {
            text: Some(TextStyle {
                size: typography::PRICE_VALUE,
                line_height: typography::PRICE_VALUE_LINE_HEIGHT,
                color: colors.text_primary,
                bold: true,
            }),
            ..base
        },
        Region::PriceScaleLabel => RegionStyle {
            text: Some(TextStyle {
                size: typography::PRICE_SCALE,
                line_height: typography::PRICE_SCALE_LINE_HEIGHT,
                ..paragraph(colors)
            }),
            ..base
        },
        Region::SectionLabel => RegionStyle {
            text: Some(subtitle(colors)),
            ..base
        },
        Region::AboutLabel => RegionStyle {
            margin: symmetric(spacing::MD, 0.0),
            text: Some(paragraph(colors)),
            ..base
        },
        Region::PhotoLabel => RegionStyle {
            margin: symmetric(0.0, spacing::LG),
            ..base
        },
    }
}
