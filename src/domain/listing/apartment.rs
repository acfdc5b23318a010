// SPDX-License-Identifier: MPL-2.0
//! Apartment record and the values derived from it for display.

use std::fmt;

/// Billing period a listing price applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceScale {
    #[default]
    Night,
    Week,
    Month,
}

impl PriceScale {
    /// Returns the i18n message key for the scale suffix (e.g. "/night").
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            PriceScale::Night => "price-scale-night",
            PriceScale::Week => "price-scale-week",
            PriceScale::Month => "price-scale-month",
        }
    }

    /// i18n key naming the stay unit for this scale ("Nights", "Weeks"...).
    #[must_use]
    pub fn stay_label_key(self) -> &'static str {
        match self {
            PriceScale::Night => "booking-nights-label",
            PriceScale::Week => "booking-weeks-label",
            PriceScale::Month => "booking-months-label",
        }
    }

    /// i18n key counting stay units, taking a `count` argument.
    #[must_use]
    pub fn stay_count_key(self) -> &'static str {
        match self {
            PriceScale::Night => "booking-nights-count",
            PriceScale::Week => "booking-weeks-count",
            PriceScale::Month => "booking-months-count",
        }
    }
}

/// Listing price: an amount in a currency for one billing period.
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    pub value: f64,
    pub currency: String,
    pub scale: PriceScale,
}

impl Price {
    /// Formats the amount with its currency symbol, without the scale.
    ///
    /// Whole amounts are printed without decimals, others with two.
    #[must_use]
    pub fn formatted_value(&self) -> String {
        if self.value.fract() == 0.0 {
            format!("{}{:.0}", self.currency, self.value)
        } else {
            format!("{}{:.2}", self.currency, self.value)
        }
    }

    /// Price for `periods` billing periods, in the same currency and scale.
    #[must_use]
    pub fn times(&self, periods: u32) -> Price {
        Price {
            value: self.value * f64::from(periods),
            currency: self.currency.clone(),
            scale: self.scale,
        }
    }
}

impl Default for Price {
    fn default() -> Self {
        Self {
            value: 0.0,
            currency: "$".to_string(),
            scale: PriceScale::default(),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted_value())
    }
}

/// An amenity of the listing (Wi-Fi, parking, bedrooms...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facility {
    pub title: String,
    /// Optional icon reference, only rendered in the primary tier.
    pub icon: Option<String>,
}

impl Facility {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// A rental listing, provided fully formed by whoever loaded it.
///
/// Views only ever borrow it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Apartment {
    pub title: String,
    pub description: String,
    pub price: Price,
    pub primary_photo: String,
    pub photos: Vec<String>,
    pub primary_facilities: Vec<Facility>,
    pub facilities: Vec<Facility>,
}

/// A photo reference wrapped for the image primitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageSource {
    pub uri: String,
}

impl ImageSource {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

impl From<&str> for ImageSource {
    fn from(uri: &str) -> Self {
        Self::new(uri)
    }
}

/// Maps each photo reference of the listing to an [`ImageSource`], in order.
#[must_use]
pub fn image_sources(apartment: &Apartment) -> Vec<ImageSource> {
    apartment
        .photos
        .iter()
        .map(|photo| ImageSource::new(photo.as_str()))
        .collect()
}
