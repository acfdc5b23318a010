// SPDX-License-Identifier: MPL-2.0
//! Price label: "$35" followed by "/night" in a smaller style.

use crate::app::i18n::fluent::I18n;
use crate::domain::listing::Price;
use crate::ui::rent_apartment::style::RegionStyle;
use crate::ui::styles::text as text_styles;
use iced::alignment::Vertical;
use iced::widget::{text, Row};
use iced::Element;

/// Styles of the two labels, taken from the caller's style sheet.
#[derive(Debug, Clone, Copy)]
pub struct PriceStyles<'a> {
    pub value: &'a RegionStyle,
    pub scale: &'a RegionStyle,
}

/// Value and scale text, as displayed.
#[must_use]
pub fn labels(price: &Price, i18n: &I18n) -> (String, String) {
    (price.formatted_value(), i18n.tr(price.scale.i18n_key()))
}

/// Renders a price with independently styled value and scale labels.
pub fn view<'a, M: 'a>(price: &Price, styles: PriceStyles<'_>, i18n: &I18n) -> Element<'a, M> {
    let (value, scale) = labels(price, i18n);

    Row::new()
        .align_y(Vertical::Bottom)
        .push(text_styles::apply(text(value), styles.value.text.as_ref()))
        .push(text_styles::apply(text(scale), styles.scale.text.as_ref()))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::domain::listing::PriceScale;
    use crate::ui::rent_apartment::style::{Region, StyleSheet};
    use crate::ui::theming::ColorScheme;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn labels_split_value_and_scale() {
        let price = Price {
            value: 35.0,
            currency: "$".to_string(),
            scale: PriceScale::Night,
        };
        assert_eq!(
            labels(&price, &english()),
            ("$35".to_string(), "/night".to_string())
        );
    }

    #[test]
    fn view_renders_with_sheet_styles() {
        let sheet = StyleSheet::resolve(&ColorScheme::light());
        let styles = PriceStyles {
            value: sheet.get(Region::PriceValueLabel),
            scale: sheet.get(Region::PriceScaleLabel),
        };
        let _element: Element<'_, ()> = view(&Price::default(), styles, &english());
    }
}
