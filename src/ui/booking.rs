// SPDX-License-Identifier: MPL-2.0
//! Booking summary opened by the listing's book action.
//!
//! Lets the user pick a stay length and shows the resulting total. The stay
//! is counted in the listing's price periods, so a weekly price steps in
//! weeks. Confirming only reports the request upward; nothing is persisted.

use crate::app::i18n::fluent::I18n;
use crate::domain::listing::{Apartment, Price, StayLength};
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::theming::ColorScheme;
use fluent_bundle::FluentValue;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, rule, text, Column, Container, Row, Space};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct State {
    stay: StayLength,
    confirmed: bool,
}

impl State {
    #[must_use]
    pub fn stay(&self) -> StayLength {
        self.stay
    }

    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Total for the selected stay, one `price` per period.
    #[must_use]
    pub fn total(&self, price: &Price) -> Price {
        price.times(self.stay.value())
    }
}

/// Contextual data needed to render the booking screen.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub apartment: &'a Apartment,
    pub colors: &'a ColorScheme,
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    Back,
    IncrementStay,
    DecrementStay,
    Confirm,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Back,
    Confirmed { stay: StayLength },
}

/// Process a booking message and return the corresponding event.
pub fn update(state: &mut State, message: &Message) -> Event {
    match message {
        Message::Back => Event::Back,
        Message::IncrementStay => {
            state.stay = state.stay.increment();
            state.confirmed = false;
            Event::None
        }
        Message::DecrementStay => {
            state.stay = state.stay.decrement();
            state.confirmed = false;
            Event::None
        }
        Message::Confirm => {
            if state.confirmed {
                return Event::None;
            }
            state.confirmed = true;
            Event::Confirmed { stay: state.stay }
        }
    }
}

/// Render the booking screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ctx.colors;
    let stay = ctx.state.stay;
    let scale = ctx.apartment.price.scale;

    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("booking-back-button"))).size(typography::BUTTON),
    )
    .style(button_styles::secondary(colors))
    .on_press(Message::Back);

    let title = text(ctx.i18n.tr("booking-title"))
        .size(typography::HEADLINE)
        .color(colors.text_primary);

    let listing = text(ctx.apartment.title.clone())
        .size(typography::SUBTITLE)
        .color(colors.text_primary);

    let unit_price = text(format!(
        "{}{}",
        ctx.apartment.price,
        ctx.i18n.tr(ctx.apartment.price.scale.i18n_key())
    ))
    .size(typography::PARAGRAPH)
    .color(colors.text_hint);

    let stepper = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            text(ctx.i18n.tr(scale.stay_label_key()))
                .size(typography::PARAGRAPH)
                .color(colors.text_primary),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(text("−").size(typography::BUTTON))
                .style(button_styles::secondary(colors))
                .on_press_maybe((!stay.is_min()).then_some(Message::DecrementStay)),
        )
        .push(
            text(ctx.i18n.tr_with_number(
                scale.stay_count_key(),
                "count",
                stay.value() as usize,
            ))
            .size(typography::PARAGRAPH)
            .color(colors.text_primary),
        )
        .push(
            button(text("+").size(typography::BUTTON))
                .style(button_styles::secondary(colors))
                .on_press_maybe((!stay.is_max()).then_some(Message::IncrementStay)),
        );

    let total = Row::new()
        .align_y(Vertical::Center)
        .push(
            text(ctx.i18n.tr("booking-total-label"))
                .size(typography::SUBTITLE)
                .color(colors.text_primary),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            text(ctx.state.total(&ctx.apartment.price).to_string())
                .size(typography::PRICE_VALUE)
                .color(colors.text_primary),
        );

    let confirm_button = button(text(ctx.i18n.tr("booking-confirm-button")).size(typography::BUTTON))
        .padding([spacing::SM, spacing::MD])
        .style(button_styles::primary(colors))
        .on_press_maybe((!ctx.state.confirmed).then_some(Message::Confirm));

    let mut card = Column::new()
        .spacing(spacing::MD)
        .push(listing)
        .push(unit_price)
        .push(rule::horizontal(1))
        .push(stepper)
        .push(total)
        .push(
            Container::new(confirm_button)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        );

    if ctx.state.confirmed {
        card = card.push(
            text(ctx.i18n.tr_with_args(
                "booking-confirmed",
                &[("title", FluentValue::from(ctx.apartment.title.as_str()))],
            ))
            .size(typography::PARAGRAPH)
            .color(colors.brand_primary),
        );
    }

    let card = Container::new(card)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(container_styles::fill(colors.white, radius::LG));

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .width(Length::Fill)
        .push(back_button)
        .push(title)
        .push(card);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container_styles::surface(colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::domain::listing::{stay_bounds, PriceScale};

    fn price() -> Price {
        price_per(PriceScale::Night, 35.0)
    }

    fn price_per(scale: PriceScale, value: f64) -> Price {
        Price {
            value,
            currency: "$".to_string(),
            scale,
        }
    }

    #[test]
    fn default_state_books_one_period() {
        let state = State::default();
        assert_eq!(state.stay().value(), stay_bounds::DEFAULT);
        assert!(!state.is_confirmed());
        assert_eq!(state.total(&price()).value, 35.0);
    }

    #[test]
    fn total_is_price_times_nights() {
        let mut state = State::default();
        for _ in 0..3 {
            update(&mut state, &Message::IncrementStay);
        }
        assert_eq!(state.stay().value(), 4);
        assert_eq!(state.total(&price()).value, 140.0);
    }

    #[test]
    fn weekly_price_is_counted_in_weeks() {
        let weekly = price_per(PriceScale::Week, 700.0);
        let mut state = State::default();
        update(&mut state, &Message::IncrementStay);

        let total = state.total(&weekly);
        assert_eq!(state.stay().value(), 2);
        assert_eq!(total.value, 1400.0);
        assert_eq!(total.scale, PriceScale::Week);
    }

    #[test]
    fn stay_remains_within_bounds() {
        let mut state = State::default();
        update(&mut state, &Message::DecrementStay);
        assert_eq!(state.stay().value(), stay_bounds::MIN);

        for _ in 0..100 {
            update(&mut state, &Message::IncrementStay);
        }
        assert_eq!(state.stay().value(), stay_bounds::MAX);
    }

    #[test]
    fn confirm_reports_stay_once() {
        let mut state = State::default();
        update(&mut state, &Message::IncrementStay);

        assert_eq!(
            update(&mut state, &Message::Confirm),
            Event::Confirmed {
                stay: StayLength::new(2)
            }
        );
        assert!(state.is_confirmed());
        assert_eq!(update(&mut state, &Message::Confirm), Event::None);
    }

    #[test]
    fn changing_stay_clears_confirmation() {
        let mut state = State::default();
        update(&mut state, &Message::Confirm);
        update(&mut state, &Message::IncrementStay);
        assert!(!state.is_confirmed());
    }

    #[test]
    fn back_is_forwarded() {
        let mut state = State::default();
        assert_eq!(update(&mut state, &Message::Back), Event::Back);
    }

    #[test]
    fn view_renders_before_and_after_confirmation() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let colors = ColorScheme::light();
        let apartment = Apartment {
            title: "Loft".to_string(),
            price: price(),
            ..Apartment::default()
        };

        let mut state = State::default();
        {
            let _pending = view(ViewContext {
                state: &state,
                apartment: &apartment,
                colors: &colors,
                i18n: &i18n,
            });
        }

        update(&mut state, &Message::Confirm);
        let _confirmed = view(ViewContext {
            state: &state,
            apartment: &apartment,
            colors: &colors,
            i18n: &i18n,
        });
    }

    #[test]
    fn weekly_listing_labels_the_stepper_in_weeks() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let colors = ColorScheme::light();
        let apartment = Apartment {
            title: "Loft".to_string(),
            price: price_per(PriceScale::Week, 700.0),
            ..Apartment::default()
        };
        let mut state = State::default();
        update(&mut state, &Message::IncrementStay);

        let scale = apartment.price.scale;
        assert_eq!(i18n.tr(scale.stay_label_key()), "Weeks");
        assert_eq!(
            i18n.tr_with_number(scale.stay_count_key(), "count", state.stay().value() as usize),
            "2 weeks"
        );

        let _element = view(ViewContext {
            state: &state,
            apartment: &apartment,
            colors: &colors,
            i18n: &i18n,
        });
    }
}
