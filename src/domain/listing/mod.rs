// SPDX-License-Identifier: MPL-2.0
//! Rental listing domain types.

mod apartment;
mod newtypes;

pub use apartment::{image_sources, Apartment, Facility, ImageSource, Price, PriceScale};
pub use newtypes::{stay_bounds, StayLength};
