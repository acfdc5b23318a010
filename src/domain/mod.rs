// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) so it can be tested
//! without a renderer or a runtime.
//!
//! # Modules
//!
//! - [`listing`]: Rental listing types ([`Apartment`](listing::Apartment),
//!   [`Price`](listing::Price), [`Facility`](listing::Facility),
//!   [`ImageSource`](listing::ImageSource), [`StayLength`](listing::StayLength))

pub mod listing;
