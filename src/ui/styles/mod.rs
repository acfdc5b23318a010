// SPDX-License-Identifier: MPL-2.0
//! Conversions from resolved region styles to Iced widget styles.

pub mod button;
pub mod container;
pub mod text;
