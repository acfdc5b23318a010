// SPDX-License-Identifier: MPL-2.0
//! Listing newtypes.

/// Stay length bounds for a single booking, in price periods.
pub mod stay_bounds {
    /// Minimum number of periods.
    pub const MIN: u32 = 1;
    /// Maximum number of periods.
    pub const MAX: u32 = 30;
    /// Default number of periods.
    pub const DEFAULT: u32 = 1;
}

/// Length of a stay, counted in the listing's price periods (nights, weeks
/// or months), guaranteed to be within 1..=30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StayLength(u32);

impl StayLength {
    /// Creates a new stay length, clamping the value to the valid range.
    #[must_use]
    pub fn new(periods: u32) -> Self {
        Self(periods.clamp(stay_bounds::MIN, stay_bounds::MAX))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// One more period, saturating at the maximum.
    #[must_use]
    pub fn increment(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// One less period, saturating at the minimum.
    #[must_use]
    pub fn decrement(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 == stay_bounds::MIN
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 == stay_bounds::MAX
    }
}

impl Default for StayLength {
    fn default() -> Self {
        Self(stay_bounds::DEFAULT)
    }
}
