// Copyright 2026 the Handrail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A closed selected interval `[lo, hi]` along a range model's bounds.
///
/// The interval is caller-owned state: [`RangeModel`](crate::RangeModel)
/// operations never mutate one in place, they return a new `Interval` that the
/// caller commits. After any model operation the endpoints satisfy
/// `min <= lo <= hi <= max` for the model's bounds.
///
/// A zero-width interval (`lo == hi`) is valid; it is what remains after one
/// handle has been dragged all the way onto the other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    /// The lower endpoint.
    pub lo: f64,
    /// The upper endpoint.
    pub hi: f64,
}

impl Interval {
    /// Creates an interval from its endpoints.
    ///
    /// The endpoints are stored as given; use
    /// [`RangeModel::clamp_interval`](crate::RangeModel::clamp_interval) to
    /// normalize arbitrary caller state into a model's bounds.
    #[must_use]
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Returns the width `hi - lo` of the interval.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Returns `true` if the interval has collapsed to a single value.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.lo == self.hi
    }

    /// Returns `true` if `value` lies within the closed interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }
}
