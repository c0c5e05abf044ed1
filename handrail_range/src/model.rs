// Copyright 2026 the Handrail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::interval::Interval;
use crate::snap::SnapMode;

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("handrail_range requires either the `std` or `libm` feature");

#[inline]
fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();
    #[cfg(all(not(feature = "std"), feature = "libm"))]
    return libm::floor(x);
}

#[inline]
fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round();
    #[cfg(all(not(feature = "std"), feature = "libm"))]
    return libm::round(x);
}

/// Error rejecting a malformed model configuration at construction time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The bounds are degenerate or non-finite: `min < max` must hold.
    InvalidBounds {
        /// The rejected lower bound.
        min: f64,
        /// The rejected upper bound.
        max: f64,
    },
    /// The step is negative or non-finite.
    InvalidStep {
        /// The rejected step.
        step: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { min, max } => {
                write!(f, "bounds [{min}, {max}] are invalid: min < max must hold")
            }
            Self::InvalidStep { step } => {
                write!(f, "step {step} is invalid: a finite value >= 0 is required")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Error returned when a position mapping is requested before the track has a
/// usable layout.
///
/// The expected recovery is to skip the pointer event that produced the
/// mapping request; the next event after layout settles will succeed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutError {
    /// The rejected track length.
    pub track_length: f64,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "track length {} is invalid: a finite positive length is required",
            self.track_length
        )
    }
}

impl core::error::Error for LayoutError {}

/// Headless model of a dual-handle range control.
///
/// `RangeModel` owns the immutable configuration of the control: the outer
/// bounds `[min, max]`, the step increment, and the [`SnapMode`]. It converts
/// between positions along a pixel track and domain values, and computes
/// constrained endpoint updates for the caller-owned [`Interval`].
///
/// All operations are pure: endpoint updates return the new interval, and the
/// caller decides when to commit it to its own state.
///
/// Values are `f64`; with steps many orders of magnitude smaller than the
/// bounds width, quantization is subject to ordinary double-precision
/// rounding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeModel {
    min: f64,
    max: f64,
    step: f64,
    snap: SnapMode,
}

impl RangeModel {
    /// Creates a model over the bounds `[min, max]` with the given step.
    ///
    /// A step of `0` means the control is continuous (no quantization). The
    /// snap mode defaults to [`SnapMode::Floor`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the bounds are non-finite or `min >= max`,
    /// or if the step is negative or non-finite.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, ConfigError> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        if !step.is_finite() || step < 0.0 {
            return Err(ConfigError::InvalidStep { step });
        }
        Ok(Self {
            min,
            max,
            step,
            snap: SnapMode::default(),
        })
    }

    /// Creates a continuous model over the unit bounds `[0, 1]`.
    #[must_use]
    pub const fn unit() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            step: 0.0,
            snap: SnapMode::Floor,
        }
    }

    /// Sets the snap mode, consuming and returning the model.
    #[must_use]
    pub fn with_snap_mode(mut self, snap: SnapMode) -> Self {
        self.snap = snap;
        self
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns the step increment (`0` means continuous).
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the current snap mode.
    #[must_use]
    pub fn snap_mode(&self) -> SnapMode {
        self.snap
    }

    /// Converts a position along the track into a domain value.
    ///
    /// `offset` may lie outside `[0, track_length]`: drags routinely leave the
    /// track, and the resulting out-of-bounds value is clamped later by the
    /// endpoint update. No clamping happens here.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if `track_length` is not a finite positive
    /// length, which happens when pointer events arrive before layout.
    pub fn position_to_value(&self, offset: f64, track_length: f64) -> Result<f64, LayoutError> {
        if !track_length.is_finite() || track_length <= 0.0 {
            return Err(LayoutError { track_length });
        }
        Ok(self.min + (offset / track_length) * (self.max - self.min))
    }

    /// Converts a domain value into a position along the track.
    ///
    /// Inverse of [`Self::position_to_value`] for in-bounds values.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if `track_length` is not a finite positive
    /// length.
    pub fn value_to_position(&self, value: f64, track_length: f64) -> Result<f64, LayoutError> {
        if !track_length.is_finite() || track_length <= 0.0 {
            return Err(LayoutError { track_length });
        }
        Ok(self.fraction(value) * track_length)
    }

    /// Returns `value` normalized into `[0, 1]` over the bounds.
    ///
    /// Out-of-bounds values produce fractions outside `[0, 1]`; no clamping.
    #[must_use]
    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    /// Computes the new interval after dragging the lower handle to `raw`.
    ///
    /// `raw` is clamped into `[min, interval.hi]`, quantized per the snap
    /// mode, and re-clamped. The upper endpoint is unchanged; the handles
    /// never cross, a drag past the upper handle collapses the interval to
    /// zero width instead.
    ///
    /// A non-finite `raw` leaves the interval unchanged.
    #[must_use]
    pub fn update_lower(&self, interval: Interval, raw: f64) -> Interval {
        if !raw.is_finite() {
            return interval;
        }
        let clamped = raw.clamp(self.min, interval.hi);
        let lo = self.quantize(clamped).clamp(self.min, interval.hi);
        Interval { lo, hi: interval.hi }
    }

    /// Computes the new interval after dragging the upper handle to `raw`.
    ///
    /// Symmetric to [`Self::update_lower`]: `raw` is clamped into
    /// `[interval.lo, max]`, quantized, and re-clamped. The lower endpoint is
    /// unchanged.
    #[must_use]
    pub fn update_upper(&self, interval: Interval, raw: f64) -> Interval {
        if !raw.is_finite() {
            return interval;
        }
        let clamped = raw.clamp(interval.lo, self.max);
        let hi = self.quantize(clamped).clamp(interval.lo, self.max);
        Interval { lo: interval.lo, hi }
    }

    /// Normalizes an arbitrary caller interval into the model's bounds.
    ///
    /// Endpoints are reordered if needed and clamped into `[min, max]`. Use
    /// this once when installing initial state; the endpoint updates keep the
    /// invariant from then on.
    #[must_use]
    pub fn clamp_interval(&self, interval: Interval) -> Interval {
        let (lo, hi) = if interval.lo <= interval.hi {
            (interval.lo, interval.hi)
        } else {
            (interval.hi, interval.lo)
        };
        Interval {
            lo: lo.clamp(self.min, self.max),
            hi: hi.clamp(self.min, self.max),
        }
    }

    /// Snaps `value` to the step grid anchored at `min`.
    ///
    /// A zero step leaves the value untouched. The result can land one step
    /// outside the clamp window the caller used, so callers re-clamp.
    fn quantize(&self, value: f64) -> f64 {
        if self.step <= 0.0 {
            return value;
        }
        let steps = (value - self.min) / self.step;
        let snapped = match self.snap {
            SnapMode::Floor => floor(steps),
            SnapMode::Nearest => round(steps),
        };
        self.min + snapped * self.step
    }
}

impl Default for RangeModel {
    fn default() -> Self {
        Self::unit()
    }
}
