// Copyright 2026 the Handrail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track geometry for presenting a dual-handle slider.
//!
//! A presentation layer typically draws three things: an inactive track, a
//! highlighted fill between the two handles, and the handles themselves.
//! [`TrackLayout`] computes the offsets for all three from the model's value
//! mapping, so the view code contains no value math of its own.

use handrail_range::{Interval, LayoutError, RangeModel};

/// Offsets along the track, in pixels from the track's leading edge.
///
/// Handle positions are the centers of the handles (the position of the
/// handle's value on the track); a view placing a shape by its leading edge
/// subtracts half the handle diameter itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackLayout {
    /// Start of the highlighted fill between the handles.
    pub fill_start: f64,
    /// Length of the highlighted fill; zero for a degenerate interval.
    pub fill_length: f64,
    /// Center of the lower handle.
    pub lower_center: f64,
    /// Center of the upper handle.
    pub upper_center: f64,
}

impl TrackLayout {
    /// Computes the layout for `interval` on a track of `track_length` pixels.
    ///
    /// `interval` is expected to satisfy the model invariant
    /// `min <= lo <= hi <= max`; pass caller state through
    /// [`RangeModel::clamp_interval`] first if it might not.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if `track_length` is not a finite positive
    /// length. Views skip drawing until layout is established.
    pub fn compute(
        model: &RangeModel,
        interval: Interval,
        track_length: f64,
    ) -> Result<Self, LayoutError> {
        let lower_center = model.value_to_position(interval.lo, track_length)?;
        let upper_center = model.value_to_position(interval.hi, track_length)?;
        Ok(Self {
            fill_start: lower_center,
            fill_length: upper_center - lower_center,
            lower_center,
            upper_center,
        })
    }
}
