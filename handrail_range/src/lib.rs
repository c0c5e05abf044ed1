// Copyright 2026 the Handrail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=handrail_range --heading-base-level=0

//! Handrail Range: headless dual-handle range model.
//!
//! This crate provides the value side of a dual-handle range slider, with no
//! rendering, hit testing, or gesture recognition. It focuses on:
//! - Bounds `[min, max]` and an optional step increment, validated at
//!   construction.
//! - Conversion between positions along a pixel track and domain values.
//! - Constrained endpoint updates: clamping, step quantization, and the
//!   ordering guarantee `min <= lo <= hi <= max`.
//!
//! It does **not** own the selected interval. Callers keep their own
//! [`Interval`] state and commit the intervals returned by
//! [`RangeModel::update_lower`] / [`RangeModel::update_upper`], in the same
//! way a view layer owns the bound values behind a platform slider. Drag
//! lifecycle tracking and track geometry live in `handrail_slider`, built on
//! top of this crate.
//!
//! ## Minimal example
//!
//! ```rust
//! use handrail_range::{Interval, RangeModel};
//!
//! // Bounds [0, 100], step 5.
//! let model = RangeModel::new(0.0, 100.0, 5.0)?;
//! let mut interval = model.clamp_interval(Interval::new(20.0, 80.0));
//!
//! // A pointer at x = 150 on a 400px track maps to value 37.5,
//! // which the lower-handle update snaps down to 35.
//! let raw = model.position_to_value(150.0, 400.0)?;
//! interval = model.update_lower(interval, raw);
//! assert_eq!(interval, Interval::new(35.0, 80.0));
//!
//! // Dragging the lower handle past the upper one collapses the
//! // interval instead of crossing the handles.
//! interval = model.update_lower(interval, 95.0);
//! assert_eq!(interval, Interval::new(80.0, 80.0));
//! # Ok::<(), Box<dyn core::error::Error>>(())
//! ```
//!
//! ## Design notes
//!
//! - Values are `f64` throughout; there is no generic numeric parameter.
//! - Endpoint updates are pure functions. The model never holds a reference
//!   to caller state and never invokes callbacks.
//! - Quantization direction is a per-model [`SnapMode`]; the default floors
//!   toward the lower bound for both handles.
//! - A zero-length track is reported as a [`LayoutError`] rather than
//!   producing a division by zero; callers skip that event.
//!
//! This crate is `no_std`.

#![no_std]

// `f64::floor`/`f64::round` are inherent std methods; link std when the `std`
// feature is enabled so the math shim in `model` can use them.
#[cfg(feature = "std")]
extern crate std;

mod interval;
mod model;
mod snap;

pub use interval::Interval;
pub use model::{ConfigError, LayoutError, RangeModel};
pub use snap::SnapMode;
