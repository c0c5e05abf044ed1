// Copyright 2026 the Handrail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=handrail_slider --heading-base-level=0

//! Handrail Slider: drag sessions and track geometry for dual-handle sliders.
//!
//! This crate sits between a host UI toolkit and the pure value model in
//! `handrail_range`. It provides:
//! - [`RangeSliderState`]: the per-slider drag lifecycle
//!   (`Idle -> Dragging -> Idle` per handle), translating pointer events into
//!   constrained interval updates.
//! - [`SliderEvent`]: the transition events a host relays into its own
//!   change/editing notifications.
//! - [`TrackLayout`]: fill and handle offsets for a presentation layer.
//!
//! The host remains responsible for hit testing (which handle a pointer-down
//! landed on), gesture recognition, and rendering. This crate never draws and
//! never stores callbacks; every update returns at most one event.
//!
//! ## Minimal example
//!
//! ```rust
//! use handrail_range::{Interval, RangeModel};
//! use handrail_slider::{Handle, RangeSliderState, SliderEvent, TrackLayout};
//!
//! let model = RangeModel::new(0.0, 100.0, 0.0)?;
//! let mut slider = RangeSliderState::new(model);
//! let mut interval = Interval::new(20.0, 80.0);
//!
//! // Host hit-tested a pointer-down onto the lower handle.
//! slider.on_down(Handle::Lower);
//!
//! // Pointer moves to x = 180 on a 400px track (value 45).
//! if let Some(SliderEvent::ValueChanged(iv)) = slider.on_move(&mut interval, 180.0, 400.0) {
//!     assert_eq!(iv, Interval::new(45.0, 80.0));
//! }
//! slider.on_up();
//!
//! // Geometry for drawing the fill and handles.
//! let layout = TrackLayout::compute(slider.model(), interval, 400.0)?;
//! assert_eq!(layout.fill_start, 180.0);
//! # Ok::<(), Box<dyn core::error::Error>>(())
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod geometry;
mod state;

pub use geometry::TrackLayout;
pub use state::{Handle, RangeSliderState, SliderEvent};
