// Copyright 2026 the Handrail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-session state machine for a dual-handle slider.
//!
//! ## Usage
//!
//! 1) On pointer-down over a handle's hit region, call
//!    [`RangeSliderState::on_down`] with that handle.
//! 2) On each pointer-move, call [`RangeSliderState::on_move`] with the
//!    caller-owned interval, the pointer's offset along the track, and the
//!    track's pixel length.
//! 3) On pointer-up, call [`RangeSliderState::on_up`].
//!
//! Each call returns at most one [`SliderEvent`] for the host to relay into
//! its own change/editing callbacks.
//!
//! ## Minimal example
//!
//! ```
//! use handrail_range::{Interval, RangeModel};
//! use handrail_slider::{Handle, RangeSliderState, SliderEvent};
//!
//! let model = RangeModel::new(0.0, 100.0, 0.0).unwrap();
//! let mut slider = RangeSliderState::new(model);
//! let mut interval = Interval::new(20.0, 80.0);
//!
//! // Pointer-down on the lower handle starts editing.
//! let started = slider.on_down(Handle::Lower);
//! assert_eq!(started, Some(SliderEvent::EditingChanged(true)));
//!
//! // Pointer at x = 50 on a 200px track maps to value 25.
//! let moved = slider.on_move(&mut interval, 50.0, 200.0);
//! assert_eq!(moved, Some(SliderEvent::ValueChanged(interval)));
//! assert_eq!(interval, Interval::new(25.0, 80.0));
//!
//! // Pointer-up ends editing.
//! let ended = slider.on_up();
//! assert_eq!(ended, Some(SliderEvent::EditingChanged(false)));
//! ```

use handrail_range::{Interval, RangeModel};
use kurbo::Point;

/// One endpoint of the selected interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handle {
    /// The handle controlling the lower endpoint.
    Lower,
    /// The handle controlling the upper endpoint.
    Upper,
}

/// Transition event produced by a drag-session update.
///
/// The host relays these into whatever notification mechanism it uses:
/// bound state, callbacks, or a message queue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderEvent {
    /// A drag session started (`true`) or ended (`false`).
    EditingChanged(bool),
    /// The committed interval changed during a drag.
    ValueChanged(Interval),
}

/// Interaction state for one dual-handle slider.
///
/// Bundles the immutable [`RangeModel`] with the per-handle drag lifecycle
/// (`Idle -> Dragging -> Idle`). At most one handle is active at a time:
/// pointer events are exclusive to whichever handle's hit region captured
/// them, so there is no concurrent-drag path.
///
/// The selected interval stays caller-owned; [`Self::on_move`] commits the
/// constrained update into the `&mut Interval` the caller passes in.
#[derive(Clone, Copy, Debug)]
pub struct RangeSliderState {
    model: RangeModel,
    active: Option<Handle>,
}

impl RangeSliderState {
    /// Creates interaction state for the given model, with no active drag.
    #[must_use]
    pub fn new(model: RangeModel) -> Self {
        Self {
            model,
            active: None,
        }
    }

    /// Returns the underlying range model.
    #[must_use]
    pub fn model(&self) -> &RangeModel {
        &self.model
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Returns the handle currently being dragged, if any.
    #[must_use]
    pub fn active_handle(&self) -> Option<Handle> {
        self.active
    }

    /// Starts a drag session on `handle`.
    ///
    /// Returns `EditingChanged(true)` on the idle-to-dragging transition. A
    /// redundant down while already dragging retargets the active handle
    /// without notifying again.
    pub fn on_down(&mut self, handle: Handle) -> Option<SliderEvent> {
        let was_idle = self.active.is_none();
        self.active = Some(handle);
        was_idle.then_some(SliderEvent::EditingChanged(true))
    }

    /// Processes a pointer-move at `offset` along a track of `track_length`
    /// pixels, committing the constrained update into `interval`.
    ///
    /// Returns `ValueChanged` with the committed interval. Returns `None` and
    /// leaves `interval` untouched when no drag is active, or when the track
    /// has no usable layout yet (`track_length <= 0`); the event is simply
    /// skipped.
    pub fn on_move(
        &mut self,
        interval: &mut Interval,
        offset: f64,
        track_length: f64,
    ) -> Option<SliderEvent> {
        let handle = self.active?;
        let raw = self.model.position_to_value(offset, track_length).ok()?;
        *interval = match handle {
            Handle::Lower => self.model.update_lower(*interval, raw),
            Handle::Upper => self.model.update_upper(*interval, raw),
        };
        Some(SliderEvent::ValueChanged(*interval))
    }

    /// Convenience form of [`Self::on_move`] taking a pointer [`Point`].
    ///
    /// Uses only `pt.x`; the track is horizontal and the Y coordinate carries
    /// no information for the value mapping.
    pub fn on_move_point(
        &mut self,
        interval: &mut Interval,
        pt: Point,
        track_length: f64,
    ) -> Option<SliderEvent> {
        self.on_move(interval, pt.x, track_length)
    }

    /// Ends the active drag session.
    ///
    /// Returns `EditingChanged(false)` on the dragging-to-idle transition; a
    /// stray up while idle returns `None`.
    pub fn on_up(&mut self) -> Option<SliderEvent> {
        self.active
            .take()
            .map(|_| SliderEvent::EditingChanged(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_slider() -> RangeSliderState {
        RangeSliderState::new(RangeModel::unit())
    }

    #[test]
    fn new_state_is_idle() {
        let slider = unit_slider();
        assert!(!slider.is_dragging());
        assert_eq!(slider.active_handle(), None);
    }

    #[test]
    fn down_starts_editing_once() {
        let mut slider = unit_slider();

        assert_eq!(
            slider.on_down(Handle::Lower),
            Some(SliderEvent::EditingChanged(true))
        );
        assert!(slider.is_dragging());
        assert_eq!(slider.active_handle(), Some(Handle::Lower));

        // Redundant down retargets without re-notifying.
        assert_eq!(slider.on_down(Handle::Upper), None);
        assert_eq!(slider.active_handle(), Some(Handle::Upper));
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut slider = unit_slider();
        let mut interval = Interval::new(0.2, 0.8);

        assert_eq!(slider.on_move(&mut interval, 100.0, 200.0), None);
        assert_eq!(interval, Interval::new(0.2, 0.8));
    }

    #[test]
    fn move_without_layout_is_skipped() {
        let mut slider = unit_slider();
        let mut interval = Interval::new(0.2, 0.8);

        slider.on_down(Handle::Lower);
        assert_eq!(slider.on_move(&mut interval, 100.0, 0.0), None);
        assert_eq!(interval, Interval::new(0.2, 0.8));
        // Still dragging; the next laid-out event succeeds.
        assert!(slider.is_dragging());
        assert!(slider.on_move(&mut interval, 100.0, 200.0).is_some());
    }

    #[test]
    fn move_commits_constrained_update() {
        let mut slider = unit_slider();
        let mut interval = Interval::new(0.2, 0.8);

        slider.on_down(Handle::Upper);
        let event = slider.on_move(&mut interval, 120.0, 200.0);
        assert_eq!(interval, Interval::new(0.2, 0.6));
        assert_eq!(event, Some(SliderEvent::ValueChanged(interval)));
    }

    #[test]
    fn move_point_uses_x_only() {
        let mut slider = unit_slider();
        let mut a = Interval::new(0.2, 0.8);
        let mut b = a;

        slider.on_down(Handle::Lower);
        let from_offset = slider.on_move(&mut a, 60.0, 200.0);
        let from_point = slider.on_move_point(&mut b, Point::new(60.0, 9999.0), 200.0);
        assert_eq!(from_offset, from_point);
        assert_eq!(a, b);
    }

    #[test]
    fn up_ends_editing_and_stray_up_is_ignored() {
        let mut slider = unit_slider();

        assert_eq!(slider.on_up(), None);

        slider.on_down(Handle::Lower);
        assert_eq!(slider.on_up(), Some(SliderEvent::EditingChanged(false)));
        assert!(!slider.is_dragging());
        assert_eq!(slider.on_up(), None);
    }
}
