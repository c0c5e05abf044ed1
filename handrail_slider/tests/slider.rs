// Copyright 2026 the Handrail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `handrail_slider` crate.
//!
//! These walk full drag scenarios through `RangeSliderState`, with a focus on
//! how the drag lifecycle, the interval invariant, and the emitted events
//! interact.

use handrail_range::{Interval, RangeModel, SnapMode};
use handrail_slider::{Handle, RangeSliderState, SliderEvent, TrackLayout};

/// Drives a down/moves/up sequence and collects every emitted event.
fn drag(
    slider: &mut RangeSliderState,
    interval: &mut Interval,
    handle: Handle,
    offsets: &[f64],
    track_length: f64,
) -> Vec<SliderEvent> {
    let mut events = Vec::new();
    events.extend(slider.on_down(handle));
    for &offset in offsets {
        events.extend(slider.on_move(interval, offset, track_length));
    }
    events.extend(slider.on_up());
    events
}

#[test]
fn full_drag_emits_editing_and_value_events() {
    let model = RangeModel::new(0.0, 100.0, 0.0).unwrap();
    let mut slider = RangeSliderState::new(model);
    let mut interval = Interval::new(20.0, 80.0);

    let events = drag(
        &mut slider,
        &mut interval,
        Handle::Lower,
        &[100.0, 120.0],
        400.0,
    );

    assert_eq!(
        events,
        vec![
            SliderEvent::EditingChanged(true),
            SliderEvent::ValueChanged(Interval::new(25.0, 80.0)),
            SliderEvent::ValueChanged(Interval::new(30.0, 80.0)),
            SliderEvent::EditingChanged(false),
        ]
    );
    assert_eq!(interval, Interval::new(30.0, 80.0));
    assert!(!slider.is_dragging());
}

#[test]
fn dragging_lower_past_upper_collapses_interval() {
    // Bounds [0, 100], continuous, initial interval (20, 80): dragging the
    // lower handle to the position of value 90 clamps onto the upper handle.
    let model = RangeModel::new(0.0, 100.0, 0.0).unwrap();
    let mut slider = RangeSliderState::new(model);
    let mut interval = Interval::new(20.0, 80.0);

    slider.on_down(Handle::Lower);
    let event = slider.on_move(&mut interval, 360.0, 400.0);

    assert_eq!(interval, Interval::new(80.0, 80.0));
    assert!(interval.is_degenerate());
    assert_eq!(event, Some(SliderEvent::ValueChanged(interval)));
}

#[test]
fn off_track_drags_clamp_to_bounds() {
    let model = RangeModel::unit();
    let mut slider = RangeSliderState::new(model);
    let mut interval = Interval::new(0.3, 0.7);

    // Way past the left edge of the track.
    slider.on_down(Handle::Lower);
    slider.on_move(&mut interval, -5_000.0, 200.0);
    slider.on_up();
    assert_eq!(interval.lo, 0.0);

    // Way past the right edge.
    slider.on_down(Handle::Upper);
    slider.on_move(&mut interval, 5_000.0, 200.0);
    slider.on_up();
    assert_eq!(interval.hi, 1.0);
}

#[test]
fn stepped_drag_snaps_every_move() {
    let model = RangeModel::new(0.0, 10.0, 2.0).unwrap();
    let mut slider = RangeSliderState::new(model);
    let mut interval = Interval::new(0.0, 10.0);

    slider.on_down(Handle::Lower);
    // x = 34 on a 100px track maps to 3.4, which floors to 2.
    slider.on_move(&mut interval, 34.0, 100.0);
    assert_eq!(interval, Interval::new(2.0, 10.0));

    // x = 59 maps to 5.9, floored to 4.
    slider.on_move(&mut interval, 59.0, 100.0);
    assert_eq!(interval, Interval::new(4.0, 10.0));
    slider.on_up();
}

#[test]
fn nearest_snap_mode_rounds_instead_of_flooring() {
    let model = RangeModel::new(0.0, 10.0, 2.0)
        .unwrap()
        .with_snap_mode(SnapMode::Nearest);
    let mut slider = RangeSliderState::new(model);
    let mut interval = Interval::new(0.0, 10.0);

    slider.on_down(Handle::Upper);
    // 5.9 rounds to the multiple 6 rather than flooring to 4.
    slider.on_move(&mut interval, 59.0, 100.0);
    assert_eq!(interval, Interval::new(0.0, 6.0));
    slider.on_up();
}

#[test]
fn events_before_layout_are_skipped_without_ending_drag() {
    let model = RangeModel::unit();
    let mut slider = RangeSliderState::new(model);
    let mut interval = Interval::new(0.2, 0.8);

    slider.on_down(Handle::Lower);
    assert_eq!(slider.on_move(&mut interval, 50.0, 0.0), None);
    assert_eq!(slider.on_move(&mut interval, 50.0, -1.0), None);
    assert_eq!(interval, Interval::new(0.2, 0.8));

    // Layout settles; the same drag session continues.
    let event = slider.on_move(&mut interval, 50.0, 200.0);
    assert_eq!(event, Some(SliderEvent::ValueChanged(Interval::new(0.25, 0.8))));
    assert_eq!(slider.on_up(), Some(SliderEvent::EditingChanged(false)));
}

#[test]
fn alternating_handle_drags_preserve_invariant() {
    let model = RangeModel::new(-50.0, 50.0, 5.0).unwrap();
    let mut slider = RangeSliderState::new(model);
    let mut interval = model.clamp_interval(Interval::new(-20.0, 20.0));

    let offsets = [-300.0, 10.0, 480.0, 250.0, 33.0, 900.0, -17.0, 128.0];
    for (i, &offset) in offsets.iter().enumerate() {
        let handle = if i % 2 == 0 { Handle::Lower } else { Handle::Upper };
        slider.on_down(handle);
        slider.on_move(&mut interval, offset, 500.0);
        slider.on_up();

        assert!(
            model.min() <= interval.lo && interval.lo <= interval.hi && interval.hi <= model.max(),
            "invariant broken after drag {i}: {interval:?}"
        );
    }
}

#[test]
fn layout_tracks_committed_interval() {
    let model = RangeModel::new(0.0, 100.0, 0.0).unwrap();
    let mut slider = RangeSliderState::new(model);
    let mut interval = Interval::new(20.0, 80.0);

    slider.on_down(Handle::Upper);
    slider.on_move(&mut interval, 200.0, 400.0);
    slider.on_up();

    let layout = TrackLayout::compute(slider.model(), interval, 400.0).unwrap();
    assert_eq!(interval, Interval::new(20.0, 50.0));
    assert_eq!(layout.fill_start, 80.0);
    assert_eq!(layout.fill_length, 120.0);
    assert_eq!(layout.upper_center, 200.0);
}
