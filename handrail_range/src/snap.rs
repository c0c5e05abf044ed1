// Copyright 2026 the Handrail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Quantization direction used when a [`RangeModel`](crate::RangeModel) has a
/// non-zero step.
///
/// Both handles share one snap mode. With [`SnapMode::Floor`] the upper
/// handle's value can snap downward even while it is being dragged upward;
/// hosts that find that surprising can opt into [`SnapMode::Nearest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SnapMode {
    /// Snap to the nearest step multiple at or below the value, counting from
    /// the lower bound.
    #[default]
    Floor,
    /// Snap to the closest step multiple, counting from the lower bound.
    ///
    /// Ties round away from the lower bound (standard `round` semantics).
    Nearest,
}
