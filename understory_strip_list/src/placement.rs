// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item placement snapshots.

use kurbo::{Affine, Point, Rect};

use crate::Axis;

/// Where one item sits and how it is drawn.
///
/// Placements are plain values: every query returns fresh copies, so scaling
/// one result never leaks into placements held elsewhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemPlacement {
    /// Item index, equal to its position in the layout.
    pub index: usize,
    /// Unscaled frame in content coordinates.
    pub frame: Rect,
    /// Uniform scale applied about the frame's center, in `(0, 1]`.
    pub scale: f64,
    /// Paint order; not used for placement.
    pub z_index: i32,
}

impl ItemPlacement {
    /// Creates an unscaled placement.
    #[must_use]
    pub const fn new(index: usize, frame: Rect) -> Self {
        Self {
            index,
            frame,
            scale: 1.0,
            z_index: 0,
        }
    }

    /// Returns a copy with the given scale.
    #[must_use]
    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Center of the unscaled frame.
    #[must_use]
    pub fn center(&self) -> Point {
        self.frame.center()
    }

    /// Length of the frame along `axis`.
    #[must_use]
    pub fn primary_extent(&self, axis: Axis) -> f64 {
        axis.rect_extent(self.frame)
    }

    /// Transform to apply to the item's content, scaling about its center.
    #[must_use]
    pub fn transform(&self) -> Affine {
        let c = self.center().to_vec2();
        Affine::translate(c) * Affine::scale(self.scale) * Affine::translate(-c)
    }

    /// The frame after applying [`Self::scale`] about its center.
    #[must_use]
    pub fn scaled_frame(&self) -> Rect {
        Rect::from_center_size(self.center(), self.frame.size() * self.scale)
    }
}
