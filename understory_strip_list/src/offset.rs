// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Remapping scroll offsets between the strip and list coordinate systems.
//!
//! The two modes scroll along different axes, so an offset only carries over
//! as an item position: the offset in the mode being left is divided by that
//! mode's item length, then multiplied by the item length of the mode being
//! entered. The result is clamped so the viewport does not run past the end of
//! the destination content.

use kurbo::{Point, Rect, Size};

use crate::{LayoutConfig, Mode, ModeTransition};

/// Content extents of both modes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentExtents {
    /// Horizontal content extent of the strip.
    pub strip: f64,
    /// Vertical content extent of the list.
    pub list: f64,
}

impl ContentExtents {
    /// Creates a pair of extents.
    #[must_use]
    pub const fn new(strip: f64, list: f64) -> Self {
        Self { strip, list }
    }

    /// Extent of the given mode.
    #[must_use]
    pub const fn for_mode(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Strip => self.strip,
            Mode::List => self.list,
        }
    }
}

/// Maps `current_offset`, measured along the primary axis of the mode being
/// left, to the equivalent offset along the primary axis of the mode being
/// entered.
///
/// If the mapped offset would put the end of the viewport at or beyond the end
/// of the destination content, it is pulled back to
/// `to_extent - viewport_primary_extent`. There is no lower clamp: when the
/// destination content is shorter than the viewport the result is negative,
/// which keeps the end of the viewport aligned with the end of the content.
#[must_use]
pub fn map_offset(
    transition: ModeTransition,
    current_offset: f64,
    extents: ContentExtents,
    viewport_primary_extent: f64,
    config: &LayoutConfig,
) -> f64 {
    debug_assert!(
        current_offset.is_finite(),
        "scroll offsets must be finite; got {current_offset:?}"
    );
    let from_length = config.item_length(transition.from());
    let to_length = config.item_length(transition.to());
    let to_extent = extents.for_mode(transition.to());
    debug_assert!(
        from_length > 0.0,
        "item length in {} must be positive; got {from_length:?}",
        transition.from()
    );

    let index = if from_length > 0.0 {
        current_offset / from_length
    } else {
        0.0
    };
    let mapped = index * to_length;

    if mapped + viewport_primary_extent >= to_extent {
        to_extent - viewport_primary_extent
    } else {
        mapped
    }
}

/// Two-dimensional form of [`map_offset`].
///
/// Reads the outgoing mode's primary coordinate from `offset` and returns a
/// point whose only non-zero coordinate lies on the incoming mode's primary
/// axis.
#[must_use]
pub fn map_offset_point(
    transition: ModeTransition,
    offset: Point,
    extents: ContentExtents,
    viewport: Size,
    config: &LayoutConfig,
) -> Point {
    let from_axis = transition.from().primary_axis();
    let to_axis = transition.to().primary_axis();
    let mapped = map_offset(
        transition,
        from_axis.of_point(offset),
        extents,
        to_axis.of_size(viewport),
        config,
    );
    to_axis.point(mapped)
}

/// Moves `visible` to the remapped origin in the incoming mode, keeping its size.
#[must_use]
pub fn map_visible_region(
    transition: ModeTransition,
    visible: Rect,
    extents: ContentExtents,
    config: &LayoutConfig,
) -> Rect {
    let origin = map_offset_point(transition, visible.origin(), extents, visible.size(), config);
    Rect::from_origin_size(origin, visible.size())
}
