// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary with the host that draws and scrolls the items.

use kurbo::{Point, Rect, Size};

/// What the layout core needs to know about the rendering surface.
///
/// Hosts implement this on whatever owns the scroll view. The core never
/// stores a surface; it is passed into each call that needs fresh values.
pub trait RenderSurface {
    /// Number of items currently in the collection.
    fn item_count(&self) -> usize;

    /// Size of the scroll view's viewport.
    fn viewport_size(&self) -> Size;

    /// Current scroll offset in content coordinates.
    fn scroll_offset(&self) -> Point;

    /// Region of content currently shown by the viewport.
    fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(self.scroll_offset(), self.viewport_size())
    }
}

/// A [`RenderSurface`] backed by plain values.
///
/// Useful for tests and for hosts that already hold these numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSnapshot {
    /// Number of items.
    pub item_count: usize,
    /// Viewport size.
    pub viewport: Size,
    /// Scroll offset.
    pub offset: Point,
}

impl SurfaceSnapshot {
    /// Creates a snapshot scrolled to the origin.
    #[must_use]
    pub const fn new(item_count: usize, viewport: Size) -> Self {
        Self {
            item_count,
            viewport,
            offset: Point::ZERO,
        }
    }

    /// Returns a copy scrolled to `offset`.
    #[must_use]
    pub const fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }
}

impl RenderSurface for SurfaceSnapshot {
    fn item_count(&self) -> usize {
        self.item_count
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn scroll_offset(&self) -> Point {
        self.offset
    }
}
