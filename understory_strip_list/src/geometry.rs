// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout engines that assign a frame to every item for one [`Mode`].

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use tracing::debug;

use crate::{ItemPlacement, LayoutConfig, Mode};

/// Placements and content size computed by one layout engine.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutState {
    mode: Mode,
    placements: Vec<ItemPlacement>,
    content_size: Size,
    item_count: usize,
    viewport: Size,
    prepared: bool,
}

impl LayoutState {
    /// Creates an empty, unprepared state for `mode`.
    #[must_use]
    pub const fn new(mode: Mode) -> Self {
        Self {
            mode,
            placements: Vec::new(),
            content_size: Size::ZERO,
            item_count: 0,
            viewport: Size::ZERO,
            prepared: false,
        }
    }

    /// Mode these placements belong to.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Placements in index order.
    #[must_use]
    pub fn placements(&self) -> &[ItemPlacement] {
        &self.placements
    }

    /// Total content size; the primary-axis component is the scrollable extent.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        self.content_size
    }

    /// Total length along the primary axis.
    #[must_use]
    pub const fn content_extent(&self) -> f64 {
        self.mode.primary_axis().of_size(self.content_size)
    }

    /// Item count the placements were computed for.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Viewport size the placements were computed for.
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// Returns `true` once placements have been computed and not yet reset.
    #[must_use]
    pub const fn is_prepared(&self) -> bool {
        self.prepared
    }
}

/// A layout strategy for one presentation mode.
///
/// Implementations own a [`LayoutState`] and compute it at most once between
/// calls to [`ModeLayout::reset`]. Hosts tend to ask for preparation many times
/// per frame, including in the middle of an animation, and those calls must
/// not discard placements that are currently being animated.
pub trait ModeLayout {
    /// Mode this layout presents.
    fn mode(&self) -> Mode;

    /// Layout parameters.
    fn config(&self) -> &LayoutConfig;

    /// Current state, prepared or not.
    fn state(&self) -> &LayoutState;

    /// Mutable access to the current state.
    fn state_mut(&mut self) -> &mut LayoutState;

    /// Size of each item for a viewport of the given size.
    fn item_size(&self, viewport: Size) -> Size {
        self.config().item_size(self.mode(), viewport)
    }

    /// Computes placements for `item_count` items, unless already prepared.
    ///
    /// When the state is already prepared this returns it untouched, even if
    /// `item_count` or `viewport` differ; call [`ModeLayout::reset`] first to
    /// force a recomputation.
    ///
    /// # Panics
    ///
    /// Panics if `viewport` does not have a finite, positive width and height.
    fn prepare(&mut self, item_count: usize, viewport: Size) -> &LayoutState {
        assert!(
            viewport.width.is_finite()
                && viewport.height.is_finite()
                && viewport.width > 0.0
                && viewport.height > 0.0,
            "viewport must have a positive, finite area; got {viewport:?}"
        );
        if !self.state().is_prepared() {
            let mode = self.mode();
            let item_size = self.item_size(viewport);
            lay_out(self.state_mut(), mode, item_count, item_size, viewport);
        }
        self.state()
    }

    /// Clears the prepared flag so the next [`ModeLayout::prepare`] recomputes.
    ///
    /// Existing placements stay queryable until they are overwritten.
    fn reset(&mut self) {
        let state = self.state_mut();
        if state.prepared {
            debug!(mode = %state.mode, "layout reset");
        }
        state.prepared = false;
    }

    /// Returns `true` once placements have been computed and not yet reset.
    fn is_prepared(&self) -> bool {
        self.state().is_prepared()
    }

    /// Total length along the primary axis.
    fn content_extent(&self) -> f64 {
        self.state().content_extent()
    }

    /// Total content size.
    fn content_size(&self) -> Size {
        self.state().content_size()
    }

    /// Unscaled placement of the item at `index`.
    fn placement(&self, index: usize) -> Option<ItemPlacement> {
        self.state().placements().get(index).copied()
    }

    /// Unscaled placements whose frames overlap `rect`.
    fn placements_intersecting(&self, rect: Rect) -> Vec<ItemPlacement> {
        self.state()
            .placements()
            .iter()
            .filter(|p| overlaps(p.frame, rect))
            .copied()
            .collect()
    }
}

/// Horizontal row of fixed-size items.
#[derive(Clone, Debug)]
pub struct StripLayout {
    config: LayoutConfig,
    state: LayoutState,
}

impl StripLayout {
    /// Creates an unprepared strip layout.
    #[must_use]
    pub const fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            state: LayoutState::new(Mode::Strip),
        }
    }
}

impl Default for StripLayout {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl ModeLayout for StripLayout {
    fn mode(&self) -> Mode {
        Mode::Strip
    }

    fn config(&self) -> &LayoutConfig {
        &self.config
    }

    fn state(&self) -> &LayoutState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut LayoutState {
        &mut self.state
    }
}

/// Vertical stack of viewport-wide rows.
#[derive(Clone, Debug)]
pub struct ListLayout {
    config: LayoutConfig,
    state: LayoutState,
}

impl ListLayout {
    /// Creates an unprepared list layout.
    #[must_use]
    pub const fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            state: LayoutState::new(Mode::List),
        }
    }
}

impl Default for ListLayout {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl ModeLayout for ListLayout {
    fn mode(&self) -> Mode {
        Mode::List
    }

    fn config(&self) -> &LayoutConfig {
        &self.config
    }

    fn state(&self) -> &LayoutState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut LayoutState {
        &mut self.state
    }
}

fn lay_out(
    state: &mut LayoutState,
    mode: Mode,
    item_count: usize,
    item_size: Size,
    viewport: Size,
) {
    let axis = mode.primary_axis();
    let step = axis.of_size(item_size);

    state.placements.clear();
    state.placements.reserve(item_count);

    // Each origin is the previous origin plus one item length.
    let mut offset = 0.0;
    for index in 0..item_count {
        let origin: Point = axis.point(offset);
        let frame = Rect::from_origin_size(origin, item_size);
        state.placements.push(ItemPlacement::new(index, frame));
        offset += step;
    }

    state.content_size = match mode {
        Mode::Strip => Size::new(offset, item_size.height),
        Mode::List => Size::new(item_size.width, offset),
    };
    state.item_count = item_count;
    state.viewport = viewport;
    state.prepared = true;

    debug!(%mode, item_count, content_extent = offset, "layout prepared");
}

/// Open-interior overlap test: rectangles that only share an edge do not overlap.
pub(crate) fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Point, Rect, Size};

    use super::{ListLayout, ModeLayout, StripLayout};
    use crate::Mode;

    const VIEWPORT: Size = Size::new(300.0, 300.0);

    #[test]
    fn strip_places_items_left_to_right() {
        let mut strip = StripLayout::default();
        let state = strip.prepare(10, VIEWPORT);
        assert_eq!(state.mode(), Mode::Strip);
        assert_eq!(state.content_extent(), 1000.0);
        assert_eq!(state.content_size(), Size::new(1000.0, 50.0));
        for (i, p) in state.placements().iter().enumerate() {
            assert_eq!(p.index, i);
            assert_eq!(p.frame.origin(), Point::new(100.0 * i as f64, 0.0));
            assert_eq!(p.frame.size(), Size::new(100.0, 50.0));
        }
    }

    #[test]
    fn list_places_rows_top_to_bottom() {
        let mut list = ListLayout::default();
        let state = list.prepare(10, VIEWPORT);
        assert_eq!(state.content_extent(), 500.0);
        assert_eq!(state.content_size(), Size::new(300.0, 500.0));
        let first = state.placements()[0];
        assert_eq!(first.frame, Rect::new(0.0, 0.0, 300.0, 50.0));
        let last = state.placements()[9];
        assert_eq!(last.frame.origin(), Point::new(0.0, 450.0));
    }

    #[test]
    fn zero_items_is_an_empty_layout() {
        let mut strip = StripLayout::default();
        let state = strip.prepare(0, VIEWPORT);
        assert!(state.placements().is_empty());
        assert_eq!(state.content_extent(), 0.0);
        assert!(state.is_prepared());
    }

    #[test]
    fn prepare_is_a_no_op_until_reset() {
        let mut list = ListLayout::default();
        let first = list.prepare(10, VIEWPORT).clone();

        // Different inputs are ignored while prepared.
        let again = list.prepare(3, Size::new(500.0, 300.0)).clone();
        assert_eq!(first, again);

        list.reset();
        assert!(!list.is_prepared());
        // Stale placements remain visible after reset.
        assert_eq!(list.state().placements().len(), 10);

        let fresh = list.prepare(3, Size::new(500.0, 300.0));
        assert_eq!(fresh.placements().len(), 3);
        assert_eq!(fresh.content_size(), Size::new(500.0, 150.0));
    }

    #[test]
    fn intersecting_excludes_edge_contact() {
        let mut strip = StripLayout::default();
        strip.prepare(10, VIEWPORT);
        let hits = strip.placements_intersecting(Rect::new(100.0, 0.0, 300.0, 300.0));
        let indices: Vec<usize> = hits.iter().map(|p| p.index).collect();
        assert_eq!(indices, [1, 2]);

        let hits = strip.placements_intersecting(Rect::new(150.0, 0.0, 250.0, 300.0));
        let indices: Vec<usize> = hits.iter().map(|p| p.index).collect();
        assert_eq!(indices, [1, 2]);
        assert_eq!(strip.placement(9).map(|p| p.frame.x0), Some(900.0));
        assert_eq!(strip.placement(10), None);
    }

    #[test]
    #[should_panic(expected = "viewport must have a positive, finite area")]
    fn zero_area_viewport_is_rejected() {
        let mut strip = StripLayout::default();
        strip.prepare(1, Size::new(0.0, 300.0));
    }
}
