// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orchestration of animated switches between the strip and list layouts.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use tracing::{debug, trace};

use crate::{
    ContentExtents, ItemPlacement, LayoutConfig, LayoutState, ListLayout, Mode, ModeLayout,
    ModeTransition, RenderSurface, StripLayout, TransitionError, map_offset_point,
    map_visible_region, shrink_visible,
};

/// A mode switch that is currently animating.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveTransition {
    /// Which way the switch goes.
    pub transition: ModeTransition,
    /// Scroll offset in the outgoing mode when the switch began.
    pub source_offset: Point,
    /// Scroll offset in the incoming mode the host should animate to.
    pub target_offset: Point,
}

/// Whether a mode switch is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TransitionState {
    /// No switch in flight.
    #[default]
    Idle,
    /// A switch is animating.
    Animating(ActiveTransition),
}

impl TransitionState {
    /// Returns the in-flight transition, if any.
    #[must_use]
    pub const fn active(&self) -> Option<&ActiveTransition> {
        match self {
            Self::Idle => None,
            Self::Animating(active) => Some(active),
        }
    }
}

/// What the host needs to drive an animated mode switch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionPlan {
    /// Which way the switch goes.
    pub transition: ModeTransition,
    /// Scroll offset to animate to, in the incoming mode's coordinates.
    pub target_offset: Point,
    /// Content size of the incoming mode.
    pub content_size: Size,
}

/// Owns one layout engine per mode and switches between them.
///
/// The host asks for placements through [`TransitionController::placements_in`]
/// on its own update cadence. A switch starts with
/// [`TransitionController::begin_transition`] and ends with
/// [`TransitionController::complete_transition`], whether the animation ran to
/// completion or was interrupted.
///
/// While a switch is animating, edge shrinking is measured against the
/// visible region mapped into the incoming mode, so items shrink relative to
/// where the scroll is headed rather than where it came from.
#[derive(Clone, Debug)]
pub struct TransitionController {
    config: LayoutConfig,
    strip: StripLayout,
    list: ListLayout,
    active: Mode,
    state: TransitionState,
}

impl Default for TransitionController {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl TransitionController {
    /// Creates a controller presenting [`Mode::Strip`].
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            strip: StripLayout::new(config),
            list: ListLayout::new(config),
            active: Mode::Strip,
            state: TransitionState::Idle,
        }
    }

    /// Sets the mode presented before any transition has run.
    #[must_use]
    pub fn with_initial_mode(mut self, mode: Mode) -> Self {
        self.active = mode;
        self
    }

    /// Layout parameters shared by both engines.
    #[must_use]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Mode whose engine currently answers placement queries.
    ///
    /// During a transition this is already the incoming mode.
    #[must_use]
    pub const fn active_mode(&self) -> Mode {
        self.active
    }

    /// Current transition state.
    #[must_use]
    pub const fn state(&self) -> &TransitionState {
        &self.state
    }

    /// Returns `true` while a switch is animating.
    #[must_use]
    pub const fn is_transitioning(&self) -> bool {
        matches!(self.state, TransitionState::Animating(_))
    }

    /// Layout engine for `mode`.
    #[must_use]
    pub fn layout(&self, mode: Mode) -> &dyn ModeLayout {
        match mode {
            Mode::Strip => &self.strip,
            Mode::List => &self.list,
        }
    }

    fn layout_mut(&mut self, mode: Mode) -> &mut dyn ModeLayout {
        match mode {
            Mode::Strip => &mut self.strip,
            Mode::List => &mut self.list,
        }
    }

    /// Content extent of `mode` as last prepared.
    #[must_use]
    pub fn content_extent(&self, mode: Mode) -> f64 {
        self.layout(mode).content_extent()
    }

    /// Content size of `mode` as last prepared.
    #[must_use]
    pub fn content_size(&self, mode: Mode) -> Size {
        self.layout(mode).content_size()
    }

    /// Content extents of both modes as last prepared.
    #[must_use]
    pub fn content_extents(&self) -> ContentExtents {
        ContentExtents::new(self.strip.content_extent(), self.list.content_extent())
    }

    /// Prepares the active engine from the surface's item count and viewport.
    ///
    /// Does nothing if the engine is already prepared.
    pub fn prepare(&mut self, surface: &impl RenderSurface) -> &LayoutState {
        let item_count = surface.item_count();
        let viewport = surface.viewport_size();
        let mode = self.active;
        self.layout_mut(mode).prepare(item_count, viewport)
    }

    /// Resets both engines so the next query recomputes placements.
    ///
    /// Call this after the item count or viewport size changes.
    pub fn invalidate(&mut self) {
        self.strip.reset();
        self.list.reset();
    }

    /// Unscaled placement of item `index` in the active mode.
    #[must_use]
    pub fn placement_at(&self, index: usize) -> Option<ItemPlacement> {
        self.layout(self.active).placement(index)
    }

    /// Starts an animated switch to `to`.
    ///
    /// The incoming engine is reset and recomputed, the outgoing engine keeps
    /// whatever it had prepared, and the incoming engine becomes active. The
    /// returned plan carries the scroll offset the host should animate to.
    ///
    /// # Errors
    ///
    /// - [`TransitionError::AlreadyAnimating`] if a switch is still in flight.
    /// - [`TransitionError::AlreadyInMode`] if `to` is already active.
    pub fn begin_transition(
        &mut self,
        surface: &impl RenderSurface,
        to: Mode,
    ) -> Result<TransitionPlan, TransitionError> {
        if let TransitionState::Animating(active) = self.state {
            return Err(TransitionError::AlreadyAnimating {
                transition: active.transition,
            });
        }
        if to == self.active {
            return Err(TransitionError::AlreadyInMode { mode: to });
        }

        let transition = ModeTransition::into_mode(to);
        let item_count = surface.item_count();
        let viewport = surface.viewport_size();

        self.layout_mut(to).reset();
        self.layout_mut(transition.from()).prepare(item_count, viewport);
        self.layout_mut(to).prepare(item_count, viewport);

        let source_offset = surface.scroll_offset();
        let target_offset = map_offset_point(
            transition,
            source_offset,
            self.content_extents(),
            viewport,
            &self.config,
        );

        self.active = to;
        self.state = TransitionState::Animating(ActiveTransition {
            transition,
            source_offset,
            target_offset,
        });

        debug!(
            %transition,
            source_x = source_offset.x,
            source_y = source_offset.y,
            target_x = target_offset.x,
            target_y = target_offset.y,
            "transition began"
        );

        Ok(TransitionPlan {
            transition,
            target_offset,
            content_size: self.content_size(to),
        })
    }

    /// Starts an animated switch to whichever mode is not active.
    ///
    /// # Errors
    ///
    /// See [`TransitionController::begin_transition`].
    pub fn toggle(
        &mut self,
        surface: &impl RenderSurface,
    ) -> Result<TransitionPlan, TransitionError> {
        self.begin_transition(surface, self.active.other())
    }

    /// Ends the in-flight switch, whether it finished or was interrupted.
    ///
    /// Returns the transition that ended, or `None` if none was in flight.
    pub fn complete_transition(&mut self) -> Option<ModeTransition> {
        match core::mem::take(&mut self.state) {
            TransitionState::Idle => None,
            TransitionState::Animating(active) => {
                debug!(transition = %active.transition, "transition completed");
                Some(active.transition)
            }
        }
    }

    /// Scroll offset the host should settle on.
    ///
    /// During a switch this is the remapped offset from the plan; otherwise
    /// `proposed` is returned unchanged.
    #[must_use]
    pub fn target_scroll_offset(&self, proposed: Point) -> Point {
        match self.state {
            TransitionState::Animating(active) => active.target_offset,
            TransitionState::Idle => proposed,
        }
    }

    /// Placements the host should realize for `query`, with edge scales applied.
    ///
    /// When idle, only placements overlapping `query` are returned and shrinking
    /// is measured against the surface's visible rect. During a switch every
    /// placement of the incoming mode is returned and shrinking is measured
    /// against the visible rect mapped into the incoming mode.
    pub fn placements_in(
        &mut self,
        surface: &impl RenderSurface,
        query: Rect,
    ) -> Vec<ItemPlacement> {
        self.prepare(surface);

        let mode = self.active;
        let visible = surface.visible_rect();
        let (visible, transitioning) = match self.state {
            TransitionState::Animating(active) => (
                map_visible_region(
                    active.transition,
                    Rect::from_origin_size(active.source_offset, visible.size()),
                    self.content_extents(),
                    &self.config,
                ),
                true,
            ),
            TransitionState::Idle => (visible, false),
        };

        trace!(
            %mode,
            transitioning,
            visible_x = visible.x0,
            visible_y = visible.y0,
            "placement query"
        );

        shrink_visible(
            mode,
            self.layout(mode).state().placements(),
            query,
            visible,
            transitioning,
            &self.config,
        )
    }
}
