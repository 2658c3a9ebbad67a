// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_strip_list --heading-base-level=0

//! Understory Strip List: a headless layout core for collections that animate
//! between a horizontal strip and a vertical list.
//!
//! The crate computes geometry only. It places every item for a given
//! [`Mode`], reports the scrollable content extent, remaps scroll offsets from
//! one mode's axis to the other's so a switch reads as continuous, and shrinks
//! items near the leading and trailing edges of the visible region.
//!
//! The core concepts are:
//!
//! - [`ModeLayout`]: a layout strategy for one mode, implemented by
//!   [`StripLayout`] and [`ListLayout`]. Each owns a [`LayoutState`] that is
//!   computed once and kept until [`ModeLayout::reset`] is called.
//! - [`map_offset`]: converts an offset in the outgoing mode to the equivalent
//!   clamped offset in the incoming mode, by way of the item position.
//! - [`compute_scales`]: applies the edge-shrink falloff to a set of
//!   [`ItemPlacement`]s against a visible region.
//! - [`TransitionController`]: owns one engine per mode and drives a switch
//!   from [`TransitionController::begin_transition`] to
//!   [`TransitionController::complete_transition`].
//!
//! This crate deliberately does **not** render, scroll, or animate anything.
//! Host frameworks are responsible for:
//!
//! - Implementing [`RenderSurface`] to report item count, viewport size, and
//!   scroll offset.
//! - Calling [`TransitionController::placements_in`] on every update and
//!   drawing each returned placement with its [`ItemPlacement::transform`].
//! - Animating the scroll to [`TransitionPlan::target_offset`] when a switch
//!   begins, and reporting completion.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_strip_list::{Mode, RenderSurface, SurfaceSnapshot, TransitionController};
//!
//! // Ten items in a 375×300 viewport, scrolled 2.5 items into the strip.
//! let surface = SurfaceSnapshot::new(10, Size::new(375.0, 300.0))
//!     .with_offset(Point::new(250.0, 0.0));
//! let mut controller = TransitionController::default();
//!
//! let visible = controller.placements_in(&surface, surface.visible_rect());
//! assert_eq!(visible.first().map(|p| p.index), Some(2));
//!
//! // Switch to the list: the host animates its scroll to the target offset.
//! let plan = controller.begin_transition(&surface, Mode::List).unwrap();
//! assert_eq!(plan.target_offset, Point::new(0.0, 125.0));
//!
//! // While animating, every row is returned so the host can animate all of them.
//! let moving = controller.placements_in(&surface, surface.visible_rect());
//! assert_eq!(moving.len(), 10);
//!
//! controller.complete_transition();
//! assert!(!controller.is_transitioning());
//! ```
//!
//! All coordinates are logical units in content space, with the content origin
//! at `(0, 0)`.
//! This crate is `no_std` and uses `alloc`; enable the `libm` feature in place
//! of `std` for targets without the standard library.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod geometry;
mod mode;
mod offset;
mod placement;
mod shrink;
mod surface;
mod transition;

pub use config::LayoutConfig;
pub use error::TransitionError;
pub use geometry::{LayoutState, ListLayout, ModeLayout, StripLayout};
pub use mode::{Axis, Mode, ModeTransition};
pub use offset::{ContentExtents, map_offset, map_offset_point, map_visible_region};
pub use placement::ItemPlacement;
pub use shrink::{MIN_SCALE, compute_scales, edge_scale, shrink_visible};
pub use surface::{RenderSurface, SurfaceSnapshot};
pub use transition::{ActiveTransition, TransitionController, TransitionPlan, TransitionState};
