// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_strip_list` crate.
//!
//! The scenario tests walk a host through full strip/list switches. The
//! property tests cover the layout, mapping, and shrink invariants over
//! arbitrary item counts, offsets, and viewports.

use kurbo::{Point, Rect, Size};
use proptest::prelude::*;
use understory_strip_list::{
    Axis, ContentExtents, LayoutConfig, ListLayout, Mode, ModeLayout, ModeTransition,
    RenderSurface, StripLayout, SurfaceSnapshot, TransitionController, compute_scales, map_offset,
};

fn engine(mode: Mode) -> Box<dyn ModeLayout> {
    match mode {
        Mode::Strip => Box::new(StripLayout::default()),
        Mode::List => Box::new(ListLayout::default()),
    }
}

#[test]
fn round_trip_returns_to_the_same_strip_position() {
    let mut controller = TransitionController::default();
    let mut surface =
        SurfaceSnapshot::new(10, Size::new(375.0, 300.0)).with_offset(Point::new(200.0, 0.0));

    let plan = controller.toggle(&surface).unwrap();
    assert_eq!(plan.transition, ModeTransition::StripToList);
    assert_eq!(plan.target_offset, Point::new(0.0, 100.0));
    surface.offset = plan.target_offset;
    assert_eq!(controller.complete_transition(), Some(plan.transition));

    let plan = controller.toggle(&surface).unwrap();
    assert_eq!(plan.transition, ModeTransition::ListToStrip);
    assert_eq!(plan.target_offset, Point::new(200.0, 0.0));
    surface.offset = plan.target_offset;
    controller.complete_transition();

    assert_eq!(controller.active_mode(), Mode::Strip);
    let visible = controller.placements_in(&surface, surface.visible_rect());
    let indices: Vec<usize> = visible.iter().map(|p| p.index).collect();
    assert_eq!(indices, [2, 3, 4, 5]);
}

#[test]
fn interrupted_transition_still_leaves_valid_geometry() {
    let mut controller = TransitionController::default();
    let surface = SurfaceSnapshot::new(10, Size::new(375.0, 300.0));

    controller.begin_transition(&surface, Mode::List).unwrap();
    // The host cancels halfway; completion is reported the same way.
    controller.complete_transition();

    assert_eq!(controller.active_mode(), Mode::List);
    assert_eq!(controller.content_extent(Mode::List), 500.0);
    assert_eq!(
        controller.placement_at(9).map(|p| p.frame),
        Some(Rect::new(0.0, 450.0, 375.0, 500.0))
    );
    // A new transition may start right away.
    assert!(controller.toggle(&surface).is_ok());
}

#[test]
fn empty_collection_switches_without_errors() {
    let mut controller = TransitionController::default();
    let surface = SurfaceSnapshot::new(0, Size::new(375.0, 300.0));
    let plan = controller.begin_transition(&surface, Mode::List).unwrap();
    // No content: the viewport end is pinned to the content end.
    assert_eq!(plan.target_offset, Point::new(0.0, -300.0));
    assert!(controller.placements_in(&surface, surface.visible_rect()).is_empty());
}

#[test]
fn shrink_scenario_ten_units_past_leading_cutoff() {
    let config = LayoutConfig::default();
    let mut strip = StripLayout::default();
    let placements = strip.prepare(10, Size::new(300.0, 300.0)).placements().to_vec();
    // Region starting at 110 puts item 1's center 40 units in.
    let scaled = compute_scales(
        Mode::Strip,
        &placements,
        Rect::new(110.0, 0.0, 410.0, 300.0),
        &config,
    );
    assert!((scaled[1].scale - 0.937).abs() < 1e-3);
}

fn any_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Strip), Just(Mode::List)]
}

fn any_transition() -> impl Strategy<Value = ModeTransition> {
    prop_oneof![
        Just(ModeTransition::StripToList),
        Just(ModeTransition::ListToStrip)
    ]
}

fn any_viewport() -> impl Strategy<Value = Size> {
    (50.0_f64..1200.0, 50.0_f64..1200.0).prop_map(|(w, h)| Size::new(w, h))
}

proptest! {
    #[test]
    fn placements_are_contiguous_and_sum_to_extent(
        mode in any_mode(),
        count in 0_usize..200,
        viewport in any_viewport(),
    ) {
        let mut layout = engine(mode);
        let state = layout.prepare(count, viewport);
        let axis = mode.primary_axis();

        prop_assert_eq!(state.placements().len(), count);
        let mut expected_start = 0.0;
        let mut sum = 0.0;
        for (i, p) in state.placements().iter().enumerate() {
            prop_assert_eq!(p.index, i);
            prop_assert_eq!(axis.rect_start(p.frame), expected_start);
            prop_assert_eq!(axis.cross().rect_start(p.frame), 0.0);
            expected_start += p.primary_extent(axis);
            sum += p.primary_extent(axis);
        }
        prop_assert_eq!(sum, state.content_extent());
    }

    #[test]
    fn prepare_twice_without_reset_is_identical(
        mode in any_mode(),
        count in 0_usize..100,
        viewport in any_viewport(),
        other_count in 0_usize..100,
    ) {
        let mut layout = engine(mode);
        let first = layout.prepare(count, viewport).clone();
        let second = layout.prepare(other_count, viewport).clone();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn map_offset_is_monotonic(
        transition in any_transition(),
        a in 0.0_f64..5000.0,
        b in 0.0_f64..5000.0,
        strip in 0.0_f64..10_000.0,
        list in 0.0_f64..10_000.0,
        viewport in 1.0_f64..1000.0,
    ) {
        let config = LayoutConfig::default();
        let extents = ContentExtents::new(strip, list);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let mapped_lo = map_offset(transition, lo, extents, viewport, &config);
        let mapped_hi = map_offset(transition, hi, extents, viewport, &config);
        prop_assert!(mapped_lo <= mapped_hi);
    }

    #[test]
    fn map_offset_never_overscrolls(
        transition in any_transition(),
        offset in 0.0_f64..5000.0,
        count in 0_usize..100,
        viewport in any_viewport(),
    ) {
        let config = LayoutConfig::default();
        let extents = ContentExtents::new(
            config.item_length(Mode::Strip) * count as f64,
            config.item_length(Mode::List) * count as f64,
        );
        let to = transition.to();
        let viewport_extent = to.primary_axis().of_size(viewport);
        let mapped = map_offset(transition, offset, extents, viewport_extent, &config);
        prop_assert!(mapped + viewport_extent <= extents.for_mode(to) + 1e-9);
    }

    #[test]
    fn scales_stay_in_range(
        mode in any_mode(),
        count in 0_usize..60,
        viewport in any_viewport(),
        scroll in 0.0_f64..3000.0,
    ) {
        let config = LayoutConfig::default();
        let mut layout = engine(mode);
        let placements = layout.prepare(count, viewport).placements().to_vec();
        let axis = mode.primary_axis();
        let visible = Rect::from_origin_size(axis.point(scroll), viewport);
        let padded = axis.outset(visible, config.edge_padding);

        for p in compute_scales(mode, &placements, visible, &config) {
            prop_assert!(p.scale > 0.0 && p.scale <= 1.0);
            if !padded.contains(p.center()) {
                prop_assert_eq!(p.scale, 1.0);
            }
        }
    }

    #[test]
    fn idle_queries_only_return_overlapping_items(
        count in 1_usize..60,
        viewport in any_viewport(),
        scroll in 0.0_f64..3000.0,
    ) {
        let mut controller = TransitionController::default();
        let surface = SurfaceSnapshot::new(count, viewport)
            .with_offset(Axis::Horizontal.point(scroll));
        let query = surface.visible_rect();
        for p in controller.placements_in(&surface, query) {
            prop_assert!(p.frame.x0 < query.x1 && query.x0 < p.frame.x1);
        }
    }
}
