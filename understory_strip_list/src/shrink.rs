// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shrinking items as they approach the leading or trailing visible edge.
//!
//! Items whose centers sit within [`LayoutConfig::shrink_cutoff`] of either
//! edge of the visible region are scaled down, slightly faster than linearly
//! with the distance past the cutoff. The visible region is padded by
//! [`LayoutConfig::edge_padding`] along the primary axis so items keep
//! shrinking as they leave the viewport instead of popping back to full size.

use alloc::vec::Vec;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `powf`
use kurbo::Rect;

use crate::geometry::overlaps;
use crate::{ItemPlacement, LayoutConfig, Mode};

/// Smallest scale ever produced.
pub const MIN_SCALE: f64 = 1e-3;

/// Scale for an item whose center is `distance` units past a shrink cutoff.
///
/// Returns `1.0` at the cutoff and decreases strictly from there.
#[must_use]
pub fn edge_scale(distance: f64, config: &LayoutConfig) -> f64 {
    let distance = distance.max(0.0);
    let scale = 1.0 - distance.powf(config.shrink_exponent) / config.shrink_divisor;
    scale.clamp(MIN_SCALE, 1.0)
}

/// Computes edge scales for `placements` against `visible_region`.
///
/// Every returned placement starts from scale `1.0`, so scales never compound
/// across calls. The input slice is left untouched.
#[must_use]
pub fn compute_scales(
    mode: Mode,
    placements: &[ItemPlacement],
    visible_region: Rect,
    config: &LayoutConfig,
) -> Vec<ItemPlacement> {
    let axis = mode.primary_axis();
    let padded = axis.outset(visible_region, config.edge_padding);
    let region_start = axis.rect_start(visible_region);
    let leading_cutoff = config.shrink_cutoff;
    let trailing_cutoff = axis.rect_extent(visible_region) - config.shrink_cutoff;

    placements
        .iter()
        .map(|placement| {
            let placement = placement.with_scale(1.0);
            let center = placement.center();
            if !padded.contains(center) {
                return placement;
            }
            let center = axis.of_point(center) - region_start;
            let distance = if center <= leading_cutoff {
                Some(leading_cutoff - center)
            } else if center >= trailing_cutoff {
                Some(center - trailing_cutoff)
            } else {
                None
            };
            match distance {
                Some(distance) => placement.with_scale(edge_scale(distance, config)),
                None => placement,
            }
        })
        .collect()
}

/// Selects and scales the placements a renderer should realize for `query`.
///
/// Outside a transition only placements overlapping `query` are returned. During
/// a transition items may be animating across the whole content span, so every
/// placement is returned; callers then pass a `visible_region` already remapped
/// into the incoming mode's coordinates (see [`crate::map_visible_region`]).
#[must_use]
pub fn shrink_visible(
    mode: Mode,
    placements: &[ItemPlacement],
    query: Rect,
    visible_region: Rect,
    transitioning: bool,
    config: &LayoutConfig,
) -> Vec<ItemPlacement> {
    if transitioning {
        compute_scales(mode, placements, visible_region, config)
    } else {
        let selected: Vec<ItemPlacement> = placements
            .iter()
            .filter(|p| overlaps(p.frame, query))
            .copied()
            .collect();
        compute_scales(mode, &selected, visible_region, config)
    }
}
