// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable constants shared by the layout engines, the offset mapper, and the
//! edge-shrink transform.

use kurbo::Size;

use crate::Mode;

/// Geometry and shrink parameters.
///
/// The defaults reproduce the reference look: 100×50 strip items, 50-unit list
/// rows, and a `1 - d^1.1 / 200` shrink that starts 50 units inside either
/// edge of the visible region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Size of every item in [`Mode::Strip`].
    pub strip_item_size: Size,
    /// Height of every row in [`Mode::List`]; row width follows the viewport.
    pub list_item_height: f64,
    /// Distance from either visible edge at which items start to shrink.
    pub shrink_cutoff: f64,
    /// How far past either visible edge an item center may be and still shrink.
    pub edge_padding: f64,
    /// Exponent applied to the distance past the cutoff.
    pub shrink_exponent: f64,
    /// Divisor applied after the exponent.
    pub shrink_divisor: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            strip_item_size: Size::new(100.0, 50.0),
            list_item_height: 50.0,
            shrink_cutoff: 50.0,
            edge_padding: 50.0,
            shrink_exponent: 1.1,
            shrink_divisor: 200.0,
        }
    }
}

impl LayoutConfig {
    /// Sets the strip item size.
    #[must_use]
    pub fn with_strip_item_size(mut self, size: Size) -> Self {
        debug_assert!(
            size.width > 0.0 && size.height > 0.0,
            "strip item size must be positive; got {size:?}"
        );
        self.strip_item_size = size;
        self
    }

    /// Sets the list row height.
    #[must_use]
    pub fn with_list_item_height(mut self, height: f64) -> Self {
        debug_assert!(
            height > 0.0,
            "list item height must be positive; got {height:?}"
        );
        self.list_item_height = height;
        self
    }

    /// Sets the shrink cutoff distance.
    #[must_use]
    pub fn with_shrink_cutoff(mut self, cutoff: f64) -> Self {
        self.shrink_cutoff = cutoff;
        self
    }

    /// Sets the padding beyond the visible edges.
    #[must_use]
    pub fn with_edge_padding(mut self, padding: f64) -> Self {
        self.edge_padding = padding;
        self
    }

    /// Sets the shrink curve as `1 - d^exponent / divisor`.
    #[must_use]
    pub fn with_shrink_curve(mut self, exponent: f64, divisor: f64) -> Self {
        debug_assert!(
            divisor > 0.0,
            "shrink divisor must be positive; got {divisor:?}"
        );
        self.shrink_exponent = exponent;
        self.shrink_divisor = divisor;
        self
    }

    /// Length of one item along `mode`'s primary axis.
    ///
    /// This is the unit used to convert a scroll offset into an item position
    /// when moving between modes.
    #[must_use]
    pub fn item_length(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Strip => self.strip_item_size.width,
            Mode::List => self.list_item_height,
        }
    }

    /// Size of one item in `mode` for a viewport of the given size.
    #[must_use]
    pub fn item_size(&self, mode: Mode, viewport: Size) -> Size {
        match mode {
            Mode::Strip => self.strip_item_size,
            Mode::List => Size::new(viewport.width, self.list_item_height),
        }
    }
}
