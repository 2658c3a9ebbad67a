// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation modes, their scroll axes, and the transitions between them.

use core::fmt;

use kurbo::{Point, Rect, Size};

/// Axis along which items are laid out and scrolled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis.
    Horizontal,
    /// The Y axis.
    Vertical,
}

impl Axis {
    /// Returns the orthogonal axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Returns the coordinate of `point` along this axis.
    #[must_use]
    pub const fn of_point(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Returns the length of `size` along this axis.
    #[must_use]
    pub const fn of_size(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Returns the start coordinate of `rect` along this axis.
    #[must_use]
    pub fn rect_start(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.x0,
            Self::Vertical => rect.y0,
        }
    }

    /// Returns the length of `rect` along this axis.
    #[must_use]
    pub fn rect_extent(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.width(),
            Self::Vertical => rect.height(),
        }
    }

    /// Builds a point that is `value` along this axis and `0` on the other.
    #[must_use]
    pub const fn point(self, value: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(value, 0.0),
            Self::Vertical => Point::new(0.0, value),
        }
    }

    /// Grows `rect` by `amount` at both ends of this axis.
    #[must_use]
    pub fn outset(self, rect: Rect, amount: f64) -> Rect {
        match self {
            Self::Horizontal => Rect::new(rect.x0 - amount, rect.y0, rect.x1 + amount, rect.y1),
            Self::Vertical => Rect::new(rect.x0, rect.y0 - amount, rect.x1, rect.y1 + amount),
        }
    }
}

/// How the collection is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Fixed-size items in a single horizontal row.
    #[default]
    Strip,
    /// Full-width rows stacked vertically.
    List,
}

impl Mode {
    /// Axis along which this mode lays out and scrolls its items.
    #[must_use]
    pub const fn primary_axis(self) -> Axis {
        match self {
            Self::Strip => Axis::Horizontal,
            Self::List => Axis::Vertical,
        }
    }

    /// Returns the other mode.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Strip => Self::List,
            Self::List => Self::Strip,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strip => f.write_str("strip"),
            Self::List => f.write_str("list"),
        }
    }
}

/// A switch from one [`Mode`] to the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModeTransition {
    /// Strip is being left, list is being entered.
    StripToList,
    /// List is being left, strip is being entered.
    ListToStrip,
}

impl ModeTransition {
    /// Returns the transition from `from` to `to`, or `None` if they are the same mode.
    #[must_use]
    pub const fn between(from: Mode, to: Mode) -> Option<Self> {
        match (from, to) {
            (Mode::Strip, Mode::List) => Some(Self::StripToList),
            (Mode::List, Mode::Strip) => Some(Self::ListToStrip),
            _ => None,
        }
    }

    /// Returns the transition that enters `to`.
    #[must_use]
    pub const fn into_mode(to: Mode) -> Self {
        match to {
            Mode::List => Self::StripToList,
            Mode::Strip => Self::ListToStrip,
        }
    }

    /// Mode being left.
    #[must_use]
    pub const fn from(self) -> Mode {
        match self {
            Self::StripToList => Mode::Strip,
            Self::ListToStrip => Mode::List,
        }
    }

    /// Mode being entered.
    #[must_use]
    pub const fn to(self) -> Mode {
        match self {
            Self::StripToList => Mode::List,
            Self::ListToStrip => Mode::Strip,
        }
    }

    /// Returns the transition running the other way.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::StripToList => Self::ListToStrip,
            Self::ListToStrip => Self::StripToList,
        }
    }
}

impl fmt::Display for ModeTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from(), self.to())
    }
}
