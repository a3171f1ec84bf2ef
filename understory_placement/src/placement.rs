// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// The axis along which an overlay is offset from its trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right of the trigger.
    Horizontal,
    /// Above/below the trigger.
    Vertical,
}

/// Which side of the trigger the overlay sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Above the trigger.
    #[default]
    Top,
    /// Below the trigger.
    Bottom,
    /// Left of the trigger.
    Left,
    /// Right of the trigger.
    Right,
}

impl Side {
    /// The base axis of this side.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// The side across the trigger from this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// How the overlay lines up with the trigger along the cross axis.
///
/// For [`Side::Top`]/[`Side::Bottom`], `Start` is flush with the trigger's left
/// edge and `End` with its right edge. For [`Side::Left`]/[`Side::Right`],
/// `Start` is flush with the top edge and `End` with the bottom edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Align {
    /// Centered on the trigger.
    #[default]
    Center,
    /// Flush with the trigger's leading edge.
    Start,
    /// Flush with the trigger's trailing edge.
    End,
}

impl Align {
    /// Swaps `Start` and `End`; `Center` is unchanged.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Center => Self::Center,
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

/// One of the twelve named overlay placements.
///
/// A placement is a [`Side`] plus an [`Align`]. Its kebab-case name
/// (`"top"`, `"bottom-start"`, `"left-end"`, ...) is available through
/// [`Display`](fmt::Display) and [`FromStr`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    /// Above, centered.
    #[default]
    Top,
    /// Above, flush left.
    TopStart,
    /// Above, flush right.
    TopEnd,
    /// Below, centered.
    Bottom,
    /// Below, flush left.
    BottomStart,
    /// Below, flush right.
    BottomEnd,
    /// Left, centered.
    Left,
    /// Left, flush top.
    LeftStart,
    /// Left, flush bottom.
    LeftEnd,
    /// Right, centered.
    Right,
    /// Right, flush top.
    RightStart,
    /// Right, flush bottom.
    RightEnd,
}

impl Placement {
    /// All placements, grouped by side.
    pub const ALL: [Self; 12] = [
        Self::Top,
        Self::TopStart,
        Self::TopEnd,
        Self::Bottom,
        Self::BottomStart,
        Self::BottomEnd,
        Self::Left,
        Self::LeftStart,
        Self::LeftEnd,
        Self::Right,
        Self::RightStart,
        Self::RightEnd,
    ];

    /// Builds a placement from its side and alignment.
    #[must_use]
    pub const fn new(side: Side, align: Align) -> Self {
        match (side, align) {
            (Side::Top, Align::Center) => Self::Top,
            (Side::Top, Align::Start) => Self::TopStart,
            (Side::Top, Align::End) => Self::TopEnd,
            (Side::Bottom, Align::Center) => Self::Bottom,
            (Side::Bottom, Align::Start) => Self::BottomStart,
            (Side::Bottom, Align::End) => Self::BottomEnd,
            (Side::Left, Align::Center) => Self::Left,
            (Side::Left, Align::Start) => Self::LeftStart,
            (Side::Left, Align::End) => Self::LeftEnd,
            (Side::Right, Align::Center) => Self::Right,
            (Side::Right, Align::Start) => Self::RightStart,
            (Side::Right, Align::End) => Self::RightEnd,
        }
    }

    /// The side of the trigger this placement sits on.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Self::Top | Self::TopStart | Self::TopEnd => Side::Top,
            Self::Bottom | Self::BottomStart | Self::BottomEnd => Side::Bottom,
            Self::Left | Self::LeftStart | Self::LeftEnd => Side::Left,
            Self::Right | Self::RightStart | Self::RightEnd => Side::Right,
        }
    }

    /// The cross-axis alignment of this placement.
    #[must_use]
    pub const fn align(self) -> Align {
        match self {
            Self::Top | Self::Bottom | Self::Left | Self::Right => Align::Center,
            Self::TopStart | Self::BottomStart | Self::LeftStart | Self::RightStart => {
                Align::Start
            }
            Self::TopEnd | Self::BottomEnd | Self::LeftEnd | Self::RightEnd => Align::End,
        }
    }

    /// The base axis: vertical for top/bottom, horizontal for left/right.
    #[must_use]
    pub const fn axis(self) -> Axis {
        self.side().axis()
    }

    /// Same alignment on the opposite side.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self::new(self.side().opposite(), self.align())
    }

    /// Same side with `-start` and `-end` swapped.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self::new(self.side(), self.align().mirrored())
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.side().name())?;
        match self.align() {
            Align::Center => Ok(()),
            Align::Start => f.write_str("-start"),
            Align::End => f.write_str("-end"),
        }
    }
}

/// Error returned when parsing an unknown placement name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsePlacementError;

impl fmt::Display for ParsePlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown placement name")
    }
}

impl core::error::Error for ParsePlacementError {}

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (side, align) = match s.split_once('-') {
            Some((side, "start")) => (side, Align::Start),
            Some((side, "end")) => (side, Align::End),
            Some(_) => return Err(ParsePlacementError),
            None => (s, Align::Center),
        };
        let side = match side {
            "top" => Side::Top,
            "bottom" => Side::Bottom,
            "left" => Side::Left,
            "right" => Side::Right,
            _ => return Err(ParsePlacementError),
        };
        Ok(Self::new(side, align))
    }
}
