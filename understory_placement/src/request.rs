// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;

use crate::Placement;

/// Why a [`PlacementRequest`] could not be built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlacementError {
    /// The offset was negative, NaN, or infinite.
    InvalidOffset(f64),
    /// A viewport extent was negative, NaN, or infinite.
    InvalidViewport(Size),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOffset(offset) => {
                write!(f, "offset must be finite and non-negative, got {offset}")
            }
            Self::InvalidViewport(size) => write!(
                f,
                "viewport must be finite and non-negative, got {}x{}",
                size.width, size.height
            ),
        }
    }
}

impl core::error::Error for PlacementError {}

/// Everything [`resolve`](crate::resolve) needs besides the measured geometry.
///
/// Offset and viewport are validated on construction; a request that exists
/// always satisfies `offset >= 0` and has a finite, non-negative viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementRequest {
    placement: Placement,
    offset: f64,
    auto_placement: bool,
    viewport: Size,
}

impl PlacementRequest {
    /// Creates a request with zero offset and auto placement enabled.
    pub fn new(placement: Placement, viewport: Size) -> Result<Self, PlacementError> {
        check_viewport(viewport)?;
        Ok(Self {
            placement,
            offset: 0.0,
            auto_placement: true,
            viewport,
        })
    }

    /// Sets the gap between trigger and overlay along the placement's axis.
    pub fn with_offset(mut self, offset: f64) -> Result<Self, PlacementError> {
        self.set_offset(offset)?;
        Ok(self)
    }

    /// Enables or disables collision flipping.
    #[must_use]
    pub fn with_auto_placement(mut self, auto_placement: bool) -> Self {
        self.auto_placement = auto_placement;
        self
    }

    /// Sets the requested placement.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Updates the offset in place.
    pub fn set_offset(&mut self, offset: f64) -> Result<(), PlacementError> {
        if !offset.is_finite() || offset < 0.0 {
            return Err(PlacementError::InvalidOffset(offset));
        }
        self.offset = offset;
        Ok(())
    }

    /// Updates the viewport in place, typically after a resize.
    pub fn set_viewport(&mut self, viewport: Size) -> Result<(), PlacementError> {
        check_viewport(viewport)?;
        self.viewport = viewport;
        Ok(())
    }

    /// The requested placement.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Gap between trigger and overlay.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Whether collision flipping is enabled.
    #[must_use]
    pub fn auto_placement(&self) -> bool {
        self.auto_placement
    }

    /// Size of the visible area the overlay should stay within.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }
}

fn check_viewport(viewport: Size) -> Result<(), PlacementError> {
    let ok = |v: f64| v.is_finite() && v >= 0.0;
    if ok(viewport.width) && ok(viewport.height) {
        Ok(())
    } else {
        Err(PlacementError::InvalidViewport(viewport))
    }
}
