// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::{Align, Axis, Placement, PlacementRequest, Side};

/// Where to draw the overlay, and which placement was actually used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementResult {
    /// Top-left corner of the overlay, in the same space as the trigger rect.
    pub origin: Point,
    /// The effective placement after any flip or alignment mirror.
    pub placement: Placement,
}

impl PlacementResult {
    /// Left edge of the overlay.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.origin.x
    }

    /// Top edge of the overlay.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.origin.y
    }

    /// The overlay's bounds given its size.
    #[must_use]
    pub fn bounds(&self, overlay: Size) -> Rect {
        Rect::from_origin_size(self.origin, overlay)
    }
}

/// What collision handling did on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AxisAdjustment {
    /// The placement fit, or could not be improved on this axis.
    #[default]
    None,
    /// The side was swapped for its opposite.
    Flipped,
    /// A `-start`/`-end` alignment was swapped.
    Mirrored,
}

/// Snapshot of a single placement computation, for debugging and inspection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementDebugInfo {
    /// The placement that was asked for.
    pub requested: Placement,
    /// Origin for the requested placement before collision handling.
    pub base_origin: Point,
    /// Adjustment made for horizontal overflow.
    pub horizontal: AxisAdjustment,
    /// Adjustment made for vertical overflow.
    pub vertical: AxisAdjustment,
    /// Whether the final clamp into the viewport moved the overlay.
    pub clamped: bool,
    /// The returned result.
    pub result: PlacementResult,
}

/// Computes where an overlay of size `overlay` goes relative to `trigger`.
///
/// `trigger` is in document coordinates, including scroll offsets. The
/// algorithm:
///
/// 1. Place the overlay on the requested side, separated by the offset and
///    aligned on the cross axis (centered, or flush with the start/end edge).
/// 2. With auto placement on, check the horizontal axis and then the vertical
///    axis. A placement based on the checked axis flips to the opposite side
///    when it overflows the viewport edge it points at; a placement based on
///    the other axis mirrors a `-start`/`-end` alignment when it overflows the
///    edge that alignment extends toward. Each axis adjusts at most once, and a
///    flip that overflows the other edge is kept.
/// 3. Clamp the origin into `[0, viewport - overlay]` on both axes. When the
///    overlay is larger than the viewport it is pinned to the top/left edge.
///
/// No rounding is performed. The function is total: degenerate geometry yields
/// a clamped, possibly overlapping, position.
///
/// ```rust
/// use kurbo::{Rect, Size};
/// use understory_placement::{resolve, Placement, PlacementRequest};
///
/// let trigger = Rect::from_origin_size((10.0, 10.0), (50.0, 20.0));
/// let request = PlacementRequest::new(Placement::Left, Size::new(200.0, 200.0))
///     .unwrap()
///     .with_offset(8.0)
///     .unwrap();
///
/// // No room on the left, so it flips right.
/// let result = resolve(trigger, Size::new(100.0, 30.0), &request);
/// assert_eq!(result.placement, Placement::Right);
/// assert_eq!((result.left(), result.top()), (68.0, 5.0));
/// ```
#[must_use]
pub fn resolve(trigger: Rect, overlay: Size, request: &PlacementRequest) -> PlacementResult {
    resolve_debug(trigger, overlay, request).result
}

/// Same as [`resolve`], also reporting what collision handling did.
#[must_use]
pub fn resolve_debug(
    trigger: Rect,
    overlay: Size,
    request: &PlacementRequest,
) -> PlacementDebugInfo {
    let trigger = trigger.abs();
    let offset = request.offset();
    let viewport = request.viewport();
    let requested = request.placement();

    let mut placement = requested;
    let mut horizontal = AxisAdjustment::None;
    let mut vertical = AxisAdjustment::None;
    if request.auto_placement() {
        for (axis, slot) in [
            (Axis::Horizontal, &mut horizontal),
            (Axis::Vertical, &mut vertical),
        ] {
            let origin = base_origin(trigger, overlay, placement, offset);
            if let Some((next, adjustment)) =
                collide(axis, placement, origin, overlay, viewport)
            {
                placement = next;
                *slot = adjustment;
            }
        }
    }

    let unclamped = base_origin(trigger, overlay, placement, offset);
    let origin = Point::new(
        clamp_span(unclamped.x, overlay.width, viewport.width),
        clamp_span(unclamped.y, overlay.height, viewport.height),
    );

    PlacementDebugInfo {
        requested,
        base_origin: base_origin(trigger, overlay, requested, offset),
        horizontal,
        vertical,
        clamped: origin != unclamped,
        result: PlacementResult { origin, placement },
    }
}

/// Origin of the overlay for `placement`, ignoring the viewport.
fn base_origin(trigger: Rect, overlay: Size, placement: Placement, offset: f64) -> Point {
    let cross = |start: f64, end: f64, extent: f64| match placement.align() {
        Align::Center => start + (end - start - extent) * 0.5,
        Align::Start => start,
        Align::End => end - extent,
    };
    match placement.side() {
        Side::Top => Point::new(
            cross(trigger.x0, trigger.x1, overlay.width),
            trigger.y0 - overlay.height - offset,
        ),
        Side::Bottom => Point::new(
            cross(trigger.x0, trigger.x1, overlay.width),
            trigger.y1 + offset,
        ),
        Side::Left => Point::new(
            trigger.x0 - overlay.width - offset,
            cross(trigger.y0, trigger.y1, overlay.height),
        ),
        Side::Right => Point::new(
            trigger.x1 + offset,
            cross(trigger.y0, trigger.y1, overlay.height),
        ),
    }
}

/// Decides the single adjustment allowed on `axis`, if any.
fn collide(
    axis: Axis,
    placement: Placement,
    origin: Point,
    overlay: Size,
    viewport: Size,
) -> Option<(Placement, AxisAdjustment)> {
    let (start, extent, limit) = match axis {
        Axis::Horizontal => (origin.x, overlay.width, viewport.width),
        Axis::Vertical => (origin.y, overlay.height, viewport.height),
    };
    let before = start < 0.0;
    let after = start + extent > limit;

    if placement.axis() == axis {
        let flip = match placement.side() {
            Side::Left | Side::Top => before,
            Side::Right | Side::Bottom => after,
        };
        flip.then_some((placement.flipped(), AxisAdjustment::Flipped))
    } else {
        let mirror = match placement.align() {
            Align::Center => false,
            Align::Start => after,
            Align::End => before,
        };
        mirror.then_some((placement.mirrored(), AxisAdjustment::Mirrored))
    }
}

/// Clamps `start` into `[0, limit - extent]`, preferring `0` when the span is
/// larger than the limit.
fn clamp_span(start: f64, extent: f64, limit: f64) -> f64 {
    start.min(limit - extent).max(0.0)
}
