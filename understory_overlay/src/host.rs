// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};
use understory_placement::PlacementResult;

/// Geometry measured by the host for one re-placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    /// Trigger bounds in document coordinates, scroll offsets included.
    pub trigger: Rect,
    /// Laid-out size of the overlay.
    pub overlay: Size,
    /// Size of the visible area.
    pub viewport: Size,
}

/// The embedding contract between an [`AnchoredOverlay`](crate::AnchoredOverlay)
/// and the UI that renders it.
pub trait OverlayHost {
    /// Measures current geometry. Called at most once per flushed frame, and
    /// only while the overlay is open.
    fn measure(&mut self) -> Measurement;

    /// The overlay should be drawn at `result.origin`.
    fn position_changed(&mut self, result: PlacementResult);

    /// The engine wants the open value to become `open`.
    ///
    /// Already applied when uncontrolled; advisory when controlled.
    fn open_changed(&mut self, open: bool);
}

impl<H: OverlayHost + ?Sized> OverlayHost for &mut H {
    fn measure(&mut self) -> Measurement {
        (**self).measure()
    }

    fn position_changed(&mut self, result: PlacementResult) {
        (**self).position_changed(result);
    }

    fn open_changed(&mut self, open: bool) {
        (**self).open_changed(open);
    }
}
