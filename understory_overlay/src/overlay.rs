// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use understory_placement::{
    Placement, PlacementError, PlacementRequest, PlacementResolver, PlacementResult,
};
use understory_timing::FrameGate;
use understory_trigger::{
    TriggerConfig, TriggerEvent, TriggerMode, TriggerPhase, TriggerStateMachine, TriggerTrace,
};

use crate::OverlayHost;

bitflags::bitflags! {
    /// Why a re-placement is pending.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct RepositionReasons: u8 {
        /// The overlay became open.
        const OPENED = 0b0000_0001;
        /// Something scrolled.
        const SCROLL = 0b0000_0010;
        /// The viewport or an ancestor resized.
        const RESIZE = 0b0000_0100;
        /// Placement or offset changed.
        const CONFIG = 0b0000_1000;
    }
}

/// Static configuration for an [`AnchoredOverlay`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayConfig {
    /// Requested placement.
    pub placement: Placement,
    /// Gap between trigger and overlay. Must be finite and non-negative.
    pub offset: f64,
    /// Whether to flip away from viewport edges.
    pub auto_placement: bool,
    /// Open/close behavior.
    pub trigger: TriggerConfig,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self::new(Placement::Top, TriggerConfig::new(TriggerMode::Hover))
    }
}

impl OverlayConfig {
    /// Creates a config with auto placement on and no offset.
    #[must_use]
    pub const fn new(placement: Placement, trigger: TriggerConfig) -> Self {
        Self {
            placement,
            offset: 0.0,
            auto_placement: true,
            trigger,
        }
    }

    /// Sets the offset.
    #[must_use]
    pub const fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Sets auto placement.
    #[must_use]
    pub const fn with_auto_placement(mut self, auto_placement: bool) -> Self {
        self.auto_placement = auto_placement;
        self
    }
}

/// Snapshot of an [`AnchoredOverlay`] for debugging and inspection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayDebugInfo {
    /// Interaction phase.
    pub phase: TriggerPhase,
    /// Effective open value.
    pub open: bool,
    /// Caller-owned open value, if controlled.
    pub controlled: Option<bool>,
    /// Reasons waiting for the next flush.
    pub pending: RepositionReasons,
    /// Number of times the host was asked to measure.
    pub measures: u64,
    /// Last position delivered to the host.
    pub last: Option<PlacementResult>,
    /// Pending trigger timer deadline.
    pub next_deadline: Option<u64>,
}

/// A trigger-anchored overlay: open state, delays and placement together.
///
/// `AnchoredOverlay` drives a [`TriggerStateMachine`] and re-resolves the
/// overlay position through an [`OverlayHost`]:
///
/// - Interaction events, timer polls, `show`/`hide` and controlled value
///   changes forward open-change requests to [`OverlayHost::open_changed`].
/// - Becoming open, scrolling, resizing and configuration changes mark a
///   re-placement as pending, but only while open.
/// - [`flush`](Self::flush) runs once per frame: it measures, resolves, and
///   calls [`OverlayHost::position_changed`] when the position moved.
/// - Closing drops pending re-placements; nothing is measured while closed.
#[derive(Clone, Debug)]
pub struct AnchoredOverlay<T = ()> {
    machine: TriggerStateMachine<T>,
    request: PlacementRequest,
    resolver: PlacementResolver,
    gate: FrameGate,
    pending: RepositionReasons,
    measures: u64,
}

impl AnchoredOverlay {
    /// Creates a closed overlay.
    ///
    /// Fails if the configured offset is negative or not finite.
    pub fn new(config: OverlayConfig) -> Result<Self, PlacementError> {
        Self::with_trace(config, ())
    }
}

impl<T: TriggerTrace> AnchoredOverlay<T> {
    /// Creates a closed overlay whose trigger machine reports to `trace`.
    pub fn with_trace(config: OverlayConfig, trace: T) -> Result<Self, PlacementError> {
        let request = PlacementRequest::new(config.placement, Size::ZERO)?
            .with_offset(config.offset)?
            .with_auto_placement(config.auto_placement);
        Ok(Self {
            machine: TriggerStateMachine::with_trace(config.trigger, trace),
            request,
            resolver: PlacementResolver::new(),
            gate: FrameGate::new(),
            pending: RepositionReasons::empty(),
            measures: 0,
        })
    }

    /// The underlying trigger state machine.
    #[must_use]
    pub fn machine(&self) -> &TriggerStateMachine<T> {
        &self.machine
    }

    /// Effective open value.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.machine.is_open()
    }

    /// Deadline of the pending trigger timer; schedule a [`poll`](Self::poll) for it.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.machine.next_deadline()
    }

    /// Whether a [`flush`](Self::flush) would do work.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.gate.is_pending()
    }

    /// Last position delivered to the host.
    #[must_use]
    pub fn last_position(&self) -> Option<PlacementResult> {
        self.resolver.last()
    }

    /// Forwards an interaction event.
    pub fn handle(&mut self, event: TriggerEvent, now: u64, host: &mut impl OverlayHost) {
        let was_open = self.is_open();
        let request = self.machine.handle(event, now);
        self.after_state_change(was_open, request, host);
    }

    /// Fires a due trigger timer.
    pub fn poll(&mut self, now: u64, host: &mut impl OverlayHost) {
        let was_open = self.is_open();
        let request = self.machine.poll(now);
        self.after_state_change(was_open, request, host);
    }

    /// Opens immediately. See [`TriggerStateMachine::show`].
    pub fn show(&mut self, host: &mut impl OverlayHost) {
        let was_open = self.is_open();
        let request = self.machine.show();
        self.after_state_change(was_open, request, host);
    }

    /// Closes immediately. See [`TriggerStateMachine::hide`].
    pub fn hide(&mut self, host: &mut impl OverlayHost) {
        let was_open = self.is_open();
        let request = self.machine.hide();
        self.after_state_change(was_open, request, host);
    }

    /// Sets or clears the caller-owned open value.
    ///
    /// Becoming open this way schedules a re-placement like any other open.
    pub fn set_controlled(&mut self, open: Option<bool>) {
        let was_open = self.is_open();
        self.machine.set_controlled(open);
        self.track_open(was_open);
    }

    /// Replaces the trigger behavior. See [`TriggerStateMachine::set_config`].
    pub fn set_trigger_config(&mut self, config: TriggerConfig) {
        let was_open = self.is_open();
        self.machine.set_config(config);
        self.track_open(was_open);
    }

    /// Changes the requested placement.
    pub fn set_placement(&mut self, placement: Placement) {
        if placement != self.request.placement() {
            self.request = self.request.with_placement(placement);
            self.request_reposition(RepositionReasons::CONFIG);
        }
    }

    /// Changes the offset, rejecting negative or non-finite values.
    pub fn set_offset(&mut self, offset: f64) -> Result<(), PlacementError> {
        if offset != self.request.offset() {
            self.request.set_offset(offset)?;
            self.request_reposition(RepositionReasons::CONFIG);
        }
        Ok(())
    }

    /// Records that geometry may have moved.
    ///
    /// Ignored while closed. Returns `true` when this is the first pending
    /// request, which is when the host should schedule a frame.
    pub fn request_reposition(&mut self, reasons: RepositionReasons) -> bool {
        if !self.is_open() || reasons.is_empty() {
            return false;
        }
        self.pending |= reasons;
        self.gate.request()
    }

    /// Runs the pending re-placement for `frame`, if any.
    ///
    /// Measures at most once per frame id. Returns the position delivered to
    /// the host, which only happens when it differs from the last one.
    ///
    /// If the host measures a negative or non-finite viewport, nothing is
    /// delivered and the pending reasons are kept for the next frame.
    pub fn flush(&mut self, frame: u64, host: &mut impl OverlayHost) -> Option<PlacementResult> {
        if !self.is_open() {
            self.drop_pending();
            return None;
        }
        self.gate.take(frame)?;
        let reasons = core::mem::take(&mut self.pending);

        let measurement = host.measure();
        self.measures += 1;
        let mut request = self.request;
        if request.set_viewport(measurement.viewport).is_err() {
            self.pending = reasons;
            self.gate.request();
            return None;
        }
        let result =
            self.resolver
                .resolve_changed(measurement.trigger, measurement.overlay, &request)?;
        host.position_changed(result);
        Some(result)
    }

    /// Cancels any pending timer and drops pending re-placements.
    pub fn teardown(&mut self) {
        self.machine.teardown();
        self.drop_pending();
        self.resolver.clear();
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn debug_info(&self) -> OverlayDebugInfo {
        OverlayDebugInfo {
            phase: self.machine.phase(),
            open: self.is_open(),
            controlled: self.machine.controlled(),
            pending: self.pending,
            measures: self.measures,
            last: self.resolver.last(),
            next_deadline: self.machine.next_deadline(),
        }
    }

    fn after_state_change(
        &mut self,
        was_open: bool,
        request: Option<bool>,
        host: &mut impl OverlayHost,
    ) {
        if let Some(open) = request {
            host.open_changed(open);
        }
        self.track_open(was_open);
    }

    fn track_open(&mut self, was_open: bool) {
        match (was_open, self.is_open()) {
            (false, true) => {
                self.request_reposition(RepositionReasons::OPENED);
            }
            (true, false) => {
                self.drop_pending();
                // The next open must deliver a position even if nothing moved.
                self.resolver.clear();
            }
            _ => {}
        }
    }

    fn drop_pending(&mut self) {
        self.gate.discard();
        self.pending = RepositionReasons::empty();
    }
}
