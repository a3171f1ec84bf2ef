// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Coalesces repeated requests so work runs at most once per frame.
///
/// High-frequency sources such as scroll and resize call [`FrameGate::request`]
/// as often as they like. The host calls [`FrameGate::take`] once per frame
/// with a frame identifier; it yields the number of coalesced requests the
/// first time it is called for a frame while requests are pending.
///
/// Requests made after a flush within the same frame stay pending until the
/// next frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: u32,
    last_flushed: Option<u64>,
}

impl FrameGate {
    /// Creates a gate with no pending requests.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: 0,
            last_flushed: None,
        }
    }

    /// Records a request.
    ///
    /// Returns `true` if this is the first request since the last flush, which
    /// is when a host would schedule a frame callback.
    pub fn request(&mut self) -> bool {
        let first = self.pending == 0;
        self.pending = self.pending.saturating_add(1);
        first
    }

    /// Returns `true` if requests are waiting for a flush.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending > 0
    }

    /// Takes the pending requests for `frame`.
    ///
    /// Returns the number of coalesced requests, or `None` if nothing is
    /// pending or this frame has already been flushed.
    pub fn take(&mut self, frame: u64) -> Option<u32> {
        if self.pending == 0 || self.last_flushed == Some(frame) {
            return None;
        }
        self.last_flushed = Some(frame);
        Some(core::mem::take(&mut self.pending))
    }

    /// Drops pending requests without flushing, returning how many there were.
    pub fn discard(&mut self) -> u32 {
        core::mem::take(&mut self.pending)
    }
}
