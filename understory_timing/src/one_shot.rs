// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A single cancellable timer slot carrying a payload.
///
/// At most one timer is pending at a time. Arming while a timer is pending
/// cancels the old one and hands its payload back, so owners never have to
/// reconcile two timers firing in an unknown order.
///
/// Dropping a `OneShot` drops the pending payload; there is nothing external
/// to unregister.
#[derive(Clone, Debug)]
pub struct OneShot<T> {
    pending: Option<Pending<T>>,
    armed_count: u64,
}

#[derive(Clone, Debug)]
struct Pending<T> {
    deadline: u64,
    payload: T,
}

impl<T> Default for OneShot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OneShot<T> {
    /// Creates an idle timer slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: None,
            armed_count: 0,
        }
    }

    /// Arms the timer to fire `delay` units after `now`.
    ///
    /// Returns the payload of the timer this one superseded, if any.
    pub fn arm(&mut self, now: u64, delay: u64, payload: T) -> Option<T> {
        self.arm_at(now.saturating_add(delay), payload)
    }

    /// Arms the timer to fire at an absolute `deadline`.
    ///
    /// Returns the payload of the timer this one superseded, if any.
    pub fn arm_at(&mut self, deadline: u64, payload: T) -> Option<T> {
        self.armed_count = self.armed_count.wrapping_add(1);
        self.pending
            .replace(Pending { deadline, payload })
            .map(|p| p.payload)
    }

    /// Cancels the pending timer, returning its payload.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.payload)
    }

    /// Fires the pending timer if `now` has reached its deadline.
    ///
    /// A fired timer is disarmed.
    pub fn poll(&mut self, now: u64) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.cancel(),
            _ => None,
        }
    }

    /// Returns `true` while a timer is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the deadline of the pending timer.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Returns the payload of the pending timer.
    #[must_use]
    pub fn payload(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.payload)
    }

    /// Number of times this slot has been armed over its lifetime.
    #[must_use]
    pub fn armed_count(&self) -> u64 {
        self.armed_count
    }
}
