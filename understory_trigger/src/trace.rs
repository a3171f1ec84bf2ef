// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observation hooks for trigger state changes.
//!
//! The state machine does not log. Instead it reports what it does to a
//! [`TriggerTrace`] sink chosen at construction. `()` discards everything;
//! [`TraceLog`] keeps an ordered record, which is handy in tests and
//! inspectors when answering "why did this tooltip open?".

use alloc::vec::Vec;

use crate::{TimerKind, TriggerEvent, TriggerPhase};

/// What caused a phase transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionCause {
    /// An interaction event.
    Event(TriggerEvent),
    /// A delay timer fired.
    Timer(TimerKind),
    /// [`show`](crate::TriggerStateMachine::show) or
    /// [`hide`](crate::TriggerStateMachine::hide).
    Imperative,
    /// The trigger mode changed while a timer was pending.
    ModeChange,
    /// The caller released control and the phase was brought back in line
    /// with the machine-owned open value.
    ControlReleased,
    /// [`teardown`](crate::TriggerStateMachine::teardown).
    Teardown,
}

/// A sink for trigger state machine activity.
pub trait TriggerTrace {
    /// The phase changed.
    fn transition(&mut self, from: TriggerPhase, to: TriggerPhase, cause: TransitionCause);

    /// A delay timer was armed to fire at `deadline`.
    fn timer_armed(&mut self, kind: TimerKind, deadline: u64);

    /// A pending delay timer was cancelled before firing.
    fn timer_cancelled(&mut self, kind: TimerKind);

    /// The machine asked for the open value to become `open`.
    fn open_change_requested(&mut self, open: bool);
}

impl TriggerTrace for () {
    fn transition(&mut self, _: TriggerPhase, _: TriggerPhase, _: TransitionCause) {}

    fn timer_armed(&mut self, _: TimerKind, _: u64) {}

    fn timer_cancelled(&mut self, _: TimerKind) {}

    fn open_change_requested(&mut self, _: bool) {}
}

/// One entry in a [`TraceLog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceRecord {
    /// See [`TriggerTrace::transition`].
    Transition {
        /// Phase before.
        from: TriggerPhase,
        /// Phase after.
        to: TriggerPhase,
        /// Why.
        cause: TransitionCause,
    },
    /// See [`TriggerTrace::timer_armed`].
    TimerArmed {
        /// Which timer.
        kind: TimerKind,
        /// When it fires.
        deadline: u64,
    },
    /// See [`TriggerTrace::timer_cancelled`].
    TimerCancelled(TimerKind),
    /// See [`TriggerTrace::open_change_requested`].
    OpenChangeRequested(bool),
}

/// Records every trace callback in order.
#[derive(Clone, Debug, Default)]
pub struct TraceLog {
    records: Vec<TraceRecord>,
}

impl TraceLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All records so far, oldest first.
    #[must_use]
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Phase transitions only.
    pub fn transitions(&self) -> impl Iterator<Item = (TriggerPhase, TriggerPhase)> + '_ {
        self.records.iter().filter_map(|r| match *r {
            TraceRecord::Transition { from, to, .. } => Some((from, to)),
            _ => None,
        })
    }

    /// Number of timers armed.
    #[must_use]
    pub fn timers_armed(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r, TraceRecord::TimerArmed { .. }))
            .count()
    }

    /// Requested open values, in order.
    pub fn open_requests(&self) -> impl Iterator<Item = bool> + '_ {
        self.records.iter().filter_map(|r| match *r {
            TraceRecord::OpenChangeRequested(open) => Some(open),
            _ => None,
        })
    }

    /// Removes all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl TriggerTrace for TraceLog {
    fn transition(&mut self, from: TriggerPhase, to: TriggerPhase, cause: TransitionCause) {
        self.records.push(TraceRecord::Transition { from, to, cause });
    }

    fn timer_armed(&mut self, kind: TimerKind, deadline: u64) {
        self.records.push(TraceRecord::TimerArmed { kind, deadline });
    }

    fn timer_cancelled(&mut self, kind: TimerKind) {
        self.records.push(TraceRecord::TimerCancelled(kind));
    }

    fn open_change_requested(&mut self, open: bool) {
        self.records.push(TraceRecord::OpenChangeRequested(open));
    }
}
