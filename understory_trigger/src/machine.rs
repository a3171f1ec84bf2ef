// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_timing::OneShot;

use crate::trace::{TransitionCause, TriggerTrace};
use crate::{TriggerConfig, TriggerMode};

/// An interaction the host forwards to the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriggerEvent {
    /// The pointer entered the trigger.
    PointerEnter,
    /// The pointer left the trigger.
    PointerLeave,
    /// The trigger was clicked or activated.
    Click,
    /// The trigger gained keyboard focus.
    Focus,
    /// The trigger lost keyboard focus.
    Blur,
}

/// Interaction phase of a [`TriggerStateMachine`].
///
/// `Opening` and `Closing` only exist while a delay timer is pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TriggerPhase {
    /// Closed, nothing pending.
    #[default]
    Closed,
    /// Closed, waiting for the open delay.
    Opening,
    /// Open, nothing pending.
    Open,
    /// Open, waiting for the close delay.
    Closing,
}

impl TriggerPhase {
    /// Whether the overlay is shown in this phase.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open | Self::Closing)
    }
}

/// Which transition a pending timer completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Completes `Opening` → `Open`.
    Open,
    /// Completes `Closing` → `Closed`.
    Close,
}

/// Open/close state for one triggered overlay.
///
/// The machine tracks an interaction [`TriggerPhase`] and an open value that
/// is either owned by the machine (uncontrolled) or supplied by the caller
/// (controlled, see [`set_controlled`](Self::set_controlled)).
///
/// Methods that can change the open value return `Some(open)` when the machine
/// requests a new value. In uncontrolled mode the request has already been
/// applied; in controlled mode it is advisory and the caller decides whether
/// to feed it back through `set_controlled`.
///
/// Time is supplied by the host. At most one delay timer is pending at a time;
/// the host reads [`next_deadline`](Self::next_deadline) to schedule a wake-up
/// and calls [`poll`](Self::poll) when it arrives.
#[derive(Clone, Debug)]
pub struct TriggerStateMachine<T = ()> {
    config: TriggerConfig,
    phase: TriggerPhase,
    internal_open: bool,
    controlled: Option<bool>,
    timer: OneShot<TimerKind>,
    trace: T,
}

impl TriggerStateMachine {
    /// Creates a closed, uncontrolled machine.
    #[must_use]
    pub fn new(config: TriggerConfig) -> Self {
        Self::with_trace(config, ())
    }
}

impl<T: TriggerTrace> TriggerStateMachine<T> {
    /// Creates a closed, uncontrolled machine reporting to `trace`.
    #[must_use]
    pub fn with_trace(config: TriggerConfig, trace: T) -> Self {
        Self {
            config,
            phase: TriggerPhase::Closed,
            internal_open: false,
            controlled: None,
            timer: OneShot::new(),
            trace,
        }
    }

    /// Sets the initial open value without requesting a change.
    #[must_use]
    pub fn default_open(mut self, open: bool) -> Self {
        self.internal_open = open;
        self.phase = if open {
            TriggerPhase::Open
        } else {
            TriggerPhase::Closed
        };
        self
    }

    /// The effective open value: the controlled value if set, else the
    /// machine's own.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.controlled.unwrap_or(self.internal_open)
    }

    /// The machine-owned open value, used when uncontrolled.
    #[must_use]
    pub fn internal_open(&self) -> bool {
        self.internal_open
    }

    /// The caller-supplied open value, if controlled.
    #[must_use]
    pub fn controlled(&self) -> Option<bool> {
        self.controlled
    }

    /// Makes the open value caller-owned (`Some`) or machine-owned (`None`).
    ///
    /// While controlled, interactions still drive the phase and still return
    /// open-change requests, but [`is_open`](Self::is_open) reports the
    /// controlled value and the machine-owned value is left alone.
    ///
    /// Releasing control (`Some` → `None`) cancels any pending timer and moves
    /// the phase to `Open` or `Closed` to match the machine-owned value, so
    /// the next interaction starts from what is actually shown.
    pub fn set_controlled(&mut self, open: Option<bool>) {
        let released = self.controlled.is_some() && open.is_none();
        self.controlled = open;
        if released {
            self.jump(self.internal_open, TransitionCause::ControlReleased);
        }
    }

    /// The current interaction phase.
    #[must_use]
    pub fn phase(&self) -> TriggerPhase {
        self.phase
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> TriggerConfig {
        self.config
    }

    /// Replaces the configuration.
    ///
    /// A mode change cancels any pending timer and settles the phase
    /// (`Opening` → `Closed`, `Closing` → `Open`). Delay changes apply to the
    /// next timer. Toggling `disabled` never changes the phase.
    pub fn set_config(&mut self, config: TriggerConfig) {
        if config.mode != self.config.mode {
            self.settle(TransitionCause::ModeChange);
        }
        self.config = config;
    }

    /// Changes only the mode. See [`set_config`](Self::set_config).
    pub fn set_mode(&mut self, mode: TriggerMode) {
        self.set_config(TriggerConfig { mode, ..self.config });
    }

    /// Changes only the disabled flag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    /// Deadline of the pending timer, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timer.deadline()
    }

    /// Kind of the pending timer, if any.
    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerKind> {
        self.timer.payload().copied()
    }

    /// The trace sink.
    #[must_use]
    pub fn trace(&self) -> &T {
        &self.trace
    }

    /// The trace sink, mutably.
    pub fn trace_mut(&mut self) -> &mut T {
        &mut self.trace
    }

    /// Feeds an interaction event observed at `now`.
    ///
    /// Events that do not belong to the configured mode are ignored, as is
    /// everything while disabled.
    pub fn handle(&mut self, event: TriggerEvent, now: u64) -> Option<bool> {
        if self.config.disabled {
            return None;
        }
        let cause = TransitionCause::Event(event);
        match (self.config.mode, event) {
            (TriggerMode::Hover, TriggerEvent::PointerEnter)
            | (TriggerMode::Focus, TriggerEvent::Focus) => self.begin_open(now, cause),
            (TriggerMode::Hover, TriggerEvent::PointerLeave)
            | (TriggerMode::Focus, TriggerEvent::Blur) => self.begin_close(now, cause),
            (TriggerMode::Click, TriggerEvent::Click) => {
                let target = !self.is_open();
                self.jump(target, cause);
                Some(self.request(target))
            }
            _ => None,
        }
    }

    /// Fires the pending timer if `now` has reached its deadline.
    ///
    /// Timers fire even while disabled.
    pub fn poll(&mut self, now: u64) -> Option<bool> {
        let kind = self.timer.poll(now)?;
        let cause = TransitionCause::Timer(kind);
        match kind {
            TimerKind::Open => {
                debug_assert_eq!(self.phase, TriggerPhase::Opening, "open timer outside Opening");
                self.transition(TriggerPhase::Open, cause);
                Some(self.request(true))
            }
            TimerKind::Close => {
                debug_assert_eq!(self.phase, TriggerPhase::Closing, "close timer outside Closing");
                self.transition(TriggerPhase::Closed, cause);
                Some(self.request(false))
            }
        }
    }

    /// Opens immediately, in any mode, cancelling any pending timer.
    ///
    /// Requests `true` if the overlay is not currently open.
    pub fn show(&mut self) -> Option<bool> {
        let was_open = self.is_open();
        self.jump(true, TransitionCause::Imperative);
        (!was_open).then(|| self.request(true))
    }

    /// Closes immediately, in any mode, cancelling any pending timer.
    ///
    /// Requests `false` if the overlay is currently open.
    pub fn hide(&mut self) -> Option<bool> {
        let was_open = self.is_open();
        self.jump(false, TransitionCause::Imperative);
        was_open.then(|| self.request(false))
    }

    /// Cancels any pending timer and closes the phase.
    ///
    /// Call when the overlay's owner goes away. No open-change is requested;
    /// the machine-owned value is reset when uncontrolled.
    pub fn teardown(&mut self) {
        self.cancel_timer();
        self.transition(TriggerPhase::Closed, TransitionCause::Teardown);
        if self.controlled.is_none() {
            self.internal_open = false;
        }
    }

    fn begin_open(&mut self, now: u64, cause: TransitionCause) -> Option<bool> {
        match self.phase {
            TriggerPhase::Closing => {
                self.cancel_timer();
                self.transition(TriggerPhase::Open, cause);
                None
            }
            TriggerPhase::Open | TriggerPhase::Opening => None,
            TriggerPhase::Closed if self.config.delay_open > 0 => {
                self.arm(now, self.config.delay_open, TimerKind::Open);
                self.transition(TriggerPhase::Opening, cause);
                None
            }
            TriggerPhase::Closed => {
                self.transition(TriggerPhase::Open, cause);
                Some(self.request(true))
            }
        }
    }

    fn begin_close(&mut self, now: u64, cause: TransitionCause) -> Option<bool> {
        match self.phase {
            TriggerPhase::Opening => {
                self.cancel_timer();
                self.transition(TriggerPhase::Closed, cause);
                None
            }
            TriggerPhase::Closed | TriggerPhase::Closing => None,
            TriggerPhase::Open if self.config.delay_close > 0 => {
                self.arm(now, self.config.delay_close, TimerKind::Close);
                self.transition(TriggerPhase::Closing, cause);
                None
            }
            TriggerPhase::Open => {
                self.transition(TriggerPhase::Closed, cause);
                Some(self.request(false))
            }
        }
    }

    /// Cancels any timer and moves straight to the settled open or closed phase.
    fn jump(&mut self, open: bool, cause: TransitionCause) {
        self.cancel_timer();
        let to = if open {
            TriggerPhase::Open
        } else {
            TriggerPhase::Closed
        };
        self.transition(to, cause);
    }

    /// Cancels any timer and drops a transient phase back where it came from.
    fn settle(&mut self, cause: TransitionCause) {
        if let Some(kind) = self.cancel_timer() {
            let to = match kind {
                TimerKind::Open => TriggerPhase::Closed,
                TimerKind::Close => TriggerPhase::Open,
            };
            self.transition(to, cause);
        }
    }

    fn arm(&mut self, now: u64, delay: u64, kind: TimerKind) {
        if let Some(previous) = self.timer.arm(now, delay, kind) {
            self.trace.timer_cancelled(previous);
        }
        self.trace.timer_armed(kind, now.saturating_add(delay));
    }

    fn cancel_timer(&mut self) -> Option<TimerKind> {
        let kind = self.timer.cancel()?;
        self.trace.timer_cancelled(kind);
        Some(kind)
    }

    fn transition(&mut self, to: TriggerPhase, cause: TransitionCause) {
        let from = self.phase;
        if from != to {
            self.phase = to;
            self.trace.transition(from, to, cause);
        }
    }

    fn request(&mut self, open: bool) -> bool {
        self.trace.open_change_requested(open);
        if self.controlled.is_none() {
            self.internal_open = open;
        }
        open
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{TimerKind, TriggerEvent, TriggerPhase, TriggerStateMachine};
    use crate::trace::{TraceLog, TraceRecord, TransitionCause};
    use crate::{TriggerConfig, TriggerMode};

    fn hover(delay_open: u64, delay_close: u64) -> TriggerStateMachine<TraceLog> {
        TriggerStateMachine::with_trace(
            TriggerConfig::new(TriggerMode::Hover)
                .with_delay_open(delay_open)
                .with_delay_close(delay_close),
            TraceLog::new(),
        )
    }

    #[test]
    fn hover_without_delays_is_immediate() {
        let mut m = hover(0, 0);
        assert_eq!(m.handle(TriggerEvent::PointerEnter, 0), Some(true));
        assert_eq!(m.phase(), TriggerPhase::Open);
        assert!(m.is_open());
        assert_eq!(m.handle(TriggerEvent::PointerLeave, 5), Some(false));
        assert_eq!(m.phase(), TriggerPhase::Closed);
        assert!(!m.is_open());
        assert_eq!(m.trace().timers_armed(), 0);
    }

    #[test]
    fn hover_open_delay() {
        let mut m = hover(300, 0);
        assert_eq!(m.handle(TriggerEvent::PointerEnter, 1_000), None);
        assert_eq!(m.phase(), TriggerPhase::Opening);
        assert!(!m.is_open());
        assert_eq!(m.next_deadline(), Some(1_300));
        assert_eq!(m.pending_timer(), Some(TimerKind::Open));

        assert_eq!(m.poll(1_299), None);
        assert_eq!(m.poll(1_300), Some(true));
        assert_eq!(m.phase(), TriggerPhase::Open);
        assert_eq!(m.next_deadline(), None);
    }

    #[test]
    fn leave_during_open_delay_never_opens() {
        let mut m = hover(300, 0);
        m.handle(TriggerEvent::PointerEnter, 0);
        assert_eq!(m.handle(TriggerEvent::PointerLeave, 100), None);
        assert_eq!(m.phase(), TriggerPhase::Closed);
        assert_eq!(m.poll(400), None);
        assert_eq!(m.phase(), TriggerPhase::Closed);
        assert_eq!(m.trace().open_requests().count(), 0);
        assert!(
            m.trace()
                .records()
                .contains(&TraceRecord::TimerCancelled(TimerKind::Open))
        );
    }

    #[test]
    fn enter_during_close_delay_stays_open() {
        let mut m = hover(0, 200);
        m.handle(TriggerEvent::PointerEnter, 0);
        assert_eq!(m.handle(TriggerEvent::PointerLeave, 10), None);
        assert_eq!(m.phase(), TriggerPhase::Closing);
        assert!(m.is_open());

        assert_eq!(m.handle(TriggerEvent::PointerEnter, 50), None);
        assert_eq!(m.phase(), TriggerPhase::Open);
        assert_eq!(m.poll(500), None);
        assert!(m.is_open());
    }

    #[test]
    fn repeated_enter_keeps_original_deadline() {
        let mut m = hover(300, 0);
        m.handle(TriggerEvent::PointerEnter, 0);
        m.handle(TriggerEvent::PointerEnter, 200);
        assert_eq!(m.next_deadline(), Some(300));
        assert_eq!(m.trace().timers_armed(), 1);
    }

    #[test]
    fn hover_mode_ignores_click_and_focus() {
        let mut m = hover(0, 0);
        assert_eq!(m.handle(TriggerEvent::Click, 0), None);
        assert_eq!(m.handle(TriggerEvent::Focus, 0), None);
        assert_eq!(m.phase(), TriggerPhase::Closed);
        assert!(m.trace().records().is_empty());
    }

    #[test]
    fn focus_mode_mirrors_hover_paths() {
        let mut m = TriggerStateMachine::new(
            TriggerConfig::new(TriggerMode::Focus)
                .with_delay_open(50)
                .with_delay_close(50),
        );
        assert_eq!(m.handle(TriggerEvent::PointerEnter, 0), None);
        assert_eq!(m.phase(), TriggerPhase::Closed);

        m.handle(TriggerEvent::Focus, 0);
        assert_eq!(m.poll(50), Some(true));
        m.handle(TriggerEvent::Blur, 60);
        assert_eq!(m.phase(), TriggerPhase::Closing);
        assert_eq!(m.poll(110), Some(false));
        assert_eq!(m.phase(), TriggerPhase::Closed);
    }

    #[test]
    fn click_toggles_without_delays() {
        let mut m = TriggerStateMachine::new(
            TriggerConfig::new(TriggerMode::Click)
                .with_delay_open(500)
                .with_delay_close(500),
        );
        assert_eq!(m.handle(TriggerEvent::Click, 0), Some(true));
        assert_eq!(m.phase(), TriggerPhase::Open);
        assert_eq!(m.next_deadline(), None);
        assert_eq!(m.handle(TriggerEvent::Click, 1), Some(false));
        assert_eq!(m.phase(), TriggerPhase::Closed);
        assert_eq!(m.handle(TriggerEvent::PointerEnter, 2), None);
    }

    #[test]
    fn manual_mode_ignores_interactions() {
        let mut m = TriggerStateMachine::with_trace(
            TriggerConfig::new(TriggerMode::Manual),
            TraceLog::new(),
        );
        for event in [
            TriggerEvent::PointerEnter,
            TriggerEvent::Click,
            TriggerEvent::Focus,
            TriggerEvent::Blur,
            TriggerEvent::PointerLeave,
        ] {
            assert_eq!(m.handle(event, 0), None);
        }
        assert!(m.trace().records().is_empty());

        m.set_controlled(Some(true));
        assert!(m.is_open());
        assert_eq!(m.phase(), TriggerPhase::Closed);
    }

    #[test]
    fn disabled_is_a_no_op_and_keeps_pending_timers() {
        let mut m = hover(100, 100);
        m.set_disabled(true);
        m.handle(TriggerEvent::PointerEnter, 0);
        m.handle(TriggerEvent::PointerLeave, 10);
        assert!(m.trace().records().is_empty());
        assert_eq!(m.phase(), TriggerPhase::Closed);

        m.set_disabled(false);
        m.handle(TriggerEvent::PointerEnter, 20);
        m.set_disabled(true);
        // Leave is ignored, the open timer survives and fires.
        m.handle(TriggerEvent::PointerLeave, 30);
        assert_eq!(m.poll(120), Some(true));
        assert!(m.is_open());
    }

    #[test]
    fn disabling_does_not_close() {
        let mut m = hover(0, 0);
        m.handle(TriggerEvent::PointerEnter, 0);
        m.set_disabled(true);
        assert!(m.is_open());
        assert_eq!(m.phase(), TriggerPhase::Open);
    }

    #[test]
    fn controlled_value_wins_but_requests_still_flow() {
        let mut m = TriggerStateMachine::with_trace(
            TriggerConfig::new(TriggerMode::Click),
            TraceLog::new(),
        );
        m.set_controlled(Some(false));
        for t in 0..3 {
            assert_eq!(m.handle(TriggerEvent::Click, t), Some(true));
            assert!(!m.is_open());
            assert!(!m.internal_open());
        }
        assert_eq!(m.phase(), TriggerPhase::Open);
        assert_eq!(m.trace().open_requests().collect::<Vec<_>>(), [true; 3]);
    }

    #[test]
    fn releasing_control_restores_internal_value() {
        let mut m = hover(0, 0);
        m.set_controlled(Some(true));
        m.handle(TriggerEvent::PointerEnter, 0);
        assert!(!m.internal_open());
        assert_eq!(m.phase(), TriggerPhase::Open);
        m.set_controlled(None);
        assert!(!m.is_open());
        assert_eq!(m.phase().is_open(), m.is_open());
        assert!(m.trace().records().contains(&TraceRecord::Transition {
            from: TriggerPhase::Open,
            to: TriggerPhase::Closed,
            cause: TransitionCause::ControlReleased,
        }));

        // The next enter opens instead of being swallowed.
        assert_eq!(m.handle(TriggerEvent::PointerEnter, 1), Some(true));
        assert!(m.is_open());
    }

    #[test]
    fn releasing_control_does_not_send_a_stale_close() {
        let mut m = hover(0, 0);
        m.set_controlled(Some(false));
        m.handle(TriggerEvent::PointerEnter, 0);
        m.set_controlled(None);
        assert_eq!(m.phase(), TriggerPhase::Closed);
        assert_eq!(m.handle(TriggerEvent::PointerLeave, 1), None);
    }

    #[test]
    fn releasing_control_cancels_pending_timer() {
        let mut m = hover(200, 0);
        m.set_controlled(Some(true));
        m.handle(TriggerEvent::PointerEnter, 0);
        assert_eq!(m.phase(), TriggerPhase::Opening);
        m.set_controlled(None);
        assert_eq!(m.phase(), TriggerPhase::Closed);
        assert_eq!(m.next_deadline(), None);
        assert_eq!(m.poll(500), None);
    }

    #[test]
    fn switching_between_controlled_values_keeps_phase() {
        let mut m = hover(0, 0);
        m.handle(TriggerEvent::PointerEnter, 0);
        m.set_controlled(Some(false));
        m.set_controlled(Some(true));
        assert_eq!(m.phase(), TriggerPhase::Open);
        assert_eq!(m.trace().transitions().count(), 1);
    }

    #[test]
    fn new_timer_cancels_the_old_one() {
        let mut m = hover(100, 100);
        m.handle(TriggerEvent::PointerEnter, 0);
        m.poll(100);
        m.handle(TriggerEvent::PointerLeave, 150);
        // Closing: the machine holds exactly the close timer.
        assert_eq!(m.pending_timer(), Some(TimerKind::Close));
        assert_eq!(m.next_deadline(), Some(250));
    }

    #[test]
    fn mode_change_settles_transient_phase() {
        let mut m = hover(100, 100);
        m.handle(TriggerEvent::PointerEnter, 0);
        m.set_mode(TriggerMode::Manual);
        assert_eq!(m.phase(), TriggerPhase::Closed);
        assert_eq!(m.next_deadline(), None);
        assert_eq!(m.poll(1_000), None);
        assert!(m.trace().records().contains(&TraceRecord::Transition {
            from: TriggerPhase::Opening,
            to: TriggerPhase::Closed,
            cause: TransitionCause::ModeChange,
        }));

        let mut m = hover(0, 100);
        m.handle(TriggerEvent::PointerEnter, 0);
        m.handle(TriggerEvent::PointerLeave, 1);
        m.set_mode(TriggerMode::Click);
        assert_eq!(m.phase(), TriggerPhase::Open);
        assert!(m.is_open());
    }

    #[test]
    fn show_and_hide_apply_in_any_mode() {
        let mut m = TriggerStateMachine::new(
            TriggerConfig::new(TriggerMode::Manual).with_disabled(true),
        );
        assert_eq!(m.show(), Some(true));
        assert_eq!(m.show(), None);
        assert!(m.is_open());
        assert_eq!(m.hide(), Some(false));
        assert_eq!(m.hide(), None);
        assert!(!m.is_open());
    }

    #[test]
    fn show_cancels_pending_open_timer() {
        let mut m = hover(300, 0);
        m.handle(TriggerEvent::PointerEnter, 0);
        assert_eq!(m.show(), Some(true));
        assert_eq!(m.next_deadline(), None);
        assert_eq!(m.poll(300), None);
    }

    #[test]
    fn teardown_leaves_nothing_pending() {
        let mut m = hover(0, 200);
        m.handle(TriggerEvent::PointerEnter, 0);
        m.handle(TriggerEvent::PointerLeave, 10);
        m.teardown();
        assert_eq!(m.next_deadline(), None);
        assert_eq!(m.phase(), TriggerPhase::Closed);
        assert!(!m.is_open());
        assert_eq!(
            m.trace().records().last(),
            Some(&TraceRecord::Transition {
                from: TriggerPhase::Closing,
                to: TriggerPhase::Closed,
                cause: TransitionCause::Teardown,
            })
        );
    }

    #[test]
    fn default_open_starts_open_without_request() {
        let mut m = hover(0, 0).default_open(true);
        assert!(m.is_open());
        assert!(m.trace().records().is_empty());
        assert_eq!(m.handle(TriggerEvent::PointerLeave, 0), Some(false));
    }
}
