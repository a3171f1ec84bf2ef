// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_trigger --heading-base-level=0

//! Understory Trigger: open/close state for tooltips, popovers and menus.
//!
//! A triggered overlay opens and closes in response to interactions on its
//! trigger element, optionally after a delay. [`TriggerStateMachine`] owns
//! that decision:
//!
//! - [`TriggerMode`] picks the interactions that matter: hover, click, focus,
//!   or manual (interactions ignored).
//! - [`TriggerConfig`] adds independent open/close delays and a disabled flag.
//! - [`TriggerPhase`] exposes the transient `Opening`/`Closing` phases that
//!   exist while a delay timer is pending.
//! - Controlled/uncontrolled duality: the open value is either machine-owned
//!   or supplied by the caller, and the machine requests changes either way.
//!
//! The machine never reads a clock. Hosts pass a monotonic timestamp with each
//! event, schedule a wake-up for [`TriggerStateMachine::next_deadline`], and
//! call [`TriggerStateMachine::poll`] when it arrives.
//!
//! ## Hover with an open delay
//!
//! ```rust
//! use understory_trigger::{
//!     TriggerConfig, TriggerEvent, TriggerMode, TriggerPhase, TriggerStateMachine,
//! };
//!
//! let config = TriggerConfig::new(TriggerMode::Hover).with_delay_open(300);
//! let mut tooltip = TriggerStateMachine::new(config);
//!
//! // Pointer enters at t=0: nothing is shown yet.
//! assert_eq!(tooltip.handle(TriggerEvent::PointerEnter, 0), None);
//! assert_eq!(tooltip.phase(), TriggerPhase::Opening);
//! assert_eq!(tooltip.next_deadline(), Some(300));
//!
//! // The delay elapses and the machine asks to open.
//! assert_eq!(tooltip.poll(300), Some(true));
//! assert!(tooltip.is_open());
//! ```
//!
//! ## Controlled usage
//!
//! ```rust
//! use understory_trigger::{TriggerConfig, TriggerEvent, TriggerMode, TriggerStateMachine};
//!
//! let mut menu = TriggerStateMachine::new(TriggerConfig::new(TriggerMode::Click));
//! menu.set_controlled(Some(false));
//!
//! // The click requests an open, but the caller owns the value.
//! assert_eq!(menu.handle(TriggerEvent::Click, 0), Some(true));
//! assert!(!menu.is_open());
//!
//! // Honoring the request is up to the caller.
//! menu.set_controlled(Some(true));
//! assert!(menu.is_open());
//! ```
//!
//! ## Tracing
//!
//! Construct with [`TriggerStateMachine::with_trace`] to observe transitions,
//! timers and requests through a [`TriggerTrace`] sink such as [`TraceLog`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod machine;
pub mod trace;

pub use config::{ParseTriggerModeError, TriggerConfig, TriggerMode};
pub use machine::{TimerKind, TriggerEvent, TriggerPhase, TriggerStateMachine};
pub use trace::{TraceLog, TraceRecord, TransitionCause, TriggerTrace};
