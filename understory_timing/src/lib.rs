// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer primitives for UI runtimes.
//!
//! UI state machines frequently need "do this later unless something else
//! happens first" behavior: tooltip open delays, hover intent, debounced
//! re-layout. This crate keeps that behavior headless. It never reads a clock
//! and never spawns anything; the host passes monotonic timestamps in and asks
//! when the next wake-up is needed.
//!
//! - [`OneShot`]: a single cancellable timer slot. Arming it replaces any
//!   pending timer, so an owner can never have two timers racing.
//! - [`FrameGate`]: coalesces bursts of requests (scroll, resize) so that
//!   expensive work runs at most once per frame.
//!
//! Timestamps are plain `u64` values. Callers typically use milliseconds, but
//! nothing here depends on the unit as long as it is used consistently.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_timing::{FrameGate, OneShot};
//!
//! let mut timer = OneShot::new();
//! assert_eq!(timer.arm(0, 300, "open"), None);
//! assert_eq!(timer.deadline(), Some(300));
//!
//! // Not due yet.
//! assert_eq!(timer.poll(100), None);
//! // Due.
//! assert_eq!(timer.poll(300), Some("open"));
//! assert!(!timer.is_armed());
//!
//! let mut gate = FrameGate::new();
//! gate.request();
//! gate.request();
//! // Two requests, one flush.
//! assert_eq!(gate.take(1), Some(2));
//! assert_eq!(gate.take(1), None);
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod frame_gate;
mod one_shot;

pub use frame_gate::FrameGate;
pub use one_shot::OneShot;
