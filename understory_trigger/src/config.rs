// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// Which interactions open and close the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TriggerMode {
    /// Pointer enter opens, pointer leave closes.
    #[default]
    Hover,
    /// Click toggles, without delays.
    Click,
    /// Focus opens, blur closes.
    Focus,
    /// Interaction events are ignored; the open value comes from the caller.
    Manual,
}

impl TriggerMode {
    const fn name(self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::Click => "click",
            Self::Focus => "focus",
            Self::Manual => "manual",
        }
    }
}

impl fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown trigger mode name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseTriggerModeError;

impl fmt::Display for ParseTriggerModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown trigger mode; expected hover, click, focus, or manual")
    }
}

impl core::error::Error for ParseTriggerModeError {}

impl FromStr for TriggerMode {
    type Err = ParseTriggerModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hover" => Ok(Self::Hover),
            "click" => Ok(Self::Click),
            "focus" => Ok(Self::Focus),
            "manual" => Ok(Self::Manual),
            _ => Err(ParseTriggerModeError),
        }
    }
}

/// Trigger behavior for a [`TriggerStateMachine`](crate::TriggerStateMachine).
///
/// Delays are in the same unit as the timestamps the host passes in,
/// conventionally milliseconds. A delay of zero opens or closes immediately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TriggerConfig {
    /// Which interactions are honored.
    pub mode: TriggerMode,
    /// Delay between an opening interaction and the overlay opening.
    pub delay_open: u64,
    /// Delay between a closing interaction and the overlay closing.
    pub delay_close: u64,
    /// When set, interaction events are ignored.
    ///
    /// Disabling does not close an open overlay and does not cancel a pending
    /// timer.
    pub disabled: bool,
}

impl TriggerConfig {
    /// Creates a config for `mode` with no delays.
    #[must_use]
    pub const fn new(mode: TriggerMode) -> Self {
        Self {
            mode,
            delay_open: 0,
            delay_close: 0,
            disabled: false,
        }
    }

    /// Sets the open delay.
    #[must_use]
    pub const fn with_delay_open(mut self, delay: u64) -> Self {
        self.delay_open = delay;
        self
    }

    /// Sets the close delay.
    #[must_use]
    pub const fn with_delay_close(mut self, delay: u64) -> Self {
        self.delay_close = delay;
        self
    }

    /// Sets the disabled flag.
    #[must_use]
    pub const fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}
