// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_overlay --heading-base-level=0

//! Understory Overlay: tooltips and popovers anchored to a trigger.
//!
//! This crate ties together the headless pieces an anchored overlay needs:
//!
//! - `understory_trigger` decides **when** the overlay is open.
//! - `understory_placement` decides **where** it goes.
//! - `understory_timing` coalesces re-placement requests to one per frame.
//!
//! [`AnchoredOverlay`] talks to the surrounding UI through [`OverlayHost`]:
//! the host measures geometry on demand, renders positions it is given, and
//! hears about open-change requests. The host forwards interaction events,
//! scroll and resize notifications, timer wake-ups, and frame callbacks.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_overlay::{
//!     AnchoredOverlay, Measurement, OverlayConfig, OverlayHost, RepositionReasons,
//! };
//! use understory_placement::{Placement, PlacementResult};
//! use understory_trigger::{TriggerConfig, TriggerEvent, TriggerMode};
//!
//! struct Host {
//!     position: Option<PlacementResult>,
//! }
//!
//! impl OverlayHost for Host {
//!     fn measure(&mut self) -> Measurement {
//!         Measurement {
//!             trigger: Rect::from_origin_size((100.0, 100.0), (50.0, 20.0)),
//!             overlay: Size::new(60.0, 20.0),
//!             viewport: Size::new(400.0, 400.0),
//!         }
//!     }
//!     fn position_changed(&mut self, result: PlacementResult) {
//!         self.position = Some(result);
//!     }
//!     fn open_changed(&mut self, _open: bool) {}
//! }
//!
//! let config = OverlayConfig::new(Placement::Top, TriggerConfig::new(TriggerMode::Hover))
//!     .with_offset(4.0);
//! let mut tooltip = AnchoredOverlay::new(config).unwrap();
//! let mut host = Host { position: None };
//!
//! tooltip.handle(TriggerEvent::PointerEnter, 0, &mut host);
//! assert!(tooltip.is_open());
//!
//! // Next frame: measure and place.
//! tooltip.flush(1, &mut host);
//! assert_eq!(host.position.map(|p| (p.left(), p.top())), Some((95.0, 76.0)));
//!
//! // Scroll events are coalesced until the next frame.
//! tooltip.request_reposition(RepositionReasons::SCROLL);
//! tooltip.request_reposition(RepositionReasons::SCROLL);
//! assert!(tooltip.needs_frame());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod host;
mod overlay;

pub use host::{Measurement, OverlayHost};
pub use overlay::{AnchoredOverlay, OverlayConfig, OverlayDebugInfo, RepositionReasons};
