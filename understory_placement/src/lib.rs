// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: position overlays relative to a trigger element.
//!
//! Tooltips, popovers and menus are anchored to a trigger and must stay inside
//! the visible area. This crate answers one question: given the trigger's
//! bounds, the overlay's size, a requested [`Placement`] and the viewport size,
//! where should the overlay's top-left corner go?
//!
//! - [`Placement`]: twelve named slots, a [`Side`] plus an [`Align`].
//! - [`PlacementRequest`]: placement, offset, auto placement toggle, viewport.
//! - [`resolve`]: the pure placement function, with collision flipping and a
//!   final clamp into the viewport.
//! - [`PlacementResolver`]: a memoizing wrapper for hosts that re-resolve on
//!   every scroll or resize.
//!
//! It does **not** measure anything or touch a scene. Callers are expected to:
//! - Measure the trigger in document coordinates (scroll offsets included).
//! - Measure the overlay size after it has been laid out.
//! - Call [`resolve`] again whenever they observe movement; results are never
//!   cached across frames by the algorithm itself.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_placement::{resolve, Placement, PlacementRequest};
//!
//! let trigger = Rect::from_origin_size((100.0, 100.0), (50.0, 20.0));
//! let overlay = Size::new(60.0, 20.0);
//! let request = PlacementRequest::new(Placement::Top, Size::new(400.0, 400.0))
//!     .unwrap()
//!     .with_offset(4.0)
//!     .unwrap();
//!
//! let result = resolve(trigger, overlay, &request);
//! assert_eq!(result.placement, Placement::Top);
//! assert_eq!((result.left(), result.top()), (95.0, 76.0));
//! ```
//!
//! ## Collision handling
//!
//! With auto placement enabled, the horizontal axis is checked first, then the
//! vertical axis. Each axis is adjusted at most once:
//!
//! - A placement based on that axis flips to the opposite side when it
//!   overflows the edge it points at (`left` → `right`, `top` → `bottom`).
//! - A placement based on the other axis mirrors its `-start`/`-end`
//!   alignment when it overflows the edge that alignment extends toward.
//!   Centered placements are left for the clamp.
//!
//! A flip that lands in the opposite overflow is kept rather than flipped back.
//! The final clamp keeps the overlay inside the viewport whenever it fits.
//! [`resolve_debug`] reports which of these steps fired.
//!
//! This crate is `no_std`.

#![no_std]

mod placement;
mod request;
mod resolve;
mod resolver;

pub use placement::{Align, Axis, ParsePlacementError, Placement, Side};
pub use request::{PlacementError, PlacementRequest};
pub use resolve::{AxisAdjustment, PlacementDebugInfo, PlacementResult, resolve, resolve_debug};
pub use resolver::PlacementResolver;
