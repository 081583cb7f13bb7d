// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: Common event state managers for UI gestures.
//!
//! This crate provides small, focused state machines for gestures that need
//! stateful tracking across multiple input events. Each module handles a
//! specific interaction pattern:
//!
//! - [`pinch`]: Track the pair of touches forming a pinch and report distance changes
//! - [`tap`]: Recognize double taps from single-touch starts within a time window
//!
//! ## Scope
//!
//! The managers hold only what a gesture needs between events: the pair of
//! touch identifiers with the distance and scale captured at pinch start, or
//! the time of the last unpaired tap. Touch identifiers are generic, so the
//! platform's own id type can be used directly.
//!
//! The crate does not assume any particular UI framework or event system. The
//! managers accept pre-extracted information (touch identifiers and positions,
//! millisecond timestamps) and report what happened; they never change view state
//! themselves. `understory_zoom_gesture` combines them into a
//! complete pinch/wheel zoom controller.
//!
//! ## Usage Patterns
//!
//! ### Pinch Sessions
//!
//! Use [`pinch::PinchSession`] to follow a two-finger pinch:
//!
//! ```rust
//! # #[cfg(feature = "pinch")]
//! # fn example() {
//! use kurbo::Point;
//! use understory_event_state::pinch::{PinchSession, PinchUpdate};
//!
//! let mut pinch = PinchSession::new();
//! pinch.begin([(1, Point::new(0.0, 0.0)), (2, Point::new(0.0, 80.0))], 1.0);
//!
//! match pinch.update([(1, Point::new(0.0, 0.0)), (2, Point::new(0.0, 120.0))]) {
//!     PinchUpdate::Moved(m) => assert_eq!(m.current_distance, 120.0),
//!     other => panic!("unexpected {other:?}"),
//! }
//! # }
//! ```
//!
//! ### Double Taps
//!
//! Use [`tap::DoubleTapState`] to pair taps that land within 300 ms of each other:
//!
//! ```rust
//! # #[cfg(feature = "tap")]
//! # fn example() {
//! use understory_event_state::tap::{DoubleTapState, TapResult};
//!
//! let mut taps = DoubleTapState::new();
//! assert_eq!(taps.on_tap(10_000), TapResult::Single);
//! assert_eq!(taps.on_tap(10_200), TapResult::Double);
//! # }
//! ```
//!
//! ## Features
//!
//! - `pinch`: Enable pinch session tracking (requires `kurbo` dependency)
//! - `tap`: Enable double-tap recognition
//!
//! This crate is `no_std` compatible for all modules.

#![no_std]

#[cfg(feature = "pinch")]
pub mod pinch;

#[cfg(feature = "tap")]
pub mod tap;
