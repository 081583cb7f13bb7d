// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom_gesture --heading-base-level=0

//! Understory Zoom Gesture: wheel and pinch zoom with anchor-preserving offsets.
//!
//! This crate turns raw input into a single zoom scale for some piece of
//! content. It handles:
//! - Mouse wheel zoom, anchored on the pointer.
//! - Two-finger pinch zoom, anchored on the touch centroid.
//! - Optional double-tap toggling between the minimum and maximum scale.
//! - Programmatic scale changes.
//!
//! Every accepted change is clamped into the configured limits and delivered to
//! `change` subscribers together with a pan offset. Applying that offset keeps
//! the content point under the pointer (or between the fingers) visually fixed
//! while the scale changes.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::Vec2;
//! use understory_zoom_gesture::{
//!     InputEvent, Outcome, ScaleChange, TouchInput, TouchPoint, WheelInput, ZoomConfig,
//!     ZoomGesture,
//! };
//!
//! let config = ZoomConfig::default().with_scale_limits(Some(0.5), Some(4.0));
//! let mut zoom = ZoomGesture::new(config).unwrap();
//!
//! let changes = Rc::new(RefCell::new(Vec::new()));
//! let sink = changes.clone();
//! zoom.on_change(move |c: &ScaleChange| sink.borrow_mut().push(*c));
//! zoom.activate();
//!
//! // Scrolling up by 300 px doubles the scale around the pointer.
//! let wheel = InputEvent::Wheel(WheelInput::new(-300.0, (50.0, 50.0)));
//! assert_eq!(zoom.handle(&wheel), Outcome::PreventDefault);
//! assert_eq!(zoom.scale(), 2.0);
//! assert_eq!(changes.borrow()[0].offset, Vec2::new(50.0, 50.0));
//!
//! // Pinching from 100 px apart to 150 px apart adds the relative change (0.5).
//! let a = TouchPoint::new(1, (0.0, 0.0));
//! zoom.handle(&InputEvent::TouchStart(TouchInput::new(
//!     [a, TouchPoint::new(2, (100.0, 0.0))],
//!     0,
//! )));
//! zoom.handle(&InputEvent::TouchMove(TouchInput::new(
//!     [a, TouchPoint::new(2, (150.0, 0.0))],
//!     16,
//! )));
//! assert_eq!(zoom.scale(), 2.5);
//! ```
//!
//! ## Integration
//!
//! The engine does not touch any platform event API. [`ZoomGesture::activate`]
//! asks a [`source::EventSource`] to start delivering the needed
//! [`source::InputKind`]s; the host translates platform events into
//! [`InputEvent`]s, calls [`ZoomGesture::handle`], and suppresses the platform
//! default when it returns [`Outcome::PreventDefault`]. Page coordinates are
//! mapped into content coordinates through an [`anchor::ViewportLocator`].
//!
//! ## Features
//!
//! - `std` (default): forward `std` to Kurbo.
//! - `libm`: forward `libm` to Kurbo for `no_std` targets.
//! - `ui_events_adapter` (default): convert `ui-events` scroll events into
//!   wheel input (see `ui_events_adapter`).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod anchor;
pub mod config;
pub mod geometry;
pub mod input;
pub mod notify;
pub mod scale;
pub mod source;

mod gesture;

#[cfg(feature = "ui_events_adapter")]
pub mod ui_events_adapter;

pub use config::{ConfigError, ZoomConfig};
pub use gesture::{ZoomGesture, ZoomState};
pub use input::{InputEvent, Outcome, TouchId, TouchInput, TouchPoint, WheelInput};
pub use notify::{ChangeCallback, NotifyKind, ScaleChange};
