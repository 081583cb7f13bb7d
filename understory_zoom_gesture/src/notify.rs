// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notification: ordered subscriber lists keyed by notification kind.
//!
//! Subscribers are reference-counted callbacks. Identity is the `Rc` pointer, so
//! the same handle may be subscribed more than once (and is then called more
//! than once), and unsubscribing removes every registration of that handle.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_zoom_gesture::notify::{ChangeCallback, NotifyKind, ScaleChange, Subscribers};
//!
//! let seen = Rc::new(Cell::new(0.0));
//! let sink = seen.clone();
//! let callback: ChangeCallback = Rc::new(move |change: &ScaleChange| sink.set(change.scale));
//!
//! let mut subscribers = Subscribers::new();
//! subscribers.subscribe(NotifyKind::Change, callback.clone());
//! subscribers.emit(NotifyKind::Change, &ScaleChange::new(2.0));
//! assert_eq!(seen.get(), 2.0);
//!
//! subscribers.unsubscribe(NotifyKind::Change, &callback);
//! assert!(subscribers.is_empty(NotifyKind::Change));
//! ```

use alloc::{rc::Rc, vec::Vec};
use core::fmt;

use kurbo::Vec2;

/// Payload delivered to `change` subscribers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleChange {
    /// The new, clamped scale.
    pub scale: f64,
    /// Pan adjustment that keeps the anchor point visually fixed
    /// (`offset.x` / `offset.y`).
    pub offset: Vec2,
}

impl ScaleChange {
    /// A change with no pan adjustment.
    #[must_use]
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            offset: Vec2::ZERO,
        }
    }

    /// A change with a pan adjustment.
    #[must_use]
    pub fn with_offset(scale: f64, offset: Vec2) -> Self {
        Self { scale, offset }
    }
}

/// Callback invoked synchronously on every accepted scale change.
pub type ChangeCallback = Rc<dyn Fn(&ScaleChange)>;

/// The notifications a zoom gesture can emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotifyKind {
    /// The scale was updated (by a gesture or programmatically).
    Change,
}

impl NotifyKind {
    /// Looks up a kind by its event name. Only `"change"` is recognized.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "change" => Some(Self::Change),
            _ => None,
        }
    }

    /// The event name of this kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Change => "change",
        }
    }
}

/// Ordered subscriber lists, one per [`NotifyKind`].
#[derive(Clone, Default)]
pub struct Subscribers {
    change: Vec<ChangeCallback>,
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("change", &self.change.len())
            .finish()
    }
}

impl Subscribers {
    /// Creates empty subscriber lists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn list_mut(&mut self, kind: NotifyKind) -> &mut Vec<ChangeCallback> {
        match kind {
            NotifyKind::Change => &mut self.change,
        }
    }

    fn list(&self, kind: NotifyKind) -> &[ChangeCallback] {
        match kind {
            NotifyKind::Change => &self.change,
        }
    }

    /// Appends `callback`; it will be called after all earlier subscribers.
    pub fn subscribe(&mut self, kind: NotifyKind, callback: ChangeCallback) {
        self.list_mut(kind).push(callback);
    }

    /// Removes every registration of `callback` (by `Rc` identity).
    pub fn unsubscribe(&mut self, kind: NotifyKind, callback: &ChangeCallback) {
        self.list_mut(kind).retain(|c| !Rc::ptr_eq(c, callback));
    }

    /// Like [`Subscribers::subscribe`], keyed by event name.
    ///
    /// Unknown names are ignored. Returns `true` if the callback was added.
    pub fn subscribe_named(&mut self, name: &str, callback: ChangeCallback) -> bool {
        let Some(kind) = NotifyKind::from_name(name) else {
            return false;
        };
        self.subscribe(kind, callback);
        true
    }

    /// Like [`Subscribers::unsubscribe`], keyed by event name.
    ///
    /// Unknown names are ignored. Returns `true` if the name was recognized.
    pub fn unsubscribe_named(&mut self, name: &str, callback: &ChangeCallback) -> bool {
        let Some(kind) = NotifyKind::from_name(name) else {
            return false;
        };
        self.unsubscribe(kind, callback);
        true
    }

    /// Number of registrations for `kind`.
    #[must_use]
    pub fn len(&self, kind: NotifyKind) -> usize {
        self.list(kind).len()
    }

    /// Returns `true` if nothing is subscribed to `kind`.
    #[must_use]
    pub fn is_empty(&self, kind: NotifyKind) -> bool {
        self.list(kind).is_empty()
    }

    /// Calls every subscriber of `kind`, in subscription order.
    pub fn emit(&self, kind: NotifyKind, change: &ScaleChange) {
        for callback in self.list(kind) {
            callback(change);
        }
    }
}
