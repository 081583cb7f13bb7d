// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event sources: where a zoom gesture installs and removes its input listeners.
//!
//! The engine never talks to a platform event API. Activation tells an
//! [`EventSource`] which [`InputKind`]s to deliver; the host then forwards those
//! events to [`ZoomGesture::handle`](crate::ZoomGesture::handle).

/// The input events a zoom gesture listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Mouse wheel / trackpad scroll.
    Wheel,
    /// A touch began.
    TouchStart,
    /// One or more touches moved.
    TouchMove,
    /// A touch was lifted.
    TouchEnd,
    /// A touch was cancelled by the platform.
    TouchCancel,
}

impl InputKind {
    /// Every kind, in installation order.
    pub const ALL: [Self; 5] = [
        Self::Wheel,
        Self::TouchStart,
        Self::TouchMove,
        Self::TouchEnd,
        Self::TouchCancel,
    ];

    /// The single-kind flag set for this kind.
    #[must_use]
    pub const fn flag(self) -> InputKinds {
        match self {
            Self::Wheel => InputKinds::WHEEL,
            Self::TouchStart => InputKinds::TOUCH_START,
            Self::TouchMove => InputKinds::TOUCH_MOVE,
            Self::TouchEnd => InputKinds::TOUCH_END,
            Self::TouchCancel => InputKinds::TOUCH_CANCEL,
        }
    }
}

bitflags::bitflags! {
    /// A set of [`InputKind`]s.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InputKinds: u8 {
        /// Wheel events.
        const WHEEL        = 0b0000_0001;
        /// Touch-start events.
        const TOUCH_START  = 0b0000_0010;
        /// Touch-move events.
        const TOUCH_MOVE   = 0b0000_0100;
        /// Touch-end events.
        const TOUCH_END    = 0b0000_1000;
        /// Touch-cancel events.
        const TOUCH_CANCEL = 0b0001_0000;
        /// All touch events.
        const TOUCH = Self::TOUCH_START.bits()
            | Self::TOUCH_MOVE.bits()
            | Self::TOUCH_END.bits()
            | Self::TOUCH_CANCEL.bits();
    }
}

impl Default for InputKinds {
    fn default() -> Self {
        Self::empty()
    }
}

impl InputKinds {
    /// Returns `true` if `kind` is in the set.
    #[must_use]
    pub fn has(self, kind: InputKind) -> bool {
        self.contains(kind.flag())
    }

    /// Iterates the kinds in the set, in [`InputKind::ALL`] order.
    pub fn kinds(self) -> impl Iterator<Item = InputKind> {
        InputKind::ALL.into_iter().filter(move |k| self.has(*k))
    }
}

/// Something that can deliver input events of the given kinds.
///
/// Registration is not reference counted; adding a kind twice and removing it
/// once is up to the implementation.
pub trait EventSource {
    /// Start delivering events of `kind`.
    fn add_listener(&mut self, kind: InputKind);

    /// Stop delivering events of `kind`. Must tolerate kinds that were never added.
    fn remove_listener(&mut self, kind: InputKind);
}

impl<S: EventSource + ?Sized> EventSource for &mut S {
    fn add_listener(&mut self, kind: InputKind) {
        (**self).add_listener(kind);
    }

    fn remove_listener(&mut self, kind: InputKind) {
        (**self).remove_listener(kind);
    }
}

/// Default event source: a set of installed kinds the host polls.
///
/// Use it when events arrive from a single window-wide stream, such as a
/// `winit` event loop; check [`ListenerSet::is_listening`] before forwarding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerSet {
    installed: InputKinds,
}

impl ListenerSet {
    /// Creates a set with nothing installed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if events of `kind` should be forwarded.
    #[must_use]
    pub fn is_listening(&self, kind: InputKind) -> bool {
        self.installed.has(kind)
    }

    /// The installed kinds.
    #[must_use]
    pub fn installed(&self) -> InputKinds {
        self.installed
    }
}

impl EventSource for ListenerSet {
    fn add_listener(&mut self, kind: InputKind) {
        self.installed.insert(kind.flag());
    }

    fn remove_listener(&mut self, kind: InputKind) {
        self.installed.remove(kind.flag());
    }
}
