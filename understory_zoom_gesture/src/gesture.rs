// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;

use kurbo::Point;
use understory_event_state::pinch::{PinchSession, PinchStart, PinchUpdate};
use understory_event_state::tap::{DoubleTapState, TapResult};

use crate::anchor::{ViewportLocator, ViewportOffset, anchor_offset};
use crate::config::{ConfigError, ZoomConfig};
use crate::geometry::{centroid, page_to_content};
use crate::input::{InputEvent, Outcome, TouchId, TouchInput, WheelInput};
use crate::notify::{ChangeCallback, NotifyKind, ScaleChange, Subscribers};
use crate::scale::{PinchMode, ScaleBounds, wheel_candidate};
use crate::source::{EventSource, InputKinds, ListenerSet};

/// Current scale and the content-space point it is anchored on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomState {
    /// The clamped scale.
    pub scale: f64,
    /// Content-space point kept visually fixed by the next scale change.
    pub anchor: Point,
}

/// Wheel and pinch zoom controller.
///
/// `ZoomGesture` turns raw wheel and touch input into a clamped scale and, for
/// every change, a pan offset that keeps the content under the pointer or the
/// touch centroid in place. Changes are pushed synchronously to `change`
/// subscribers.
///
/// The engine is generic over where its listeners live (`S`, an
/// [`EventSource`]) and how it learns the container's page position (`L`, a
/// [`ViewportLocator`]). [`ZoomGesture::new`] uses a [`ListenerSet`] and a
/// container at the page origin.
///
/// Subscribers must not call back into the engine while being notified.
#[derive(Debug)]
pub struct ZoomGesture<S = ListenerSet, L = ViewportOffset> {
    config: ZoomConfig,
    bounds: ScaleBounds,
    initial_scale: f64,
    pinch_mode: PinchMode,
    state: ZoomState,
    session: PinchSession<TouchId>,
    taps: DoubleTapState,
    subscribers: Subscribers,
    installed: InputKinds,
    source: S,
    locator: L,
}

impl ZoomGesture {
    /// Creates an inactive engine with the default event source and locator.
    pub fn new(config: ZoomConfig) -> Result<Self, ConfigError> {
        Self::with_parts(config, ListenerSet::new(), ViewportOffset::ZERO)
    }
}

impl<S: EventSource, L: ViewportLocator> ZoomGesture<S, L> {
    /// Creates an inactive engine listening through `source` and locating its
    /// container through `locator`.
    ///
    /// The initial scale is clamped into the configured limits.
    pub fn with_parts(config: ZoomConfig, source: S, locator: L) -> Result<Self, ConfigError> {
        config.validate()?;
        let bounds = config.bounds();
        let initial_scale = bounds.clamp(config.init_scale);
        Ok(Self {
            config,
            bounds,
            initial_scale,
            pinch_mode: config.pinch_mode(),
            state: ZoomState {
                scale: initial_scale,
                anchor: Point::ZERO,
            },
            session: PinchSession::new(),
            taps: DoubleTapState::new(),
            subscribers: Subscribers::new(),
            installed: InputKinds::empty(),
            source,
            locator,
        })
    }

    /// Installs the wheel (if enabled) and touch listeners on the event source.
    ///
    /// Calling this twice installs twice; guarding against that is up to the caller.
    pub fn activate(&mut self) {
        let kinds = self.config.input_kinds();
        for kind in kinds.kinds() {
            self.source.add_listener(kind);
        }
        self.installed = kinds;
        log::trace!("zoom gesture activated for {kinds:?}");
    }

    /// Removes the listeners installed by [`ZoomGesture::activate`].
    ///
    /// Safe to call when not active. Any pinch in progress is dropped, since its
    /// end event can no longer arrive.
    pub fn deactivate(&mut self) {
        for kind in self.config.input_kinds().kinds() {
            self.source.remove_listener(kind);
        }
        self.installed = InputKinds::empty();
        self.session.clear();
        self.taps.reset();
        log::trace!("zoom gesture deactivated");
    }

    /// Returns `true` between [`ZoomGesture::activate`] and [`ZoomGesture::deactivate`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.installed.is_empty()
    }

    /// Processes one input event.
    ///
    /// Events of kinds that are not installed are ignored.
    pub fn handle(&mut self, event: &InputEvent) -> Outcome {
        if !self.installed.has(event.kind()) {
            return Outcome::Continue;
        }
        match event {
            InputEvent::Wheel(wheel) => self.on_wheel(wheel),
            InputEvent::TouchStart(touch) => self.on_touch_start(touch),
            InputEvent::TouchMove(touch) => self.on_touch_move(touch),
            InputEvent::TouchEnd(touch) | InputEvent::TouchCancel(touch) => {
                self.on_touch_end(touch)
            }
        }
    }

    /// Sets the scale programmatically.
    ///
    /// The value goes through the same clamping, anchor offset and notification
    /// as a gesture, using the anchor of the most recent gesture event (the
    /// origin if there has been none).
    pub fn set_scale(&mut self, scale: f64) {
        self.update_scale(scale);
    }

    /// The current, clamped scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// The current content-space anchor.
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.state.anchor
    }

    /// Scale and anchor together.
    #[must_use]
    pub fn state(&self) -> ZoomState {
        self.state
    }

    /// Returns `true` while a two-finger pinch is being tracked.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.session.is_active()
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// The event source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The event source, mutably.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// The viewport locator.
    #[must_use]
    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// Replaces the viewport locator, for example after a layout change.
    pub fn set_locator(&mut self, locator: L) {
        self.locator = locator;
    }

    /// Appends a subscriber for `kind`.
    pub fn subscribe(&mut self, kind: NotifyKind, callback: ChangeCallback) {
        self.subscribers.subscribe(kind, callback);
    }

    /// Removes every registration of `callback` for `kind`.
    pub fn unsubscribe(&mut self, kind: NotifyKind, callback: &ChangeCallback) {
        self.subscribers.unsubscribe(kind, callback);
    }

    /// Subscribes by event name; unknown names are silently ignored.
    pub fn subscribe_named(&mut self, name: &str, callback: ChangeCallback) -> bool {
        self.subscribers.subscribe_named(name, callback)
    }

    /// Unsubscribes by event name; unknown names are silently ignored.
    pub fn unsubscribe_named(&mut self, name: &str, callback: &ChangeCallback) -> bool {
        self.subscribers.unsubscribe_named(name, callback)
    }

    /// Subscribes a closure to `change` and returns its handle for unsubscribing.
    pub fn on_change<F>(&mut self, f: F) -> ChangeCallback
    where
        F: Fn(&ScaleChange) + 'static,
    {
        let callback: ChangeCallback = Rc::new(f);
        self.subscribers.subscribe(NotifyKind::Change, callback.clone());
        callback
    }

    fn on_wheel(&mut self, wheel: &WheelInput) -> Outcome {
        self.set_anchor_from_page(wheel.position);
        if let Some(candidate) =
            wheel_candidate(self.state.scale, wheel.delta.y, self.config.wheel_scale_size)
        {
            self.update_scale(candidate);
        }
        Outcome::PreventDefault
    }

    fn on_touch_start(&mut self, touch: &TouchInput) -> Outcome {
        if self.config.use_double_tap && touch.touches.len() == 1 {
            // One finger cannot continue a pinch.
            self.session.clear();
            return self.on_single_tap(touch);
        }

        let touches = touch.touches.iter().map(|t| (t.id, t.screen));
        match self.session.begin(touches, self.state.scale) {
            PinchStart::Started => {
                self.taps.reset();
                self.set_anchor_from_touches(touch);
                log::trace!(
                    "pinch started: ids {:?}, distance {:?}, scale {}",
                    self.session.ids(),
                    self.session.start_distance(),
                    self.state.scale
                );
            }
            PinchStart::Degenerate => {
                log::debug!("pinch not started: both touches at the same position");
            }
            PinchStart::Cleared => {}
        }
        Outcome::Continue
    }

    fn on_single_tap(&mut self, touch: &TouchInput) -> Outcome {
        match self.taps.on_tap(touch.timestamp) {
            TapResult::Single => Outcome::Continue,
            TapResult::Double => {
                self.set_anchor_from_touches(touch);
                let min = self.config.min_scale.unwrap_or(self.initial_scale);
                let max = self.config.max_scale.unwrap_or(self.initial_scale);
                let target = if (self.state.scale - min).abs() < f64::EPSILON {
                    max
                } else {
                    min
                };
                log::debug!("double tap: scale {} -> {target}", self.state.scale);
                self.update_scale(target);
                Outcome::PreventDefault
            }
        }
    }

    fn on_touch_move(&mut self, touch: &TouchInput) -> Outcome {
        if !self.session.is_active() {
            return Outcome::Continue;
        }

        let touches = touch.touches.iter().map(|t| (t.id, t.screen));
        let pinch = match self.session.update(touches) {
            PinchUpdate::Moved(pinch) => pinch,
            PinchUpdate::Lost => {
                log::debug!("pinch lost: a tracked touch is missing from the move");
                return Outcome::Continue;
            }
            PinchUpdate::Idle => return Outcome::Continue,
        };

        self.set_anchor_from_touches(touch);
        match self.pinch_mode.candidate(
            pinch.start_scale,
            pinch.start_distance,
            pinch.current_distance,
        ) {
            Some(candidate) => self.update_scale(candidate),
            None => log::debug!("pinch move ignored: zero divisor"),
        }
        Outcome::PreventDefault
    }

    fn on_touch_end(&mut self, touch: &TouchInput) -> Outcome {
        if self.session.end(touch.changed.iter().map(|t| t.id)) {
            log::trace!("pinch ended");
        }
        Outcome::Continue
    }

    fn set_anchor_from_touches(&mut self, touch: &TouchInput) {
        if let Some(center) = centroid(touch.touches.iter().map(|t| t.page)) {
            self.set_anchor_from_page(center);
        }
    }

    fn set_anchor_from_page(&mut self, page: Point) {
        let offset = self.locator.locate();
        self.state.anchor = page_to_content(page, offset, self.state.scale);
    }

    fn update_scale(&mut self, candidate: f64) {
        if !candidate.is_finite() {
            log::debug!("scale update ignored: candidate {candidate} is not finite");
            return;
        }
        let old = self.state.scale;
        let new = self.bounds.clamp(candidate);
        let offset = anchor_offset(self.state.anchor, old, new);
        self.state.scale = new;
        log::trace!("scale {old} -> {new} (offset {offset:?})");
        self.subscribers
            .emit(NotifyKind::Change, &ScaleChange::with_offset(new, offset));
    }
}
