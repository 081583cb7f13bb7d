// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events understood by [`ZoomGesture`](crate::ZoomGesture).
//!
//! Hosts translate their platform events into [`InputEvent`]s. Positions are in
//! page space (the same space as [`ViewportOffset`](crate::anchor::ViewportOffset));
//! touches additionally carry a screen-space position used for pinch distances.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::source::InputKind;

/// Platform identifier of one touch, stable for the touch's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TouchId(pub u64);

/// One touch point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Identifier of the touch.
    pub id: TouchId,
    /// Position in page space, used for the anchor.
    pub page: Point,
    /// Position in screen space, used for pinch distances.
    pub screen: Point,
}

impl TouchPoint {
    /// A touch whose page and screen positions coincide.
    #[must_use]
    pub fn new(id: u64, pos: impl Into<Point>) -> Self {
        let pos = pos.into();
        Self {
            id: TouchId(id),
            page: pos,
            screen: pos,
        }
    }

    /// A touch with distinct page and screen positions.
    #[must_use]
    pub fn with_screen(id: u64, page: impl Into<Point>, screen: impl Into<Point>) -> Self {
        Self {
            id: TouchId(id),
            page: page.into(),
            screen: screen.into(),
        }
    }
}

/// Inline storage for the touches of one event. Two touches is the common case.
pub type TouchList = SmallVec<[TouchPoint; 4]>;

/// Payload of the four touch events.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchInput {
    /// Every touch currently on the surface.
    pub touches: TouchList,
    /// The touches this event is about; for end/cancel, the touches that ended.
    pub changed: TouchList,
    /// Event time in milliseconds, used for double-tap detection.
    pub timestamp: u64,
}

impl TouchInput {
    /// A touch event whose changed set equals its active set.
    #[must_use]
    pub fn new<I>(touches: I, timestamp: u64) -> Self
    where
        I: IntoIterator<Item = TouchPoint>,
    {
        let touches: TouchList = touches.into_iter().collect();
        Self {
            changed: touches.clone(),
            touches,
            timestamp,
        }
    }

    /// A touch-end/cancel style event: `ended` left, `remaining` are still down.
    #[must_use]
    pub fn ended<R, E>(remaining: R, ended: E, timestamp: u64) -> Self
    where
        R: IntoIterator<Item = TouchPoint>,
        E: IntoIterator<Item = TouchPoint>,
    {
        Self {
            touches: remaining.into_iter().collect(),
            changed: ended.into_iter().collect(),
            timestamp,
        }
    }
}

/// Payload of a wheel event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Scroll delta in pixels. Only `delta.y` affects the scale; positive values
    /// scroll toward the user and zoom out.
    pub delta: Vec2,
    /// Pointer position in page space.
    pub position: Point,
}

impl WheelInput {
    /// A vertical wheel step at `position`.
    #[must_use]
    pub fn new(delta_y: f64, position: impl Into<Point>) -> Self {
        Self {
            delta: Vec2::new(0.0, delta_y),
            position: position.into(),
        }
    }
}

/// A raw input event.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Wheel / trackpad scroll.
    Wheel(WheelInput),
    /// A touch began.
    TouchStart(TouchInput),
    /// Touches moved.
    TouchMove(TouchInput),
    /// Touches ended.
    TouchEnd(TouchInput),
    /// Touches were cancelled.
    TouchCancel(TouchInput),
}

impl InputEvent {
    /// The listener kind that delivers this event.
    #[must_use]
    pub fn kind(&self) -> InputKind {
        match self {
            Self::Wheel(_) => InputKind::Wheel,
            Self::TouchStart(_) => InputKind::TouchStart,
            Self::TouchMove(_) => InputKind::TouchMove,
            Self::TouchEnd(_) => InputKind::TouchEnd,
            Self::TouchCancel(_) => InputKind::TouchCancel,
        }
    }
}

/// What the host should do with the platform event after handling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    /// Let the platform apply its default behavior.
    #[default]
    Continue,
    /// The gesture consumed the event; suppress the platform default
    /// (page scroll, browser zoom, and so on).
    PreventDefault,
}

impl Outcome {
    /// Returns `true` for [`Outcome::PreventDefault`].
    #[must_use]
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::PreventDefault)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_input_new_mirrors_changed() {
        let input = TouchInput::new(
            [TouchPoint::new(1, (0.0, 0.0)), TouchPoint::new(2, (5.0, 5.0))],
            42,
        );
        assert_eq!(input.touches.len(), 2);
        assert_eq!(input.touches, input.changed);
        assert_eq!(input.timestamp, 42);
        assert!(!input.touches.spilled());
    }

    #[test]
    fn touch_input_ended_splits_sets() {
        let input = TouchInput::ended(
            [TouchPoint::new(2, (5.0, 5.0))],
            [TouchPoint::new(1, (0.0, 0.0))],
            7,
        );
        assert_eq!(input.touches[0].id, TouchId(2));
        assert_eq!(input.changed[0].id, TouchId(1));
    }

    #[test]
    fn with_screen_keeps_positions_apart() {
        let t = TouchPoint::with_screen(3, (10.0, 10.0), (110.0, 210.0));
        assert_eq!(t.page, Point::new(10.0, 10.0));
        assert_eq!(t.screen, Point::new(110.0, 210.0));
    }

    #[test]
    fn event_kinds() {
        let touch = TouchInput::default();
        assert_eq!(
            InputEvent::Wheel(WheelInput::new(1.0, (0.0, 0.0))).kind(),
            InputKind::Wheel
        );
        assert_eq!(
            InputEvent::TouchStart(touch.clone()).kind(),
            InputKind::TouchStart
        );
        assert_eq!(
            InputEvent::TouchMove(touch.clone()).kind(),
            InputKind::TouchMove
        );
        assert_eq!(InputEvent::TouchEnd(touch.clone()).kind(), InputKind::TouchEnd);
        assert_eq!(InputEvent::TouchCancel(touch).kind(), InputKind::TouchCancel);
    }

    #[test]
    fn outcome_default_is_continue() {
        assert_eq!(Outcome::default(), Outcome::Continue);
        assert!(Outcome::PreventDefault.prevents_default());
        assert!(!Outcome::Continue.prevents_default());
    }
}
