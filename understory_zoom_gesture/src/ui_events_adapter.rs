// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion from `ui-events` pointer scroll events into wheel input.
//!
//! `ui-events` scroll deltas are navigation directions in a Y-down space: a
//! positive `y` moves the viewport down relative to the content. That matches
//! the wheel `deltaY` convention, so deltas are passed through unchanged and
//! scrolling away from the user (negative `y`) zooms in.

use kurbo::Vec2;
use ui_events::ScrollDelta;
use ui_events::pointer::{PointerEvent, PointerScrollEvent};

use crate::input::{InputEvent, WheelInput};

/// Pixel sizes used to resolve line and page scroll deltas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollUnits {
    /// Size of one scroll line.
    pub line: Vec2,
    /// Size of one scroll page.
    pub page: Vec2,
}

impl Default for ScrollUnits {
    fn default() -> Self {
        Self {
            line: Vec2::new(20.0, 20.0),
            page: Vec2::new(800.0, 600.0),
        }
    }
}

/// Resolves a scroll delta into logical pixels.
#[must_use]
pub fn scroll_delta_pixels(delta: &ScrollDelta, scale_factor: f64, units: ScrollUnits) -> Vec2 {
    match delta {
        ScrollDelta::PixelDelta(pos) => {
            let logical = pos.to_logical(scale_factor);
            Vec2::new(logical.x, logical.y)
        }
        ScrollDelta::LineDelta(x, y) => {
            Vec2::new(f64::from(*x) * units.line.x, f64::from(*y) * units.line.y)
        }
        ScrollDelta::PageDelta(x, y) => {
            Vec2::new(f64::from(*x) * units.page.x, f64::from(*y) * units.page.y)
        }
    }
}

/// Converts a scroll event into wheel input at the event's logical position.
#[must_use]
pub fn wheel_from_scroll(event: &PointerScrollEvent, units: ScrollUnits) -> WheelInput {
    let delta = scroll_delta_pixels(&event.delta, event.state.scale_factor, units);
    WheelInput {
        delta,
        position: event.state.logical_point(),
    }
}

/// Returns a wheel [`InputEvent`] for `PointerEvent::Scroll`, `None` otherwise.
#[must_use]
pub fn wheel_from_pointer_event(event: &PointerEvent, units: ScrollUnits) -> Option<InputEvent> {
    let PointerEvent::Scroll(scroll) = event else {
        return None;
    };
    Some(InputEvent::Wheel(wheel_from_scroll(scroll, units)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, ZoomConfig, ZoomGesture};
    use kurbo::Point;
    use ui_events::pointer::{PointerId, PointerInfo, PointerState, PointerType};

    fn mouse() -> PointerInfo {
        PointerInfo {
            pointer_id: Some(PointerId::PRIMARY),
            persistent_device_id: None,
            pointer_type: PointerType::Mouse,
        }
    }

    fn scroll(delta: ScrollDelta) -> PointerEvent {
        PointerEvent::Scroll(PointerScrollEvent {
            pointer: mouse(),
            delta,
            state: PointerState {
                scale_factor: 2.0,
                ..PointerState::default()
            },
        })
    }

    #[test]
    fn line_delta_uses_line_size() {
        let units = ScrollUnits::default();
        let px = scroll_delta_pixels(&ScrollDelta::LineDelta(0.0, 3.0), 2.0, units);
        assert_eq!(px, Vec2::new(0.0, 60.0));
    }

    #[test]
    fn page_delta_uses_page_size() {
        let units = ScrollUnits {
            line: Vec2::new(10.0, 10.0),
            page: Vec2::new(400.0, 300.0),
        };
        let px = scroll_delta_pixels(&ScrollDelta::PageDelta(-1.0, 0.5), 1.0, units);
        assert_eq!(px, Vec2::new(-400.0, 150.0));
    }

    #[test]
    fn scroll_away_from_user_has_negative_wheel_delta() {
        let event = scroll(ScrollDelta::LineDelta(0.0, -3.0));
        let Some(InputEvent::Wheel(wheel)) =
            wheel_from_pointer_event(&event, ScrollUnits::default())
        else {
            panic!("scroll should convert to wheel input");
        };
        assert_eq!(wheel.delta, Vec2::new(0.0, -60.0));
        assert_eq!(wheel.position, Point::ZERO);
    }

    #[test]
    fn scroll_toward_user_has_positive_wheel_delta() {
        let event = scroll(ScrollDelta::PageDelta(0.0, 1.0));
        let PointerEvent::Scroll(scroll) = &event else {
            unreachable!();
        };
        let wheel = wheel_from_scroll(scroll, ScrollUnits::default());
        assert_eq!(wheel.delta, Vec2::new(0.0, 600.0));
    }

    #[test]
    fn converted_scroll_drives_zoom() {
        let mut zoom = ZoomGesture::new(ZoomConfig::default()).unwrap();
        zoom.activate();

        // 15 lines of 20 px away from the user: one wheel_scale_size step in.
        let zoom_in = scroll(ScrollDelta::LineDelta(0.0, -15.0));
        let wheel = wheel_from_pointer_event(&zoom_in, ScrollUnits::default()).unwrap();
        assert_eq!(zoom.handle(&wheel), Outcome::PreventDefault);
        assert_eq!(zoom.scale(), 2.0);

        let zoom_out = scroll(ScrollDelta::LineDelta(0.0, 15.0));
        let wheel = wheel_from_pointer_event(&zoom_out, ScrollUnits::default()).unwrap();
        zoom.handle(&wheel);
        assert_eq!(zoom.scale(), 1.0);
    }

    #[test]
    fn non_scroll_events_are_skipped() {
        let enter = PointerEvent::Enter(mouse());
        assert_eq!(wheel_from_pointer_event(&enter, ScrollUnits::default()), None);
        let leave = PointerEvent::Leave(mouse());
        assert_eq!(wheel_from_pointer_event(&leave, ScrollUnits::default()), None);
    }
}
