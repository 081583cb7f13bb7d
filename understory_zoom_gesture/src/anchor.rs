// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor-preserving offsets and the viewport geometry they depend on.
//!
//! When the scale changes from `old` to `new`, a content-space anchor point
//! `a` moves on screen by `a * (new - old)`. Emitting
//! `a * (new - old) / old` alongside the new scale lets the consumer shift
//! its pan (in pre-change units) so the anchor stays visually fixed.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_zoom_gesture::anchor::anchor_offset;
//!
//! let offset = anchor_offset(Point::new(50.0, 50.0), 1.0, 2.0);
//! assert_eq!(offset, Vec2::new(50.0, 50.0));
//! ```

use kurbo::{Point, Vec2};

/// Page-space placement of the zoomed element's container.
///
/// This mirrors what a browser exposes through the bounding rectangle plus the
/// page scroll offsets; other hosts fill it from their own layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportOffset {
    /// Top edge of the container.
    pub top: f64,
    /// Left edge of the container.
    pub left: f64,
    /// Vertical scroll offset added to `top`.
    pub scroll_top: f64,
    /// Horizontal scroll offset added to `left`.
    pub scroll_left: f64,
}

impl ViewportOffset {
    /// Container at the page origin with no scrolling.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        scroll_top: 0.0,
        scroll_left: 0.0,
    };

    /// The container's page-space origin: `(left + scroll_left, top + scroll_top)`.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left + self.scroll_left, self.top + self.scroll_top)
    }
}

/// Supplies the container geometry used to convert event coordinates into
/// content coordinates.
///
/// It is queried once per gesture event, so implementations may read live
/// layout state.
pub trait ViewportLocator {
    /// Current placement of the container.
    fn locate(&self) -> ViewportOffset;
}

impl ViewportLocator for ViewportOffset {
    fn locate(&self) -> ViewportOffset {
        *self
    }
}

impl<F> ViewportLocator for F
where
    F: Fn() -> ViewportOffset,
{
    fn locate(&self) -> ViewportOffset {
        self()
    }
}

/// Offset that keeps `anchor` visually fixed when the scale goes from
/// `old_scale` to `new_scale`.
///
/// Returns zero when `old_scale` is zero or the result would not be finite.
#[must_use]
pub fn anchor_offset(anchor: Point, old_scale: f64, new_scale: f64) -> Vec2 {
    if old_scale == 0.0 {
        return Vec2::ZERO;
    }
    let diff = new_scale - old_scale;
    let offset = Vec2::new(anchor.x * diff / old_scale, anchor.y * diff / old_scale);
    if offset.is_finite() {
        offset
    } else {
        Vec2::ZERO
    }
}
