// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point helpers shared by the pinch and anchor math.

use kurbo::{Point, Vec2};

use crate::anchor::ViewportOffset;

/// Euclidean distance between two points. Symmetric in its arguments.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Mean position of a set of points, or `None` if the set is empty.
#[must_use]
pub fn centroid<I>(points: I) -> Option<Point>
where
    I: IntoIterator<Item = Point>,
{
    let mut sum = Vec2::ZERO;
    let mut count = 0.0;
    for p in points {
        sum += p.to_vec2();
        count += 1.0;
    }
    (count > 0.0).then(|| (sum / count).to_point())
}

/// Converts a page-space point into content space.
///
/// The container's page origin is subtracted first, then the result is divided
/// by the current `scale`. A scale that is not a positive finite number leaves
/// the coordinate undivided.
#[must_use]
pub fn page_to_content(point: Point, offset: ViewportOffset, scale: f64) -> Point {
    let local = point - offset.origin().to_vec2();
    if scale.is_finite() && scale > 0.0 {
        (local.to_vec2() / scale).to_point()
    } else {
        local
    }
}
