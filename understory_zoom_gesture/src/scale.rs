// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate scale formulas and bound clamping.
//!
//! Both input modes are additive:
//!
//! - Wheel: `current - delta_y / wheel_scale_size`. Positive `delta_y` (scrolling
//!   toward the user) zooms out.
//! - Pinch: `start_scale + (current_distance - start_distance) / divisor`, where the
//!   divisor is either the starting distance ([`PinchMode::Ratio`]) or a fixed
//!   pixel count ([`PinchMode::Divisor`]).
//!
//! The ratio form is not `start_scale * current / start`; consumers tuned against
//! the additive curve depend on it.

/// How a change in touch distance turns into a change in scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PinchMode {
    /// Relative distance change: `Δdistance / start_distance`.
    Ratio,
    /// Absolute distance change over a fixed size: `Δdistance / size`.
    Divisor(f64),
}

impl PinchMode {
    /// Picks [`PinchMode::Divisor`] when a touch scale size is configured.
    #[must_use]
    pub fn from_touch_scale_size(size: Option<f64>) -> Self {
        size.map_or(Self::Ratio, Self::Divisor)
    }

    /// Candidate scale for a pinch that started at `start_distance` and is now
    /// at `current_distance`.
    ///
    /// Returns `None` when the divisor is zero, so a degenerate session can
    /// never turn into `NaN` or an infinite scale.
    #[must_use]
    pub fn candidate(
        self,
        start_scale: f64,
        start_distance: f64,
        current_distance: f64,
    ) -> Option<f64> {
        let divisor = match self {
            Self::Ratio => start_distance,
            Self::Divisor(size) => size,
        };
        if divisor == 0.0 {
            return None;
        }
        Some(start_scale + (current_distance - start_distance) / divisor)
    }
}

/// Candidate scale after a wheel event.
///
/// `wheel_scale_size` is expected to be positive; zero yields `None`.
#[must_use]
pub fn wheel_candidate(current: f64, delta_y: f64, wheel_scale_size: f64) -> Option<f64> {
    if wheel_scale_size == 0.0 {
        return None;
    }
    Some(current + -delta_y / wheel_scale_size)
}

/// Optional, inclusive scale limits.
///
/// An absent bound leaves that side unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaleBounds {
    /// Smallest allowed scale.
    pub min: Option<f64>,
    /// Largest allowed scale.
    pub max: Option<f64>,
}

impl ScaleBounds {
    /// No limits on either side.
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    /// Creates bounds from optional limits.
    #[must_use]
    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Clamps `scale` into the bounds: `max(min, min(max, scale))`.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        let scale = match self.max {
            Some(max) => scale.min(max),
            None => scale,
        };
        match self.min {
            Some(min) => scale.max(min),
            None => scale,
        }
    }

    /// Returns `true` if `scale` is inside the bounds.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        self.min.is_none_or(|min| scale >= min) && self.max.is_none_or(|max| scale <= max)
    }
}
