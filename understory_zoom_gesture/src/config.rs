// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom gesture configuration.

use core::fmt;

use crate::scale::{PinchMode, ScaleBounds};
use crate::source::InputKinds;

/// Construction-time options for [`ZoomGesture`](crate::ZoomGesture).
///
/// Start from [`ZoomConfig::default`] and adjust with the `with_*` methods:
///
/// ```
/// use understory_zoom_gesture::ZoomConfig;
///
/// let config = ZoomConfig::default()
///     .with_scale_limits(Some(0.5), Some(3.0))
///     .with_double_tap(true);
/// assert_eq!(config.init_scale, 1.0);
/// assert_eq!(config.wheel_scale_size, 300.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Scale before any input. Clamped into the limits at construction.
    pub init_scale: f64,
    /// Wheel sensitivity: a wheel delta of this many pixels changes the scale by 1.
    pub wheel_scale_size: f64,
    /// Pinch sensitivity in pixels of distance change per unit of scale.
    ///
    /// When `None`, the change in distance is divided by the starting distance
    /// instead (see [`PinchMode`]).
    pub touch_scale_size: Option<f64>,
    /// Inclusive lower limit; `None` leaves the scale unbounded below.
    pub min_scale: Option<f64>,
    /// Inclusive upper limit; `None` leaves the scale unbounded above.
    pub max_scale: Option<f64>,
    /// Toggle between the limits on a double tap.
    pub use_double_tap: bool,
    /// Listen to wheel events.
    pub use_mouse: bool,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            init_scale: 1.0,
            wheel_scale_size: 300.0,
            touch_scale_size: None,
            min_scale: None,
            max_scale: None,
            use_double_tap: false,
            use_mouse: true,
        }
    }
}

impl ZoomConfig {
    /// Sets the initial scale.
    #[must_use]
    pub fn with_init_scale(mut self, scale: f64) -> Self {
        self.init_scale = scale;
        self
    }

    /// Sets the wheel sensitivity divisor.
    #[must_use]
    pub fn with_wheel_scale_size(mut self, size: f64) -> Self {
        self.wheel_scale_size = size;
        self
    }

    /// Sets (or clears) the pinch sensitivity divisor.
    #[must_use]
    pub fn with_touch_scale_size(mut self, size: Option<f64>) -> Self {
        self.touch_scale_size = size;
        self
    }

    /// Sets both scale limits.
    #[must_use]
    pub fn with_scale_limits(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_scale = min;
        self.max_scale = max;
        self
    }

    /// Enables or disables double-tap toggling.
    #[must_use]
    pub fn with_double_tap(mut self, enabled: bool) -> Self {
        self.use_double_tap = enabled;
        self
    }

    /// Enables or disables wheel handling.
    #[must_use]
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.use_mouse = enabled;
        self
    }

    /// The configured limits.
    #[must_use]
    pub fn bounds(&self) -> ScaleBounds {
        ScaleBounds::new(self.min_scale, self.max_scale)
    }

    /// The pinch formula selected by [`ZoomConfig::touch_scale_size`].
    #[must_use]
    pub fn pinch_mode(&self) -> PinchMode {
        PinchMode::from_touch_scale_size(self.touch_scale_size)
    }

    /// The input kinds installed on activation.
    #[must_use]
    pub fn input_kinds(&self) -> InputKinds {
        if self.use_mouse {
            InputKinds::WHEEL | InputKinds::TOUCH
        } else {
            InputKinds::TOUCH
        }
    }

    /// Checks that every numeric option can be used without producing
    /// non-finite scales.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.init_scale.is_finite() {
            return Err(ConfigError::InitScale(self.init_scale));
        }
        if !is_positive_finite(self.wheel_scale_size) {
            return Err(ConfigError::WheelScaleSize(self.wheel_scale_size));
        }
        if let Some(size) = self.touch_scale_size
            && !is_positive_finite(size)
        {
            return Err(ConfigError::TouchScaleSize(size));
        }
        if let Some(min) = self.min_scale
            && !min.is_finite()
        {
            return Err(ConfigError::MinScale(min));
        }
        if let Some(max) = self.max_scale
            && !max.is_finite()
        {
            return Err(ConfigError::MaxScale(max));
        }
        if let (Some(min), Some(max)) = (self.min_scale, self.max_scale)
            && min > max
        {
            return Err(ConfigError::InvertedLimits { min, max });
        }
        Ok(())
    }
}

fn is_positive_finite(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// A [`ZoomConfig`] option that would make the scale arithmetic misbehave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// `init_scale` is NaN or infinite.
    InitScale(f64),
    /// `wheel_scale_size` is not a positive finite number.
    WheelScaleSize(f64),
    /// `touch_scale_size` is set but not a positive finite number.
    TouchScaleSize(f64),
    /// `min_scale` is NaN or infinite.
    MinScale(f64),
    /// `max_scale` is NaN or infinite.
    MaxScale(f64),
    /// `min_scale` is greater than `max_scale`.
    InvertedLimits {
        /// The configured minimum.
        min: f64,
        /// The configured maximum.
        max: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitScale(v) => write!(f, "initial scale {v} is not finite"),
            Self::WheelScaleSize(v) => {
                write!(f, "wheel scale size {v} is not a positive finite number")
            }
            Self::TouchScaleSize(v) => {
                write!(f, "touch scale size {v} is not a positive finite number")
            }
            Self::MinScale(v) => write!(f, "minimum scale {v} is not finite"),
            Self::MaxScale(v) => write!(f, "maximum scale {v} is not finite"),
            Self::InvertedLimits { min, max } => {
                write!(f, "minimum scale {min} is greater than maximum scale {max}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
