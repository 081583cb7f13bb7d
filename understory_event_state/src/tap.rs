// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap recognition from single-touch starts.
//!
//! [`DoubleTapState`] is a two-state machine: *idle* and *awaiting a second tap*.
//! Each single-touch start is reported with [`DoubleTapState::on_tap`] along with a
//! caller-supplied timestamp in milliseconds. A tap that follows the previous one
//! within the window (inclusive) is a [`TapResult::Double`] and returns the state
//! to idle. Anything else is a [`TapResult::Single`] and is remembered for the next
//! comparison.
//!
//! ```
//! use understory_event_state::tap::{DoubleTapState, TapResult};
//!
//! let mut taps = DoubleTapState::new();
//! assert_eq!(taps.on_tap(0), TapResult::Single);
//! assert_eq!(taps.on_tap(150), TapResult::Double);
//! // Long after: just a new first tap.
//! assert_eq!(taps.on_tap(2_000), TapResult::Single);
//! ```

/// Maximum interval in milliseconds between the two taps of a double tap,
/// as used by [`DoubleTapState::new`].
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Classification of one tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapResult {
    /// A first tap, or one that came too late to pair with the previous tap.
    Single,
    /// The second tap of a double tap.
    Double,
}

/// Time-windowed double-tap detector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DoubleTapState {
    last_tap: Option<u64>,
    window: u64,
}

impl Default for DoubleTapState {
    fn default() -> Self {
        Self::new()
    }
}

impl DoubleTapState {
    /// Creates an idle detector using [`DOUBLE_TAP_WINDOW_MS`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_window(DOUBLE_TAP_WINDOW_MS)
    }

    /// Creates an idle detector with a custom window in milliseconds.
    #[must_use]
    pub const fn with_window(window: u64) -> Self {
        Self {
            last_tap: None,
            window,
        }
    }

    /// The pairing window in milliseconds.
    #[must_use]
    pub fn window(&self) -> u64 {
        self.window
    }

    /// Timestamp of the unpaired previous tap, if any.
    #[must_use]
    pub fn last_tap(&self) -> Option<u64> {
        self.last_tap
    }

    /// Returns `true` if the next tap within the window will be a double tap.
    #[must_use]
    pub fn is_awaiting_second_tap(&self) -> bool {
        self.last_tap.is_some()
    }

    /// Reports a tap at `timestamp` (milliseconds, any monotonic origin).
    ///
    /// A timestamp earlier than the stored one never pairs; it replaces the
    /// stored timestamp instead.
    pub fn on_tap(&mut self, timestamp: u64) -> TapResult {
        let paired = self
            .last_tap
            .and_then(|last| timestamp.checked_sub(last))
            .is_some_and(|interval| interval <= self.window);

        if paired {
            self.last_tap = None;
            TapResult::Double
        } else {
            self.last_tap = Some(timestamp);
            TapResult::Single
        }
    }

    /// Forgets any pending first tap.
    pub fn reset(&mut self) {
        self.last_tap = None;
    }
}
