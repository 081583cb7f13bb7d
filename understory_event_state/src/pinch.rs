// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch session tracker: follow the two touches that form a pinch gesture.
//!
//! ## Usage
//!
//! 1) On every touch-start, call [`PinchSession::begin`] with the full set of active
//!    touches and the current scale. A session only begins when exactly two touches
//!    are present and they are not at the same position.
//! 2) On every touch-move, call [`PinchSession::update`] with the active touches.
//!    The tracked touches are located by identifier, so the host's touch list may
//!    reorder freely between events.
//! 3) On touch-end/cancel, call [`PinchSession::end`] with the identifiers that ended.
//!    Losing either finger ends the pinch; there is no one-finger continuation.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::pinch::{PinchSession, PinchStart, PinchUpdate};
//!
//! let mut pinch = PinchSession::new();
//!
//! // Two fingers land 100px apart while the content is at scale 1.0.
//! let start = pinch.begin([(1, Point::new(0.0, 0.0)), (2, Point::new(100.0, 0.0))], 1.0);
//! assert_eq!(start, PinchStart::Started);
//!
//! // The fingers spread to 150px; the host list happens to be reversed.
//! let PinchUpdate::Moved(m) = pinch.update([(2, Point::new(150.0, 0.0)), (1, Point::new(0.0, 0.0))])
//! else {
//!     panic!("expected a pinch move");
//! };
//! assert_eq!(m.start_distance, 100.0);
//! assert_eq!(m.current_distance, 150.0);
//! assert_eq!(m.start_scale, 1.0);
//!
//! // Lifting either finger ends the session.
//! assert!(pinch.end([1]));
//! assert!(!pinch.is_active());
//! ```

use kurbo::Point;

/// Result of offering a touch-start to [`PinchSession::begin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinchStart {
    /// Exactly two touches were present; a new session is now active.
    Started,
    /// The touch count was not two. Any previous session was cleared.
    Cleared,
    /// Two touches were present but at the same position, so there is no
    /// distance to compare against. No session is active.
    Degenerate,
}

/// Distances observed for one move of an active pinch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchMove {
    /// Distance between the two touches when the session began. Always `> 0`.
    pub start_distance: f64,
    /// Distance between the two touches now.
    pub current_distance: f64,
    /// Scale recorded when the session began.
    pub start_scale: f64,
}

/// Result of offering a touch-move to [`PinchSession::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PinchUpdate {
    /// No session is active; the move is not part of a pinch.
    Idle,
    /// One of the tracked touches is missing from the move, most likely because
    /// its end event was never delivered. The session has been discarded.
    Lost,
    /// Both tracked touches were found.
    Moved(PinchMove),
}

/// Tracks the pair of touch identifiers that make up an in-progress pinch.
///
/// The identifier type is generic so hosts can use whatever their platform
/// hands out (`i32` from the DOM, `u64` pointer ids, and so on).
///
/// The session holds either no identifiers or exactly two. While two are held
/// the starting distance is strictly positive.
#[derive(Clone, Debug)]
pub struct PinchSession<Id> {
    ids: Option<[Id; 2]>,
    start_distance: f64,
    start_scale: f64,
}

impl<Id> Default for PinchSession<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id> PinchSession<Id> {
    /// Creates an idle session tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ids: None,
            start_distance: 0.0,
            start_scale: 0.0,
        }
    }

    /// Offers the full list of active touches from a touch-start event.
    ///
    /// Begins a new session when there are exactly two touches, replacing any
    /// previous one. Otherwise the session is cleared.
    pub fn begin<I>(&mut self, touches: I, scale: f64) -> PinchStart
    where
        I: IntoIterator<Item = (Id, Point)>,
    {
        let mut touches = touches.into_iter();
        let (Some((id0, p0)), Some((id1, p1)), None) =
            (touches.next(), touches.next(), touches.next())
        else {
            self.clear();
            return PinchStart::Cleared;
        };

        let distance = p0.distance(p1);
        if distance.is_nan() || distance <= 0.0 {
            self.clear();
            return PinchStart::Degenerate;
        }

        self.ids = Some([id0, id1]);
        self.start_distance = distance;
        self.start_scale = scale;
        PinchStart::Started
    }

    /// Ends the session without looking at any event.
    pub fn clear(&mut self) {
        self.ids = None;
        self.start_distance = 0.0;
        self.start_scale = 0.0;
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.ids.is_some()
    }

    /// The two tracked identifiers, if a pinch is in progress.
    #[must_use]
    pub fn ids(&self) -> Option<&[Id; 2]> {
        self.ids.as_ref()
    }

    /// Distance between the touches when the active session began.
    #[must_use]
    pub fn start_distance(&self) -> Option<f64> {
        self.ids.as_ref().map(|_| self.start_distance)
    }

    /// Scale recorded when the active session began.
    #[must_use]
    pub fn start_scale(&self) -> Option<f64> {
        self.ids.as_ref().map(|_| self.start_scale)
    }
}

impl<Id: PartialEq> PinchSession<Id> {
    /// Offers the list of active touches from a touch-move event.
    pub fn update<I>(&mut self, touches: I) -> PinchUpdate
    where
        I: IntoIterator<Item = (Id, Point)>,
    {
        let Some([id0, id1]) = &self.ids else {
            return PinchUpdate::Idle;
        };

        let mut p0 = None;
        let mut p1 = None;
        for (id, pos) in touches {
            if id == *id0 {
                p0 = Some(pos);
            } else if id == *id1 {
                p1 = Some(pos);
            }
        }

        let (Some(p0), Some(p1)) = (p0, p1) else {
            self.clear();
            return PinchUpdate::Lost;
        };

        PinchUpdate::Moved(PinchMove {
            start_distance: self.start_distance,
            current_distance: p0.distance(p1),
            start_scale: self.start_scale,
        })
    }

    /// Offers the identifiers that ended (or were cancelled).
    ///
    /// Returns `true` if an active session was cleared because one of its
    /// touches is among them.
    pub fn end<I>(&mut self, ended: I) -> bool
    where
        I: IntoIterator<Item = Id>,
    {
        let Some(ids) = &self.ids else {
            return false;
        };
        if ended.into_iter().any(|id| ids.contains(&id)) {
            self.clear();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(d: f64) -> [(u32, Point); 2] {
        [(7, Point::new(10.0, 10.0)), (9, Point::new(10.0 + d, 10.0))]
    }

    #[test]
    fn new_session_is_idle() {
        let pinch = PinchSession::<u32>::new();
        assert!(!pinch.is_active());
        assert_eq!(pinch.ids(), None);
        assert_eq!(pinch.start_distance(), None);
        assert_eq!(pinch.start_scale(), None);
    }

    #[test]
    fn begin_with_two_touches_starts_session() {
        let mut pinch = PinchSession::new();

        assert_eq!(pinch.begin(pair(30.0), 2.5), PinchStart::Started);

        assert!(pinch.is_active());
        assert_eq!(pinch.ids(), Some(&[7, 9]));
        assert_eq!(pinch.start_distance(), Some(30.0));
        assert_eq!(pinch.start_scale(), Some(2.5));
    }

    #[test]
    fn begin_with_other_counts_clears() {
        let mut pinch = PinchSession::new();
        pinch.begin(pair(30.0), 1.0);

        let one = [(1_u32, Point::new(0.0, 0.0))];
        assert_eq!(pinch.begin(one, 1.0), PinchStart::Cleared);
        assert!(!pinch.is_active());

        pinch.begin(pair(30.0), 1.0);
        let three = [
            (1_u32, Point::new(0.0, 0.0)),
            (2, Point::new(5.0, 0.0)),
            (3, Point::new(9.0, 0.0)),
        ];
        assert_eq!(pinch.begin(three, 1.0), PinchStart::Cleared);
        assert!(!pinch.is_active());

        assert_eq!(pinch.begin([], 1.0), PinchStart::Cleared);
    }

    #[test]
    fn begin_with_coincident_touches_is_degenerate() {
        let mut pinch = PinchSession::new();
        pinch.begin(pair(30.0), 1.0);

        assert_eq!(pinch.begin(pair(0.0), 1.0), PinchStart::Degenerate);
        assert!(!pinch.is_active());
        assert_eq!(
            pinch.update([(7, Point::new(0.0, 0.0)), (9, Point::new(50.0, 0.0))]),
            PinchUpdate::Idle
        );
    }

    #[test]
    fn begin_with_nan_coordinates_is_degenerate() {
        let mut pinch = PinchSession::new();
        let touches = [(1_u32, Point::new(f64::NAN, 0.0)), (2, Point::new(3.0, 4.0))];
        assert_eq!(pinch.begin(touches, 1.0), PinchStart::Degenerate);
        assert!(!pinch.is_active());
    }

    #[test]
    fn update_when_idle_is_idle() {
        let mut pinch = PinchSession::<u32>::new();
        assert_eq!(pinch.update(pair(30.0)), PinchUpdate::Idle);
    }

    #[test]
    fn update_finds_touches_by_identifier() {
        let mut pinch = PinchSession::new();
        pinch.begin(pair(100.0), 1.0);

        // Reordered, with an unrelated third touch in the middle.
        let moved = [
            (9_u32, Point::new(0.0, 150.0)),
            (4, Point::new(1000.0, 1000.0)),
            (7, Point::new(0.0, 0.0)),
        ];
        assert_eq!(
            pinch.update(moved),
            PinchUpdate::Moved(PinchMove {
                start_distance: 100.0,
                current_distance: 150.0,
                start_scale: 1.0,
            })
        );
        assert!(pinch.is_active());
    }

    #[test]
    fn update_missing_identifier_loses_session() {
        let mut pinch = PinchSession::new();
        pinch.begin(pair(100.0), 1.0);

        assert_eq!(
            pinch.update([(9_u32, Point::new(0.0, 0.0))]),
            PinchUpdate::Lost
        );
        assert!(!pinch.is_active());
        assert_eq!(pinch.update(pair(100.0)), PinchUpdate::Idle);
    }

    #[test]
    fn end_with_tracked_identifier_clears() {
        let mut pinch = PinchSession::new();
        pinch.begin(pair(100.0), 1.0);

        assert!(pinch.end([9_u32]));
        assert!(!pinch.is_active());
    }

    #[test]
    fn end_with_untracked_identifier_keeps_session() {
        let mut pinch = PinchSession::new();
        pinch.begin(pair(100.0), 1.0);

        assert!(!pinch.end([3_u32]));
        assert!(!pinch.end([]));
        assert!(pinch.is_active());
    }

    #[test]
    fn end_when_idle_is_noop() {
        let mut pinch = PinchSession::<u32>::new();
        assert!(!pinch.end([7]));
    }

    #[test]
    fn begin_replaces_previous_session() {
        let mut pinch = PinchSession::new();
        pinch.begin(pair(100.0), 1.0);

        let next = [(20_u32, Point::new(0.0, 0.0)), (21, Point::new(0.0, 40.0))];
        assert_eq!(pinch.begin(next, 3.0), PinchStart::Started);
        assert_eq!(pinch.ids(), Some(&[20, 21]));
        assert_eq!(pinch.start_distance(), Some(40.0));
        assert_eq!(pinch.start_scale(), Some(3.0));

        // The old identifiers no longer end the session.
        assert!(!pinch.end([7, 9]));
    }
}
