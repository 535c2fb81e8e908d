//! Per-frame overlap reports and their consumers

use crate::foundation::math::Vec2;
use crate::results::CollisionPoints;

use super::body::{BodyId, OwnerId};

/// Directed pair: `receiver` is told about `other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairId {
    /// Body receiving the notification
    pub receiver: BodyId,
    /// Body it overlaps
    pub other: BodyId,
}

impl PairId {
    /// Create a new pair
    pub fn new(receiver: BodyId, other: BodyId) -> Self {
        Self { receiver, other }
    }

    /// Same bodies, roles exchanged
    pub fn reversed(&self) -> Self {
        Self {
            receiver: self.other,
            other: self.receiver,
        }
    }
}

/// What a receiver learns about an overlapping body
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionInformation {
    /// Overlapping body
    pub other: BodyId,
    /// Owner of the overlapping body
    pub other_owner: OwnerId,
    /// Layer of the overlapping body
    pub other_layer: u32,
    /// The pair did not overlap last frame
    pub first_contact: bool,
    /// One shape contains the other's reference point
    pub contained: bool,
    /// Boundary intersection points, when the receiver computes them
    pub points: Option<CollisionPoints>,
    /// Receiver velocity at resolution time
    pub self_velocity: Vec2,
    /// Other velocity at resolution time
    pub other_velocity: Vec2,
}

impl CollisionInformation {
    /// Velocity of the receiver relative to the other body
    pub fn relative_velocity(&self) -> Vec2 {
        self.self_velocity - self.other_velocity
    }

    /// Whether any intersection point was found
    pub fn has_points(&self) -> bool {
        self.points.as_ref().is_some_and(|points| !points.is_empty())
    }
}

/// Result of a space query for one body
#[derive(Debug, Clone, PartialEq)]
pub struct QueryInfo {
    /// Matching body
    pub body: BodyId,
    /// Intersection points of the query shape against the body
    pub points: Option<CollisionPoints>,
    /// Query shape and body contain each other's reference point
    pub contained: bool,
}

/// Event produced by [`CollisionHandler::resolve`](super::CollisionHandler::resolve)
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionEvent {
    /// The pair overlaps this frame
    Overlap {
        /// Receiver and other body
        pair: PairId,
        /// Details from the receiver's perspective
        info: CollisionInformation,
    },
    /// The pair overlapped last frame and no longer does
    OverlapEnded {
        /// Receiver and other body
        pair: PairId,
    },
}

impl CollisionEvent {
    /// Pair the event is about
    pub fn pair(&self) -> PairId {
        match self {
            Self::Overlap { pair, .. } | Self::OverlapEnded { pair } => *pair,
        }
    }

    /// Body receiving the event
    pub fn receiver(&self) -> BodyId {
        self.pair().receiver
    }

    /// Whether this is an overlap-ended event
    pub fn is_ended(&self) -> bool {
        matches!(self, Self::OverlapEnded { .. })
    }
}

/// Observer for resolved collision events
pub trait CollisionListener {
    /// Called for every overlapping pair each frame
    fn overlap(&mut self, pair: PairId, info: &CollisionInformation);

    /// Called once when a pair stops overlapping
    fn overlap_ended(&mut self, pair: PairId);
}

/// Feed `events` to `listener` in order
pub fn dispatch<L: CollisionListener + ?Sized>(events: &[CollisionEvent], listener: &mut L) {
    for event in events {
        match event {
            CollisionEvent::Overlap { pair, info } => listener.overlap(*pair, info),
            CollisionEvent::OverlapEnded { pair } => listener.overlap_ended(*pair),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        overlaps: Vec<PairId>,
        ended: Vec<PairId>,
    }

    impl CollisionListener for Recorder {
        fn overlap(&mut self, pair: PairId, _info: &CollisionInformation) {
            self.overlaps.push(pair);
        }

        fn overlap_ended(&mut self, pair: PairId) {
            self.ended.push(pair);
        }
    }

    fn info(other: u64) -> CollisionInformation {
        CollisionInformation {
            other: BodyId(other),
            other_owner: OwnerId(other),
            other_layer: 1,
            first_contact: true,
            contained: false,
            points: None,
            self_velocity: Vec2::new(2.0, 0.0),
            other_velocity: Vec2::new(-1.0, 0.0),
        }
    }

    #[test]
    fn test_dispatch_preserves_order() {
        let first = PairId::new(BodyId(1), BodyId(2));
        let events = vec![
            CollisionEvent::Overlap { pair: first, info: info(2) },
            CollisionEvent::Overlap { pair: first.reversed(), info: info(1) },
            CollisionEvent::OverlapEnded { pair: PairId::new(BodyId(3), BodyId(4)) },
        ];
        let mut recorder = Recorder::default();
        dispatch(&events, &mut recorder);
        assert_eq!(recorder.overlaps, vec![first, PairId::new(BodyId(2), BodyId(1))]);
        assert_eq!(recorder.ended, vec![PairId::new(BodyId(3), BodyId(4))]);
        assert!(events[2].is_ended());
        assert_eq!(events[1].receiver(), BodyId(2));
    }

    #[test]
    fn test_relative_velocity() {
        let info = info(2);
        assert_eq!(info.relative_velocity(), Vec2::new(3.0, 0.0));
        assert!(!info.has_points());
    }
}
