//! Arrow location and hand-path classification.

use serde::{Deserialize, Serialize};

use crate::model::{Location, MotionDescriptor, RotationDirection};
use crate::Error;

/// Shift pairs and the location an arrow between them sits on.
///
/// Adjacent cardinals meet at an intercardinal and adjacent
/// intercardinals meet at a cardinal. Lookup ignores pair order.
const SHIFT_LOCATIONS: [((Location, Location), Location); 8] = [
    ((Location::N, Location::E), Location::NE),
    ((Location::E, Location::S), Location::SE),
    ((Location::S, Location::W), Location::SW),
    ((Location::W, Location::N), Location::NW),
    ((Location::NE, Location::NW), Location::N),
    ((Location::NE, Location::SE), Location::E),
    ((Location::SE, Location::SW), Location::S),
    ((Location::SW, Location::NW), Location::W),
];

/// Location between the two points of a shift, if they form a known pair.
pub fn shift_location(start: Location, end: Location) -> Option<Location> {
    SHIFT_LOCATIONS
        .iter()
        .find(|((a, b), _)| (*a == start && *b == end) || (*a == end && *b == start))
        .map(|(_, loc)| *loc)
}

/// Where the arrow of `motion` is drawn.
///
/// Shifts sit between their start and end points; dashes and statics sit
/// on their start point. An unmapped shift pair yields `None`.
pub fn arrow_location(motion: &MotionDescriptor) -> Option<Location> {
    if motion.motion_type.uses_hand_point() {
        return Some(motion.start_location);
    }
    let location = shift_location(motion.start_location, motion.end_location);
    if location.is_none() {
        let err = Error::UnmappedLocationPair { start: motion.start_location, end: motion.end_location };
        tracing::warn!(motion_type = %motion.motion_type, error = %err, "no arrow location");
    }
    location
}

/// How the hand travels between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandPath {
    ClockwiseShift,
    CounterClockwiseShift,
    Dash,
    Static,
}

impl HandPath {
    /// Rotation sense implied by the hand's travel.
    pub fn rotation_direction(self) -> RotationDirection {
        match self {
            HandPath::ClockwiseShift => RotationDirection::Clockwise,
            HandPath::CounterClockwiseShift => RotationDirection::CounterClockwise,
            HandPath::Dash | HandPath::Static => RotationDirection::NoRotation,
        }
    }
}

/// Classify the hand path from `start` to `end`.
///
/// Quarter turns around the ring are shifts, half turns are dashes, no
/// movement is static. Eighth and three-eighth turns have no hand path.
pub fn hand_path(start: Location, end: Location) -> Option<HandPath> {
    let steps = (8 + end.clock_index() - start.clock_index()) % 8;
    match steps {
        0 => Some(HandPath::Static),
        2 => Some(HandPath::ClockwiseShift),
        4 => Some(HandPath::Dash),
        6 => Some(HandPath::CounterClockwiseShift),
        _ => None,
    }
}
