//! Compass locations, orientations, grid modes and rotation senses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One of the eight compass points a hand, prop or arrow can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Location {
    /// All eight points, clockwise from north.
    pub const ALL: [Location; 8] = [
        Location::N,
        Location::NE,
        Location::E,
        Location::SE,
        Location::S,
        Location::SW,
        Location::W,
        Location::NW,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Location::N => "n",
            Location::NE => "ne",
            Location::E => "e",
            Location::SE => "se",
            Location::S => "s",
            Location::SW => "sw",
            Location::W => "w",
            Location::NW => "nw",
        }
    }

    /// N, E, S, W: the diamond points.
    pub fn is_cardinal(self) -> bool {
        matches!(self, Location::N | Location::E | Location::S | Location::W)
    }

    /// NE, SE, SW, NW: the box points.
    pub fn is_intercardinal(self) -> bool {
        !self.is_cardinal()
    }

    /// Position in the clockwise ring starting at north (0..8).
    pub fn clock_index(self) -> u8 {
        match self {
            Location::N => 0,
            Location::NE => 1,
            Location::E => 2,
            Location::SE => 3,
            Location::S => 4,
            Location::SW => 5,
            Location::W => 6,
            Location::NW => 7,
        }
    }

    pub fn opposite(self) -> Location {
        Location::ALL[((self.clock_index() + 4) % 8) as usize]
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Location::ALL
            .into_iter()
            .find(|loc| loc.as_str() == lower)
            .ok_or_else(|| Error::InvalidValue {
                kind: "location",
                value: s.to_string(),
            })
    }
}

/// Facing of a prop's working end relative to the grid centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    In,
    Out,
    Clock,
    Counter,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::In,
        Orientation::Out,
        Orientation::Clock,
        Orientation::Counter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::In => "in",
            Orientation::Out => "out",
            Orientation::Clock => "clock",
            Orientation::Counter => "counter",
        }
    }

    /// IN and OUT point along the radius; CLOCK and COUNTER are tangential.
    pub fn is_radial(self) -> bool {
        matches!(self, Orientation::In | Orientation::Out)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" => Ok(Orientation::In),
            "out" => Ok(Orientation::Out),
            "clock" => Ok(Orientation::Clock),
            "counter" => Ok(Orientation::Counter),
            _ => Err(Error::InvalidValue { kind: "orientation", value: s.to_string() }),
        }
    }
}

/// Grid layout the pictograph is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridMode {
    /// Hands rest on the cardinal points.
    Diamond,
    /// Hands rest on the intercardinal points.
    Box,
}

impl GridMode {
    pub const ALL: [GridMode; 2] = [GridMode::Diamond, GridMode::Box];

    pub fn as_str(self) -> &'static str {
        match self {
            GridMode::Diamond => "diamond",
            GridMode::Box => "box",
        }
    }
}

impl fmt::Display for GridMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GridMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "diamond" => Ok(GridMode::Diamond),
            "box" => Ok(GridMode::Box),
            _ => Err(Error::InvalidValue { kind: "grid mode", value: s.to_string() }),
        }
    }
}

/// Rotation sense of a prop during its motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RotationDirection {
    #[serde(rename = "cw")]
    Clockwise,
    #[serde(rename = "ccw")]
    CounterClockwise,
    #[default]
    #[serde(rename = "none", alias = "no_rot")]
    NoRotation,
}

impl RotationDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            RotationDirection::Clockwise => "cw",
            RotationDirection::CounterClockwise => "ccw",
            RotationDirection::NoRotation => "none",
        }
    }
}

impl fmt::Display for RotationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RotationDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cw" => Ok(RotationDirection::Clockwise),
            "ccw" => Ok(RotationDirection::CounterClockwise),
            "none" | "no_rot" | "" => Ok(RotationDirection::NoRotation),
            _ => Err(Error::InvalidValue { kind: "rotation direction", value: s.to_string() }),
        }
    }
}
