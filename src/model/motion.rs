//! A single prop motion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Location, Orientation, RotationDirection};
use crate::{Error, Result};

/// Which hand/prop a motion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Red,
}

impl Color {
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Red => "red",
        }
    }

    pub fn other(self) -> Color {
        match self {
            Color::Blue => Color::Red,
            Color::Red => Color::Blue,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blue" => Ok(Color::Blue),
            "red" => Ok(Color::Red),
            _ => Err(Error::InvalidValue { kind: "color", value: s.to_string() }),
        }
    }
}

/// Motion type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionType {
    Pro,
    Anti,
    Float,
    Dash,
    Static,
}

impl MotionType {
    pub const ALL: [MotionType; 5] = [
        MotionType::Pro,
        MotionType::Anti,
        MotionType::Float,
        MotionType::Dash,
        MotionType::Static,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MotionType::Pro => "pro",
            MotionType::Anti => "anti",
            MotionType::Float => "float",
            MotionType::Dash => "dash",
            MotionType::Static => "static",
        }
    }

    /// PRO, ANTI and FLOAT move the hand to an adjacent point.
    pub fn is_shift(self) -> bool {
        matches!(self, MotionType::Pro | MotionType::Anti | MotionType::Float)
    }

    /// DASH and STATIC arrows are anchored on hand points.
    pub fn uses_hand_point(self) -> bool {
        !self.is_shift()
    }
}

impl fmt::Display for MotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MotionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        MotionType::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| Error::InvalidValue { kind: "motion type", value: s.to_string() })
    }
}

// ============================================================================
// Turns
// ============================================================================

/// Turn count of a motion: 0 to 3 in half steps, or the float sentinel.
///
/// Stored as half-turns so equality and hashing are exact. The float
/// sentinel is its own value and never equals numeric zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Turns {
    half: Option<u8>,
}

impl Turns {
    pub const ZERO: Turns = Turns { half: Some(0) };
    pub const FLOAT: Turns = Turns { half: None };
    pub const MAX_HALF_TURNS: u8 = 6;

    /// Token used for the float sentinel in table keys.
    pub const FLOAT_TOKEN: &'static str = "fl";

    pub fn from_half_turns(half: u8) -> Result<Self> {
        if half > Self::MAX_HALF_TURNS {
            return Err(Error::InvalidValue { kind: "turns", value: format!("{half} half-turns") });
        }
        Ok(Turns { half: Some(half) })
    }

    /// Build from a numeric turn value (`0`, `0.5`, ... `3`).
    pub fn new(value: f64) -> Result<Self> {
        let doubled = value * 2.0;
        if !doubled.is_finite() || doubled.fract() != 0.0 || doubled < 0.0 {
            return Err(Error::InvalidValue { kind: "turns", value: value.to_string() });
        }
        Self::from_half_turns(doubled as u8)
            .map_err(|_| Error::InvalidValue { kind: "turns", value: value.to_string() })
    }

    pub fn is_float(self) -> bool {
        self.half.is_none()
    }

    pub fn half_turns(self) -> Option<u8> {
        self.half
    }

    pub fn as_f64(self) -> Option<f64> {
        self.half.map(|h| f64::from(h) / 2.0)
    }
}

impl Default for Turns {
    fn default() -> Self {
        Turns::ZERO
    }
}

impl fmt::Display for Turns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.half {
            None => f.write_str(Self::FLOAT_TOKEN),
            Some(h) if h % 2 == 0 => write!(f, "{}", h / 2),
            Some(h) => write!(f, "{}.5", h / 2),
        }
    }
}

impl FromStr for Turns {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed == Self::FLOAT_TOKEN {
            return Ok(Turns::FLOAT);
        }
        let value: f64 = trimmed
            .parse()
            .map_err(|_| Error::InvalidValue { kind: "turns", value: s.to_string() })?;
        Turns::new(value)
    }
}

impl Serialize for Turns {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.as_f64() {
            Some(v) => serializer.serialize_f64(v),
            None => serializer.serialize_str(Self::FLOAT_TOKEN),
        }
    }
}

impl<'de> Deserialize<'de> for Turns {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        let parsed = match Raw::deserialize(deserializer)? {
            Raw::Number(v) => Turns::new(v),
            Raw::Text(s) => s.parse(),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Props
// ============================================================================

/// Kind of prop being manipulated. Does not affect placement geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropType {
    #[default]
    Staff,
    Club,
    Fan,
    Triad,
    Minihoop,
    Buugeng,
    Sword,
    Guitar,
    Ukulele,
    Hand,
}

// ============================================================================
// MotionDescriptor
// ============================================================================

/// Immutable description of one prop's motion within a pictograph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MotionDescriptor {
    pub color: Color,
    pub motion_type: MotionType,
    pub start_location: Location,
    pub end_location: Location,
    pub start_orientation: Orientation,
    pub end_orientation: Orientation,
    #[serde(default)]
    pub rotation_direction: RotationDirection,
    #[serde(default)]
    pub turns: Turns,
    #[serde(default)]
    pub prop_type: PropType,
}

impl MotionDescriptor {
    /// A motion with IN orientations, no rotation and zero turns.
    pub fn new(color: Color, motion_type: MotionType, start: Location, end: Location) -> Self {
        Self {
            color,
            motion_type,
            start_location: start,
            end_location: end,
            start_orientation: Orientation::In,
            end_orientation: Orientation::In,
            rotation_direction: RotationDirection::NoRotation,
            turns: if motion_type == MotionType::Float { Turns::FLOAT } else { Turns::ZERO },
            prop_type: PropType::Staff,
        }
    }

    pub fn with_orientations(mut self, start: Orientation, end: Orientation) -> Self {
        self.start_orientation = start;
        self.end_orientation = end;
        self
    }

    pub fn with_rotation(mut self, direction: RotationDirection) -> Self {
        self.rotation_direction = direction;
        self
    }

    pub fn with_turns(mut self, turns: Turns) -> Self {
        self.turns = turns;
        self
    }

    pub fn with_prop(mut self, prop_type: PropType) -> Self {
        self.prop_type = prop_type;
        self
    }

    pub fn ends_radial(&self) -> bool {
        self.end_orientation.is_radial()
    }
}
