//! Pictograph context: both motions plus letter and grid mode.

use serde::{Deserialize, Serialize};

use super::{Color, GridMode, Letter, MotionDescriptor};
use crate::{Error, Result};

/// Orientation layering of a pictograph's ending state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Both props end radial (IN/OUT).
    One,
    /// Both props end non-radial (CLOCK/COUNTER).
    Two,
    /// One radial, one non-radial.
    Three,
}

impl Layer {
    pub fn number(self) -> u8 {
        match self {
            Layer::One => 1,
            Layer::Two => 2,
            Layer::Three => 3,
        }
    }
}

/// Whether a motion leads or trails its partner in S/T style letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadState {
    Leading,
    Trailing,
}

impl LeadState {
    pub fn as_str(self) -> &'static str {
        match self {
            LeadState::Leading => "leading",
            LeadState::Trailing => "trailing",
        }
    }
}

/// Everything about a pictograph the placement rules read.
///
/// Holds both motions by value so cross-motion rules never need
/// back-references between motions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawContext")]
pub struct PictographContext {
    pub letter: Option<Letter>,
    pub grid_mode: GridMode,
    pub blue: MotionDescriptor,
    pub red: MotionDescriptor,
}

/// Wire form of a context, checked by [`PictographContext::new`].
#[derive(Deserialize)]
struct RawContext {
    letter: Option<Letter>,
    grid_mode: GridMode,
    blue: MotionDescriptor,
    red: MotionDescriptor,
}

impl TryFrom<RawContext> for PictographContext {
    type Error = Error;

    fn try_from(raw: RawContext) -> Result<Self> {
        Self::new(raw.letter, raw.grid_mode, raw.blue, raw.red)
    }
}

impl PictographContext {
    /// Build a context; the motions must carry their matching colors.
    pub fn new(
        letter: Option<Letter>,
        grid_mode: GridMode,
        blue: MotionDescriptor,
        red: MotionDescriptor,
    ) -> Result<Self> {
        if blue.color != Color::Blue || red.color != Color::Red {
            return Err(Error::InvalidValue {
                kind: "pictograph motions",
                value: format!("blue slot holds {}, red slot holds {}", blue.color, red.color),
            });
        }
        Ok(Self { letter, grid_mode, blue, red })
    }

    pub fn motion(&self, color: Color) -> &MotionDescriptor {
        match color {
            Color::Blue => &self.blue,
            Color::Red => &self.red,
        }
    }

    pub fn other_motion(&self, color: Color) -> &MotionDescriptor {
        self.motion(color.other())
    }

    pub fn all_radial(&self) -> bool {
        self.blue.ends_radial() && self.red.ends_radial()
    }

    pub fn all_nonradial(&self) -> bool {
        !self.blue.ends_radial() && !self.red.ends_radial()
    }

    /// One motion ends radial while the other ends non-radial.
    pub fn has_hybrid_orientations(&self) -> bool {
        self.blue.ends_radial() != self.red.ends_radial()
    }

    pub fn layer(&self) -> Layer {
        if self.all_radial() {
            Layer::One
        } else if self.all_nonradial() {
            Layer::Two
        } else {
            Layer::Three
        }
    }

    /// Lead state of the motion with `color`.
    ///
    /// The leading motion starts where its partner ends. Returns `None`
    /// when neither motion follows the other.
    pub fn lead_state(&self, color: Color) -> Option<LeadState> {
        let this = self.motion(color);
        let other = self.other_motion(color);
        if this.start_location == other.end_location && this.start_location != other.start_location {
            Some(LeadState::Leading)
        } else if other.start_location == this.end_location && this.start_location != other.start_location {
            Some(LeadState::Trailing)
        } else {
            None
        }
    }
}
