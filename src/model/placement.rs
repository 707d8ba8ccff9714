//! Placement outputs and adjustment vectors.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Integer pixel offset in an arrow's local frame.
///
/// Serialized as a two-element array `[dx, dy]`, the form used by the
/// placement tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Adjustment {
    pub dx: i32,
    pub dy: i32,
}

impl Adjustment {
    pub const ZERO: Adjustment = Adjustment { dx: 0, dy: 0 };

    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(f64::from(self.dx), f64::from(self.dy))
    }
}

impl From<[i32; 2]> for Adjustment {
    fn from([dx, dy]: [i32; 2]) -> Self {
        Self { dx, dy }
    }
}

impl From<Adjustment> for [i32; 2] {
    fn from(a: Adjustment) -> Self {
        [a.dx, a.dy]
    }
}

/// Final position, angle and flip of one arrow or prop glyph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementResult {
    pub x: f64,
    pub y: f64,
    pub rotation_degrees: f64,
    pub mirrored: bool,
}

impl PlacementResult {
    /// Best-effort fallback: origin, no rotation, unmirrored.
    pub const ORIGIN: PlacementResult = PlacementResult {
        x: 0.0,
        y: 0.0,
        rotation_degrees: 0.0,
        mirrored: false,
    };

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// Placements for both arrows of a pictograph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PictographPlacements {
    pub blue: PlacementResult,
    pub red: PlacementResult,
}
