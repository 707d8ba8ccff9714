//! # Pictograph Model
//!
//! Plain value types describing motions, pictographs and placements.
//! These types cross every boundary: key generation ↔ table lookup ↔
//! geometry ↔ caller.
//!
//! Design rule: no table state and no I/O here. This module is pure data.

pub mod location;
pub mod motion;
pub mod letter;
pub mod pictograph;
pub mod placement;

pub use location::{Location, Orientation, GridMode, RotationDirection};
pub use motion::{Color, MotionType, Turns, PropType, MotionDescriptor};
pub use letter::{Letter, LetterType, EndingPosition};
pub use pictograph::{PictographContext, Layer, LeadState};
pub use placement::{Adjustment, PlacementResult, PictographPlacements};
