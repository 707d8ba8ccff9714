//! Grid geometry: anchors, arrow locations, rotation angles and mirroring.
//!
//! Everything here is synchronous and table driven.

pub mod grid;
pub mod location;
pub mod rotation;
pub mod mirror;

pub use grid::{anchor_name, AnchorKind, GridPointTable, GridPoints};
pub use location::{arrow_location, hand_path, shift_location, HandPath};
pub use rotation::calculate_rotation;
pub use mirror::should_mirror;
