//! Adjustment resolvers.
//!
//! Two layers, consulted in order by the engine:
//!
//! 1. `special`: letter- and configuration-specific overrides, lazily
//!    loaded per (grid mode, orientation key, letter).
//! 2. `default`: generic adjustments per (grid mode, motion type) with a
//!    three-tier key fallback ending in (0, 0).

pub mod default;
pub mod special;

pub use default::{fallback_keys, DefaultPlacements, PlacementTable};
pub use special::{SpecialKey, SpecialPlacements, SpecialTable};
