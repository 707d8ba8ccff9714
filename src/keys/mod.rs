//! Placement key generators.
//!
//! Pure functions from a motion and its pictograph context to the strings
//! that index the placement tables. Keys must be byte-for-byte stable: the
//! same inputs always produce the same key.

pub mod orientation;
pub mod attribute;
pub mod turns;
pub mod default_key;

pub use orientation::orientation_key;
pub use attribute::{attribute_key, ATTRIBUTE_RULES, LEAD_STATE_LETTERS, NON_HYBRID_LETTERS};
pub use turns::turns_tuple;
pub use default_key::{default_placement_key, letter_suffix};
