//! Default placement key: the row a motion reads from its default table.

use super::orientation::radial_class;
use crate::model::{Layer, Letter, MotionDescriptor, PictographContext};

/// `[<radial|nonradial>_]<motionType>_to_layer<N>_<ending>`.
///
/// The orientation prefix appears only for layer 3 pictographs. Without a
/// letter there is no ending class and the key is the bare motion type.
pub fn default_placement_key(motion: &MotionDescriptor, ctx: &PictographContext) -> String {
    let Some(letter) = ctx.letter else {
        return motion.motion_type.to_string();
    };
    let layer = ctx.layer();
    let prefix = match layer {
        Layer::Three => format!("{}_", radial_class(motion)),
        Layer::One | Layer::Two => String::new(),
    };
    format!(
        "{prefix}{}_to_layer{}_{}",
        motion.motion_type,
        layer.number(),
        letter.ending_position(),
    )
}

/// Dash-variant suffix for Type 3 and Type 5 letters (`W-` → `W_dash`).
pub fn letter_suffix(letter: Letter) -> Option<String> {
    letter
        .has_dash_variant()
        .then(|| format!("{}_dash", letter.base_symbol()))
}
