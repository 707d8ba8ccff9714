//! Orientation key: which special-placement table family applies.

use crate::model::{MotionDescriptor, PictographContext};

/// Build the orientation key for `motion` within `ctx`.
///
/// Format: `<radial|nonradial>_layer<1|2|3>_<alpha|beta|gamma>`. The first
/// segment is the placed motion's own end-orientation class, the layer
/// comes from both motions, the suffix from the letter's ending position.
/// A pictograph without a letter yields `""`.
pub fn orientation_key(motion: &MotionDescriptor, ctx: &PictographContext) -> String {
    let Some(letter) = ctx.letter else {
        return String::new();
    };
    format!(
        "{}_layer{}_{}",
        radial_class(motion),
        ctx.layer().number(),
        letter.ending_position(),
    )
}

pub(crate) fn radial_class(motion: &MotionDescriptor) -> &'static str {
    if motion.ends_radial() { "radial" } else { "nonradial" }
}
