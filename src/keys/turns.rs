//! Turns-tuple key: both motions' turn values as one lookup string.

use crate::model::PictographContext;

/// `"(<blue>, <red>)"` with the float sentinel written as `fl`.
pub fn turns_tuple(ctx: &PictographContext) -> String {
    format!("({}, {})", ctx.blue.turns, ctx.red.turns)
}
