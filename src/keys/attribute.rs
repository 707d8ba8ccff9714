//! Attribute key: which bucket of a special-placement entry an arrow reads.
//!
//! The precedence is an ordered table of rules. The first rule whose
//! predicate holds *and* which produces a key wins; when none does, the
//! motion type is the key:
//!
//! | # | Rule            | Predicate                          | Key                          |
//! |---|-----------------|------------------------------------|------------------------------|
//! | 1 | lead state      | letter ∈ {S, T}                    | `leading` / `trailing`       |
//! | 2 | hybrid layering | end orientations mixed             | `<type>_from_layer{1,2}`     |
//! | 3 | non-hybrid      | letter ∈ non-hybrid class, or none | color                        |
//! | - | fallback        |                                    | motion type                  |

use crate::model::{Letter, MotionDescriptor, PictographContext};

/// Letters whose arrows are keyed by lead state.
pub const LEAD_STATE_LETTERS: [Letter; 2] = [Letter::S, Letter::T];

/// Letters whose two motions share a motion type; keyed by color.
pub const NON_HYBRID_LETTERS: [Letter; 18] = [
    // Type 1, same-type shifts
    Letter::A, Letter::B, Letter::D, Letter::E, Letter::G, Letter::H,
    Letter::J, Letter::K, Letter::M, Letter::N, Letter::P, Letter::Q,
    // Type 5
    Letter::PhiDash, Letter::PsiDash, Letter::LambdaDash,
    // Type 6
    Letter::Alpha, Letter::Beta, Letter::Gamma,
];

pub fn is_lead_state_letter(letter: Letter) -> bool {
    LEAD_STATE_LETTERS.contains(&letter)
}

pub fn is_non_hybrid_letter(letter: Letter) -> bool {
    NON_HYBRID_LETTERS.contains(&letter)
}

/// One row of the precedence table.
pub struct AttributeRule {
    pub name: &'static str,
    applies: fn(&MotionDescriptor, &PictographContext) -> bool,
    key: fn(&MotionDescriptor, &PictographContext) -> Option<String>,
}

pub const ATTRIBUTE_RULES: [AttributeRule; 3] = [
    AttributeRule { name: "lead_state", applies: letter_is_lead_state, key: lead_state_key },
    AttributeRule { name: "hybrid_layer", applies: has_hybrid_orientations, key: hybrid_layer_key },
    AttributeRule { name: "non_hybrid_color", applies: letter_is_non_hybrid, key: color_key },
];

fn letter_is_lead_state(_: &MotionDescriptor, ctx: &PictographContext) -> bool {
    ctx.letter.is_some_and(is_lead_state_letter)
}

fn has_hybrid_orientations(_: &MotionDescriptor, ctx: &PictographContext) -> bool {
    ctx.has_hybrid_orientations()
}

fn letter_is_non_hybrid(_: &MotionDescriptor, ctx: &PictographContext) -> bool {
    ctx.letter.is_none_or(is_non_hybrid_letter)
}

fn lead_state_key(motion: &MotionDescriptor, ctx: &PictographContext) -> Option<String> {
    ctx.lead_state(motion.color).map(|s| s.as_str().to_string())
}

fn hybrid_layer_key(motion: &MotionDescriptor, _: &PictographContext) -> Option<String> {
    let layer = if motion.ends_radial() { 1 } else { 2 };
    Some(format!("{}_from_layer{layer}", motion.motion_type))
}

fn color_key(motion: &MotionDescriptor, _: &PictographContext) -> Option<String> {
    Some(motion.color.to_string())
}

/// Resolve the attribute key for `motion` by walking [`ATTRIBUTE_RULES`],
/// falling back to the motion type.
pub fn attribute_key(motion: &MotionDescriptor, ctx: &PictographContext) -> String {
    ATTRIBUTE_RULES
        .iter()
        .filter(|rule| (rule.applies)(motion, ctx))
        .find_map(|rule| {
            let key = (rule.key)(motion, ctx);
            if key.is_none() {
                tracing::debug!(rule = rule.name, color = %motion.color, "attribute rule produced no key");
            }
            key
        })
        .unwrap_or_else(|| motion.motion_type.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;

    fn build(
        letter: Letter,
        blue: (MotionType, Location, Location, Orientation),
        red: (MotionType, Location, Location, Orientation),
    ) -> PictographContext {
        let b = MotionDescriptor::new(Color::Blue, blue.0, blue.1, blue.2)
            .with_orientations(Orientation::In, blue.3);
        let r = MotionDescriptor::new(Color::Red, red.0, red.1, red.2)
            .with_orientations(Orientation::In, red.3);
        PictographContext::new(Some(letter), GridMode::Diamond, b, r).unwrap()
    }

    #[test]
    fn test_lead_state_wins_over_everything() {
        // Hybrid orientations too, lead state still takes precedence.
        let ctx = build(
            Letter::S,
            (MotionType::Pro, Location::W, Location::N, Orientation::In),
            (MotionType::Pro, Location::N, Location::E, Orientation::Clock),
        );
        assert_eq!(attribute_key(&ctx.red, &ctx), "leading");
        assert_eq!(attribute_key(&ctx.blue, &ctx), "trailing");
    }

    #[test]
    fn test_lead_state_letter_without_leader_falls_through() {
        let ctx = build(
            Letter::T,
            (MotionType::Anti, Location::N, Location::E, Orientation::In),
            (MotionType::Anti, Location::S, Location::W, Orientation::In),
        );
        // Not hybrid, T not in non-hybrid class: motion type.
        assert_eq!(attribute_key(&ctx.blue, &ctx), "anti");
    }

    #[test]
    fn test_hybrid_orientation_keys() {
        let ctx = build(
            Letter::C,
            (MotionType::Pro, Location::N, Location::E, Orientation::Out),
            (MotionType::Anti, Location::S, Location::W, Orientation::Counter),
        );
        assert_eq!(attribute_key(&ctx.blue, &ctx), "pro_from_layer1");
        assert_eq!(attribute_key(&ctx.red, &ctx), "anti_from_layer2");
    }

    #[test]
    fn test_non_hybrid_letter_uses_color() {
        let ctx = build(
            Letter::A,
            (MotionType::Pro, Location::N, Location::E, Orientation::In),
            (MotionType::Pro, Location::S, Location::W, Orientation::Out),
        );
        assert_eq!(attribute_key(&ctx.blue, &ctx), "blue");
        assert_eq!(attribute_key(&ctx.red, &ctx), "red");
    }

    #[test]
    fn test_other_letters_use_motion_type() {
        let ctx = build(
            Letter::W,
            (MotionType::Pro, Location::N, Location::E, Orientation::In),
            (MotionType::Static, Location::S, Location::S, Orientation::In),
        );
        assert_eq!(attribute_key(&ctx.blue, &ctx), "pro");
        assert_eq!(attribute_key(&ctx.red, &ctx), "static");
    }

    #[test]
    fn test_motion_type_when_no_rule_applies() {
        let ctx = build(
            Letter::W,
            (MotionType::Anti, Location::N, Location::E, Orientation::Out),
            (MotionType::Static, Location::S, Location::S, Orientation::In),
        );
        assert!(ATTRIBUTE_RULES.iter().all(|rule| !(rule.applies)(&ctx.blue, &ctx)));
        assert_eq!(attribute_key(&ctx.blue, &ctx), "anti");
    }

    #[test]
    fn test_no_letter_uses_color() {
        let b = MotionDescriptor::new(Color::Blue, MotionType::Dash, Location::N, Location::S);
        let r = MotionDescriptor::new(Color::Red, MotionType::Dash, Location::E, Location::W);
        let ctx = PictographContext::new(None, GridMode::Box, b, r).unwrap();
        assert_eq!(attribute_key(&ctx.red, &ctx), "red");
    }

    #[test]
    fn test_letter_classes_are_disjoint() {
        for letter in LEAD_STATE_LETTERS {
            assert!(!is_non_hybrid_letter(letter));
        }
    }
}
