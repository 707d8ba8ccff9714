//! Horizontal flip decision for arrow glyphs.

use crate::model::{MotionType, RotationDirection};

/// Whether an arrow is drawn mirrored.
///
/// ANTI arrows flip when rotating clockwise; every other motion type flips
/// when rotating counter-clockwise. No rotation never flips.
pub fn should_mirror(motion_type: MotionType, rotation: RotationDirection) -> bool {
    match (motion_type, rotation) {
        (_, RotationDirection::NoRotation) => false,
        (MotionType::Anti, RotationDirection::Clockwise) => true,
        (MotionType::Anti, RotationDirection::CounterClockwise) => false,
        (_, RotationDirection::Clockwise) => false,
        (_, RotationDirection::CounterClockwise) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_truth_table() {
        assert!(should_mirror(MotionType::Anti, RotationDirection::Clockwise));
        assert!(!should_mirror(MotionType::Anti, RotationDirection::CounterClockwise));
        assert!(!should_mirror(MotionType::Pro, RotationDirection::Clockwise));
        assert!(should_mirror(MotionType::Pro, RotationDirection::CounterClockwise));
        assert!(should_mirror(MotionType::Static, RotationDirection::CounterClockwise));
        assert!(!should_mirror(MotionType::Dash, RotationDirection::Clockwise));
        assert!(should_mirror(MotionType::Float, RotationDirection::CounterClockwise));
    }

    #[test]
    fn test_no_rotation_never_mirrors() {
        for motion_type in MotionType::ALL {
            assert!(!should_mirror(motion_type, RotationDirection::NoRotation));
        }
    }

    fn any_motion_type() -> impl Strategy<Value = MotionType> {
        prop::sample::select(MotionType::ALL.to_vec())
    }

    fn any_rotation() -> impl Strategy<Value = RotationDirection> {
        prop::sample::select(vec![
            RotationDirection::Clockwise,
            RotationDirection::CounterClockwise,
            RotationDirection::NoRotation,
        ])
    }

    proptest! {
        #[test]
        fn prop_mirror_is_deterministic(mt in any_motion_type(), rot in any_rotation()) {
            prop_assert_eq!(should_mirror(mt, rot), should_mirror(mt, rot));
        }

        #[test]
        fn prop_anti_is_inverse_of_pro(rot in any_rotation()) {
            if rot != RotationDirection::NoRotation {
                prop_assert_ne!(should_mirror(MotionType::Anti, rot), should_mirror(MotionType::Pro, rot));
            }
        }
    }
}
