//! Rotation angles for props and arrows.
//!
//! Angles are screen degrees (y axis down, clockwise positive). Cardinal
//! locations read the diamond table, intercardinal locations the box table.

use crate::model::{Location, Orientation};

type AngleRow = [(Location, u16); 4];

const DIAMOND_ANGLES: [(Orientation, AngleRow); 4] = [
    (Orientation::In, [(Location::N, 90), (Location::E, 180), (Location::S, 270), (Location::W, 0)]),
    (Orientation::Out, [(Location::N, 270), (Location::E, 0), (Location::S, 90), (Location::W, 180)]),
    (Orientation::Clock, [(Location::N, 0), (Location::E, 90), (Location::S, 180), (Location::W, 270)]),
    (Orientation::Counter, [(Location::N, 180), (Location::E, 270), (Location::S, 0), (Location::W, 90)]),
];

const BOX_ANGLES: [(Orientation, AngleRow); 4] = [
    (Orientation::In, [(Location::NE, 135), (Location::SE, 225), (Location::SW, 315), (Location::NW, 45)]),
    (Orientation::Out, [(Location::NE, 315), (Location::SE, 45), (Location::SW, 135), (Location::NW, 225)]),
    (Orientation::Clock, [(Location::NE, 45), (Location::SE, 135), (Location::SW, 225), (Location::NW, 315)]),
    (Orientation::Counter, [(Location::NE, 225), (Location::SE, 315), (Location::SW, 45), (Location::NW, 135)]),
];

/// Angle in degrees for a glyph at `location` with `orientation`.
///
/// Always one of 0, 45, ..., 315; combinations missing from the tables
/// give 0.
pub fn calculate_rotation(location: Location, orientation: Orientation) -> u16 {
    let table = if location.is_cardinal() { &DIAMOND_ANGLES } else { &BOX_ANGLES };
    table
        .iter()
        .find(|(ori, _)| *ori == orientation)
        .and_then(|(_, row)| row.iter().find(|(loc, _)| *loc == location))
        .map(|(_, angle)| *angle)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_angles() {
        assert_eq!(calculate_rotation(Location::N, Orientation::In), 90);
        assert_eq!(calculate_rotation(Location::NE, Orientation::Out), 315);
        assert_eq!(calculate_rotation(Location::W, Orientation::Clock), 270);
        assert_eq!(calculate_rotation(Location::SW, Orientation::Counter), 45);
    }

    #[test]
    fn test_full_angle_table() {
        use Location::*;
        use Orientation::*;
        let expected: [(Orientation, [(Location, u16); 8]); 4] = [
            (In, [(N, 90), (E, 180), (S, 270), (W, 0), (NE, 135), (SE, 225), (SW, 315), (NW, 45)]),
            (Out, [(N, 270), (E, 0), (S, 90), (W, 180), (NE, 315), (SE, 45), (SW, 135), (NW, 225)]),
            (Clock, [(N, 0), (E, 90), (S, 180), (W, 270), (NE, 45), (SE, 135), (SW, 225), (NW, 315)]),
            (Counter, [(N, 180), (E, 270), (S, 0), (W, 90), (NE, 225), (SE, 315), (SW, 45), (NW, 135)]),
        ];
        for (orientation, row) in expected {
            for (location, angle) in row {
                assert_eq!(
                    calculate_rotation(location, orientation),
                    angle,
                    "{location} {}",
                    orientation.as_str()
                );
            }
        }
    }

    #[test]
    fn test_in_and_out_are_opposed() {
        for location in Location::ALL {
            let inward = calculate_rotation(location, Orientation::In);
            let outward = calculate_rotation(location, Orientation::Out);
            assert_eq!((inward + 180) % 360, outward, "at {location}");
        }
    }

    #[test]
    fn test_every_angle_is_an_eighth_turn() {
        for location in Location::ALL {
            for orientation in Orientation::ALL {
                let angle = calculate_rotation(location, orientation);
                assert!(angle < 360 && angle % 45 == 0);
            }
        }
    }
}
