//! Grid point tables: named anchors and their pixel coordinates.
//!
//! One document per grid mode:
//!
//! ```json
//! {
//!   "hand_points":   { "n_diamond_hand_point":    { "x": 475.0, "y": 331.9 } },
//!   "layer2_points": { "ne_diamond_layer2_point": { "x": 618.1, "y": 331.9 } }
//! }
//! ```
//!
//! Anchor names are validated when a document is loaded: a name filed
//! under the wrong collection or grid mode, or a non-finite coordinate,
//! rejects the whole document.

use std::fmt;

use glam::DVec2;
use hashbrown::HashMap;
use serde::Deserialize;

use crate::model::{GridMode, Location};
use crate::{Error, Result};

const BUILTIN_DIAMOND: &str = include_str!("../../data/diamond/grid_points.json");
const BUILTIN_BOX: &str = include_str!("../../data/box/grid_points.json");

/// Which anchor collection a placement reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorKind {
    /// Hand points, used by DASH and STATIC arrows and by props.
    Hand,
    /// Layer 2 (shift) points, used by PRO, ANTI and FLOAT arrows.
    Layer2,
}

impl AnchorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AnchorKind::Hand => "hand",
            AnchorKind::Layer2 => "layer2",
        }
    }
}

impl fmt::Display for AnchorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `<location>_<gridMode>_<hand|layer2>_point`
pub fn anchor_name(location: Location, mode: GridMode, kind: AnchorKind) -> String {
    format!("{location}_{mode}_{kind}_point")
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
struct PointDoc {
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GridDoc {
    hand_points: HashMap<String, PointDoc>,
    layer2_points: HashMap<String, PointDoc>,
}

/// Read-only anchors for one grid mode.
#[derive(Debug, Clone)]
pub struct GridPointTable {
    mode: GridMode,
    hand_points: HashMap<String, DVec2>,
    layer2_points: HashMap<String, DVec2>,
}

impl GridPointTable {
    /// Parse and validate a grid point document.
    pub fn from_json(mode: GridMode, bytes: &[u8]) -> Result<Self> {
        let doc: GridDoc = serde_json::from_slice(bytes).map_err(|e| Error::MalformedTable {
            table: format!("{mode}/grid_points.json"),
            reason: e.to_string(),
        })?;
        Ok(Self {
            mode,
            hand_points: validate_points(mode, AnchorKind::Hand, doc.hand_points)?,
            layer2_points: validate_points(mode, AnchorKind::Layer2, doc.layer2_points)?,
        })
    }

    /// The grid data shipped with the crate.
    pub fn builtin(mode: GridMode) -> Result<Self> {
        let raw = match mode {
            GridMode::Diamond => BUILTIN_DIAMOND,
            GridMode::Box => BUILTIN_BOX,
        };
        Self::from_json(mode, raw.as_bytes())
    }

    pub fn mode(&self) -> GridMode {
        self.mode
    }

    /// Look up an anchor by its full name in either collection.
    pub fn get(&self, name: &str) -> Option<DVec2> {
        self.hand_points
            .get(name)
            .or_else(|| self.layer2_points.get(name))
            .copied()
    }

    pub fn anchor(&self, location: Location, kind: AnchorKind) -> Option<DVec2> {
        let points = match kind {
            AnchorKind::Hand => &self.hand_points,
            AnchorKind::Layer2 => &self.layer2_points,
        };
        points.get(&anchor_name(location, self.mode, kind)).copied()
    }

    pub fn len(&self) -> usize {
        self.hand_points.len() + self.layer2_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn validate_points(
    mode: GridMode,
    kind: AnchorKind,
    raw: HashMap<String, PointDoc>,
) -> Result<HashMap<String, DVec2>> {
    let suffix = format!("_{mode}_{kind}_point");
    raw.into_iter()
        .map(|(name, point)| {
            let location_ok = name
                .strip_suffix(&suffix)
                .is_some_and(|loc| loc.parse::<Location>().is_ok());
            if !location_ok {
                return Err(Error::MalformedTable {
                    table: format!("{mode}/grid_points.json"),
                    reason: format!("anchor '{name}' does not match *{suffix}"),
                });
            }
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(Error::MalformedTable {
                    table: format!("{mode}/grid_points.json"),
                    reason: format!("anchor '{name}' has a non-finite coordinate"),
                });
            }
            Ok((name, DVec2::new(point.x, point.y)))
        })
        .collect()
}

/// Grid tables for both modes.
#[derive(Debug, Clone)]
pub struct GridPoints {
    pub diamond: GridPointTable,
    pub box_grid: GridPointTable,
}

impl GridPoints {
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            diamond: GridPointTable::builtin(GridMode::Diamond)?,
            box_grid: GridPointTable::builtin(GridMode::Box)?,
        })
    }

    pub fn for_mode(&self, mode: GridMode) -> &GridPointTable {
        match mode {
            GridMode::Diamond => &self.diamond,
            GridMode::Box => &self.box_grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_name_format() {
        assert_eq!(anchor_name(Location::NE, GridMode::Diamond, AnchorKind::Layer2), "ne_diamond_layer2_point");
        assert_eq!(anchor_name(Location::S, GridMode::Box, AnchorKind::Hand), "s_box_hand_point");
    }

    #[test]
    fn test_builtin_tables_load() {
        let grids = GridPoints::builtin().unwrap();
        assert_eq!(grids.diamond.len(), 8);
        assert_eq!(grids.box_grid.len(), 8);
        let n = grids.diamond.anchor(Location::N, AnchorKind::Hand).unwrap();
        assert!(n.abs_diff_eq(DVec2::new(475.0, 331.9), 1e-9));
        let ne = grids.diamond.get("ne_diamond_layer2_point").unwrap();
        assert!(ne.abs_diff_eq(DVec2::new(618.1, 331.9), 1e-9));
    }

    #[test]
    fn test_missing_anchor_is_none() {
        let diamond = GridPointTable::builtin(GridMode::Diamond).unwrap();
        assert!(diamond.anchor(Location::NE, AnchorKind::Hand).is_none());
        assert!(diamond.get("center_point").is_none());
    }

    #[test]
    fn test_rejects_misfiled_anchor() {
        let doc = br#"{"hand_points": {"n_box_hand_point": {"x": 1, "y": 2}}, "layer2_points": {}}"#;
        let err = GridPointTable::from_json(GridMode::Diamond, doc).unwrap_err();
        assert!(matches!(err, Error::MalformedTable { .. }));
    }

    #[test]
    fn test_rejects_missing_collection() {
        let doc = br#"{"hand_points": {}}"#;
        assert!(GridPointTable::from_json(GridMode::Box, doc).is_err());
    }
}
