//! Default placement tables and their tiered resolver.
//!
//! One table per (grid mode, motion type):
//!
//! ```json
//! { "pro_to_layer1_alpha": { "0": [0, 0], "0.5": [-5, 10], "fl": [0, 0] } }
//! ```
//!
//! Tables are validated as they load: every turns key must be a legal turn
//! value and every adjustment a pair of integers. A malformed default table
//! is an error at engine construction, not a silent zero at lookup time.

use hashbrown::HashMap;
use smallvec::{smallvec, SmallVec};

use crate::keys::letter_suffix;
use crate::model::{Adjustment, GridMode, Letter, MotionType, Turns};
use crate::source::{default_table_path, TableSource};
use crate::{Error, Result};

/// Adjustments for one composite key, by turns.
pub type TurnsRow = HashMap<Turns, Adjustment>;

/// A validated `{ compositeKey: { turns: [dx, dy] } }` document.
#[derive(Debug, Clone, Default)]
pub struct PlacementTable {
    rows: HashMap<String, TurnsRow>,
}

impl PlacementTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a table document; `name` is used in errors.
    pub fn from_json(name: &str, bytes: &[u8]) -> Result<Self> {
        let raw: HashMap<String, HashMap<String, Adjustment>> = serde_json::from_slice(bytes)
            .map_err(|e| Error::MalformedTable { table: name.to_string(), reason: e.to_string() })?;

        let mut rows = HashMap::with_capacity(raw.len());
        for (key, by_turns) in raw {
            let mut row = TurnsRow::with_capacity(by_turns.len());
            for (turns, adjustment) in by_turns {
                let turns: Turns = turns.parse().map_err(|_| Error::MalformedTable {
                    table: name.to_string(),
                    reason: format!("key '{key}' has invalid turns '{turns}'"),
                })?;
                row.insert(turns, adjustment);
            }
            rows.insert(key, row);
        }
        Ok(Self { rows })
    }

    pub fn insert(&mut self, key: impl Into<String>, turns: Turns, adjustment: Adjustment) {
        self.rows.entry(key.into()).or_default().insert(turns, adjustment);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.rows.contains_key(key)
    }

    pub fn lookup(&self, key: &str, turns: Turns) -> Option<Adjustment> {
        self.rows.get(key).and_then(|row| row.get(&turns)).copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Candidate keys in precedence order: letter-suffixed, plain, bare type.
///
/// Duplicates are dropped, so a key equal to the bare motion type is only
/// tried once.
pub fn fallback_keys(
    motion_type: MotionType,
    key: &str,
    letter: Option<Letter>,
) -> SmallVec<[String; 3]> {
    let mut keys: SmallVec<[String; 3]> = smallvec![];
    if let Some(suffix) = letter.and_then(letter_suffix) {
        keys.push(format!("{key}_{suffix}"));
    }
    keys.push(key.to_string());
    let bare = motion_type.as_str();
    if key != bare {
        keys.push(bare.to_string());
    }
    keys
}

/// All default tables, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct DefaultPlacements {
    tables: HashMap<(GridMode, MotionType), PlacementTable>,
}

impl DefaultPlacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every (grid mode, motion type) table from `source`.
    ///
    /// Absent documents become empty tables. Unreadable or malformed
    /// documents fail the load.
    pub async fn load<S: TableSource + ?Sized>(source: &S) -> Result<Self> {
        let mut placements = Self::new();
        for mode in GridMode::ALL {
            for motion_type in MotionType::ALL {
                let path = default_table_path(mode, motion_type);
                let table = match source.fetch(&path).await? {
                    Some(bytes) => PlacementTable::from_json(&path, &bytes)?,
                    None => {
                        tracing::debug!(%path, "no default table; using empty");
                        PlacementTable::new()
                    }
                };
                placements.insert(mode, motion_type, table);
            }
        }
        Ok(placements)
    }

    pub fn insert(&mut self, mode: GridMode, motion_type: MotionType, table: PlacementTable) {
        self.tables.insert((mode, motion_type), table);
    }

    pub fn table(&self, mode: GridMode, motion_type: MotionType) -> Option<&PlacementTable> {
        self.tables.get(&(mode, motion_type))
    }

    /// First tier that has a row for `turns`, with the key that matched.
    pub fn resolve_tier(
        &self,
        mode: GridMode,
        motion_type: MotionType,
        key: &str,
        letter: Option<Letter>,
        turns: Turns,
    ) -> Option<(String, Adjustment)> {
        let table = self.table(mode, motion_type)?;
        fallback_keys(motion_type, key, letter)
            .into_iter()
            .find_map(|candidate| table.lookup(&candidate, turns).map(|adj| (candidate, adj)))
    }

    /// Default adjustment; (0, 0) when no tier matches.
    pub fn resolve(
        &self,
        mode: GridMode,
        motion_type: MotionType,
        key: &str,
        letter: Option<Letter>,
        turns: Turns,
    ) -> Adjustment {
        match self.resolve_tier(mode, motion_type, key, letter, turns) {
            Some((_, adjustment)) => adjustment,
            None => {
                tracing::debug!(%mode, %motion_type, key, %turns, "no default placement entry");
                Adjustment::ZERO
            }
        }
    }
}
