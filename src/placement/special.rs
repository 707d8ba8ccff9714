//! Special placement overrides, loaded lazily per letter.
//!
//! One document per (grid mode, orientation key, letter):
//!
//! ```json
//! { "(0, 1.5)": { "blue": [10, -5], "pro": [0, 20] } }
//! ```
//!
//! ```text
//! (grid, ori_key, letter) ──► cache cell ──► OnceCell::get_or_init ──► source.fetch
//!                                 │                 ▲
//!                                 └── concurrent ───┘  (waits on the same load)
//! ```
//!
//! A cell is filled exactly once. Absent, unreadable and malformed
//! documents all fill it with an empty table; nothing is retried until
//! [`SpecialPlacements::invalidate`] drops the cells.

use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::Mutex;
use smallvec::{smallvec, SmallVec};
use tokio::sync::OnceCell;

use crate::keys::{attribute_key, orientation_key, turns_tuple};
use crate::model::{Adjustment, Color, GridMode, Letter, MotionDescriptor, PictographContext, Turns};
use crate::source::{special_table_path, TableSource};
use crate::{Error, Result};

/// Bucket key → adjustment, for one turns tuple.
pub type SpecialEntry = HashMap<String, Adjustment>;

/// A validated `{ turnsTuple: { key: [dx, dy] } }` document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecialTable {
    entries: HashMap<String, SpecialEntry>,
}

impl SpecialTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a special document, re-keying every entry to the canonical
    /// turns tuple so `"(1.0, 0)"` is stored as `"(1, 0)"`.
    pub fn from_json(name: &str, bytes: &[u8]) -> Result<Self> {
        let raw: HashMap<String, SpecialEntry> = serde_json::from_slice(bytes)
            .map_err(|e| Error::MalformedTable { table: name.to_string(), reason: e.to_string() })?;

        let mut entries = HashMap::with_capacity(raw.len());
        for (key, entry) in raw {
            let Some((blue, red)) = parse_turns_tuple(&key) else {
                return Err(Error::MalformedTable {
                    table: name.to_string(),
                    reason: format!("'{key}' is not a turns tuple"),
                });
            };
            let canonical = format!("({blue}, {red})");
            if entries.insert(canonical.clone(), entry).is_some() {
                return Err(Error::MalformedTable {
                    table: name.to_string(),
                    reason: format!("'{key}' duplicates turns tuple {canonical}"),
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn entry(&self, turns_tuple: &str) -> Option<&SpecialEntry> {
        self.entries.get(turns_tuple)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `"(<turns>, <turns>)"` with each side a legal turn value or `fl`.
fn parse_turns_tuple(key: &str) -> Option<(Turns, Turns)> {
    let (blue, red) = key
        .trim()
        .strip_prefix('(')?
        .strip_suffix(')')?
        .split_once(',')?;
    Some((blue.parse().ok()?, red.parse().ok()?))
}

/// Cache key: one special document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpecialKey {
    pub grid_mode: GridMode,
    pub orientation_key: String,
    pub letter: Letter,
}

impl SpecialKey {
    pub fn path(&self) -> String {
        special_table_path(self.grid_mode, &self.orientation_key, self.letter)
    }
}

type Cell = Arc<OnceCell<Arc<SpecialTable>>>;

/// Lazily loaded, memoized special placement tables.
pub struct SpecialPlacements<S: TableSource> {
    source: Arc<S>,
    cells: Mutex<HashMap<SpecialKey, Cell>>,
}

impl<S: TableSource> SpecialPlacements<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source, cells: Mutex::new(HashMap::new()) }
    }

    /// The table for `key`, loading it on first use.
    ///
    /// Concurrent callers for the same key share one fetch.
    pub async fn table(&self, key: &SpecialKey) -> Arc<SpecialTable> {
        let cell = {
            let mut cells = self.cells.lock();
            cells.entry(key.clone()).or_default().clone()
        };
        cell.get_or_init(|| self.load(key)).await.clone()
    }

    /// The table for `key` if it has already been loaded.
    pub fn cached(&self, key: &SpecialKey) -> Option<Arc<SpecialTable>> {
        self.cells.lock().get(key).and_then(|cell| cell.get().cloned())
    }

    /// Number of keys with a cache cell (loaded or in flight).
    pub fn cached_len(&self) -> usize {
        self.cells.lock().len()
    }

    /// Drop every cached table; the next request for a key refetches it.
    pub fn invalidate(&self) {
        self.cells.lock().clear();
    }

    async fn load(&self, key: &SpecialKey) -> Arc<SpecialTable> {
        let path = key.path();
        let table = match self.source.fetch(&path).await {
            Ok(Some(bytes)) => match SpecialTable::from_json(&path, &bytes) {
                Ok(table) => {
                    tracing::debug!(%path, entries = table.len(), "loaded special placements");
                    table
                }
                Err(e) => {
                    tracing::warn!(%path, error = %e, "malformed special placements; caching empty");
                    SpecialTable::empty()
                }
            },
            Ok(None) => {
                tracing::debug!(%path, "no special placements");
                SpecialTable::empty()
            }
            Err(e) => {
                tracing::warn!(%path, error = %e, "special placement load failed; caching empty");
                SpecialTable::empty()
            }
        };
        Arc::new(table)
    }

    /// Override adjustment for `motion`, or `None` to use the default.
    ///
    /// Within the turns-tuple entry the color key is tried first (the
    /// explicit `color` if given), then the attribute key, then the motion
    /// type.
    pub async fn resolve(
        &self,
        motion: &MotionDescriptor,
        ctx: &PictographContext,
        color: Option<Color>,
    ) -> Option<Adjustment> {
        let letter = ctx.letter?;
        let key = SpecialKey {
            grid_mode: ctx.grid_mode,
            orientation_key: orientation_key(motion, ctx),
            letter,
        };
        let table = self.table(&key).await;
        let entry = table.entry(&turns_tuple(ctx))?;

        let color = color.unwrap_or(motion.color);
        lookup_keys(motion, ctx, color)
            .iter()
            .find_map(|k| entry.get(k.as_str()).copied())
    }
}

fn lookup_keys(motion: &MotionDescriptor, ctx: &PictographContext, color: Color) -> SmallVec<[String; 3]> {
    let mut keys: SmallVec<[String; 3]> = smallvec![color.to_string()];
    for candidate in [attribute_key(motion, ctx), motion.motion_type.to_string()] {
        if !keys.contains(&candidate) {
            keys.push(candidate);
        }
    }
    keys
}
