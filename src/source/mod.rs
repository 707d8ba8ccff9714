//! # Table Source Trait
//!
//! The contract between the placement engine and wherever its data files
//! live. The engine only ever asks for a document by relative path; the
//! source decides how to produce the bytes.
//!
//! ## Implementations
//!
//! | Source | Module | Description |
//! |--------|--------|-------------|
//! | `MemorySource` | `memory` | In-process documents for tests and embedding |
//! | `DirSource` | `dir` | Files under a root directory |
//!
//! ## Layout
//!
//! ```text
//! <gridMode>/grid_points.json
//! <gridMode>/default/<motionType>_placements.json
//! <gridMode>/special/<orientationKey>/<letter>_placements.json
//! ```

pub mod memory;
pub mod dir;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::model::{GridMode, Letter, MotionType};
use crate::Result;

pub use memory::MemorySource;
pub use dir::DirSource;

// ============================================================================
// Source Configuration
// ============================================================================

/// Where placement tables are read from.
#[derive(Debug, Clone)]
pub enum SourceConfig {
    /// Empty in-memory source; every table is absent.
    Memory,

    /// Files under a data root laid out as described in the module docs.
    Directory { root: PathBuf },
}

// ============================================================================
// Paths
// ============================================================================

pub fn grid_points_path(mode: GridMode) -> String {
    format!("{mode}/grid_points.json")
}

pub fn default_table_path(mode: GridMode, motion_type: MotionType) -> String {
    format!("{mode}/default/{motion_type}_placements.json")
}

pub fn special_table_path(mode: GridMode, orientation_key: &str, letter: Letter) -> String {
    format!("{mode}/special/{orientation_key}/{letter}_placements.json")
}

// ============================================================================
// TableSource Trait
// ============================================================================

/// Read-only document store for placement data.
#[async_trait]
pub trait TableSource: Send + Sync + 'static {
    /// Fetch the raw bytes of the document at `path`.
    ///
    /// `Ok(None)` means the document does not exist, which callers treat
    /// as an empty table. `Err` is reserved for read failures.
    async fn fetch(&self, path: &str) -> Result<Option<Vec<u8>>>;
}

// ============================================================================
// Configured source
// ============================================================================

/// A source chosen at runtime from a [`SourceConfig`].
#[derive(Clone)]
pub enum AnySource {
    Memory(MemorySource),
    Directory(DirSource),
}

impl AnySource {
    pub fn from_config(config: &SourceConfig) -> Self {
        match config {
            SourceConfig::Memory => AnySource::Memory(MemorySource::new()),
            SourceConfig::Directory { root } => AnySource::Directory(DirSource::new(root.clone())),
        }
    }
}

#[async_trait]
impl TableSource for AnySource {
    async fn fetch(&self, path: &str) -> Result<Option<Vec<u8>>> {
        match self {
            AnySource::Memory(source) => source.fetch(path).await,
            AnySource::Directory(source) => source.fetch(path).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(grid_points_path(GridMode::Box), "box/grid_points.json");
        assert_eq!(
            default_table_path(GridMode::Diamond, MotionType::Anti),
            "diamond/default/anti_placements.json"
        );
        assert_eq!(
            special_table_path(GridMode::Diamond, "radial_layer1_alpha", Letter::WDash),
            "diamond/special/radial_layer1_alpha/W-_placements.json"
        );
    }
}
