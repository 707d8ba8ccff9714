//! # pictograph-placement: Arrow & Prop Placement Geometry
//!
//! Resolves the motions of a two-prop pictograph into exact glyph
//! placements: pixel position, rotation angle and mirroring.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: the same motion, context and tables always give
//!    the same placement
//! 2. **Clean DTOs**: `MotionDescriptor`, `PictographContext` and
//!    `PlacementResult` cross all boundaries
//! 3. **Keys are pure functions**: key generation never touches tables
//! 4. **Never fails to place**: data gaps degrade to a best-effort result
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pictograph_placement::{
//!     Color, GridMode, Letter, Location, MotionDescriptor, MotionType,
//!     PictographContext, PlacementEngine, SourceConfig,
//! };
//!
//! # async fn example() -> pictograph_placement::Result<()> {
//! let engine = PlacementEngine::open(&SourceConfig::Directory {
//!     root: "data".into(),
//! }).await?;
//!
//! let blue = MotionDescriptor::new(Color::Blue, MotionType::Pro, Location::N, Location::E);
//! let red = MotionDescriptor::new(Color::Red, MotionType::Pro, Location::S, Location::W);
//! let ctx = PictographContext::new(Some(Letter::A), GridMode::Diamond, blue, red)?;
//!
//! let placements = engine.calculate_all_placements(&ctx).await;
//! println!("blue arrow at ({}, {})", placements.blue.x, placements.blue.y);
//! # Ok(())
//! # }
//! ```
//!
//! ## Table Sources
//!
//! | Source | Config | Description |
//! |--------|--------|-------------|
//! | Memory | `SourceConfig::Memory` | In-process documents for tests/embedding |
//! | Directory | `SourceConfig::Directory` | JSON files under a data root |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod keys;
pub mod geometry;
pub mod placement;
pub mod source;
pub mod engine;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Adjustment, Color, EndingPosition, GridMode, Layer, LeadState, Letter, LetterType,
    Location, MotionDescriptor, MotionType, Orientation, PictographContext,
    PictographPlacements, PlacementResult, PropType, RotationDirection, Turns,
};

// ============================================================================
// Re-exports: Keys and geometry
// ============================================================================

pub use keys::{attribute_key, default_placement_key, orientation_key, turns_tuple};
pub use geometry::{arrow_location, calculate_rotation, hand_path, should_mirror, HandPath};

// ============================================================================
// Re-exports: Tables, sources, engine
// ============================================================================

pub use placement::{DefaultPlacements, PlacementTable, SpecialPlacements, SpecialTable};
pub use source::{AnySource, DirSource, MemorySource, SourceConfig, TableSource};
pub use engine::{EngineOptions, PlacementEngine};

// ============================================================================
// Error Types
// ============================================================================

/// Errors surfaced to callers.
///
/// Placement itself never returns these. `MissingGridAnchor` and
/// `UnmappedLocationPair` are only logged on the degraded paths; the rest
/// come from parsing caller input and loading tables.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid {kind}: '{value}'")]
    InvalidValue { kind: &'static str, value: String },

    #[error("Missing grid anchor: {0}")]
    MissingGridAnchor(String),

    #[error("Unmapped location pair: {start} → {end}")]
    UnmappedLocationPair { start: Location, end: Location },

    #[error("Malformed table {table}: {reason}")]
    MalformedTable { table: String, reason: String },

    #[error("Table load failed for {path}: {reason}")]
    TableLoad { path: String, reason: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
