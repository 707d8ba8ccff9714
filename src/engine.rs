//! Placement orchestrator.
//!
//! Composes location, anchor, rotation, adjustment and mirroring into a
//! [`PlacementResult`] for each motion of a pictograph.
//!
//! ```text
//! motion + context
//!   → arrow_location            (no location ⇒ ORIGIN result)
//!   → grid anchor               (missing ⇒ ORIGIN result, warn)
//!   → calculate_rotation
//!   → special ▸ default adjustment, rotated into world space
//!   → should_mirror
//! ```
//!
//! Nothing in this path fails: gaps in the data degrade to a best-effort
//! placement and are logged.

use std::sync::Arc;

use glam::DVec2;

use crate::geometry::{arrow_location, calculate_rotation, should_mirror, AnchorKind, GridPointTable, GridPoints};
use crate::keys::default_placement_key;
use crate::model::*;
use crate::placement::{DefaultPlacements, SpecialPlacements};
use crate::source::{grid_points_path, AnySource, MemorySource, SourceConfig, TableSource};
use crate::{Error, Result};

/// Construction options.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Use the grid anchors shipped with the crate instead of reading
    /// `<gridMode>/grid_points.json` from the source.
    pub use_builtin_grid: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self { use_builtin_grid: true }
    }
}

/// The placement engine: tables, caches and the placement operations.
pub struct PlacementEngine<S: TableSource> {
    source: Arc<S>,
    grids: GridPoints,
    defaults: DefaultPlacements,
    specials: SpecialPlacements<S>,
}

impl<S: TableSource> PlacementEngine<S> {
    /// Build an engine over `source` with default options.
    pub async fn with_source(source: S) -> Result<Self> {
        Self::with_options(source, EngineOptions::default()).await
    }

    /// Build an engine, loading grid data (unless built in) and every
    /// default table up front.
    pub async fn with_options(source: S, options: EngineOptions) -> Result<Self> {
        let grids = if options.use_builtin_grid {
            GridPoints::builtin()?
        } else {
            GridPoints {
                diamond: load_grid(&source, GridMode::Diamond).await?,
                box_grid: load_grid(&source, GridMode::Box).await?,
            }
        };
        let defaults = DefaultPlacements::load(&source).await?;
        Ok(Self::from_parts(source, grids, defaults))
    }

    /// Assemble an engine from already-loaded parts.
    pub fn from_parts(source: S, grids: GridPoints, defaults: DefaultPlacements) -> Self {
        let source = Arc::new(source);
        Self {
            specials: SpecialPlacements::new(Arc::clone(&source)),
            source,
            grids,
            defaults,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn grid_points(&self) -> &GridPoints {
        &self.grids
    }

    pub fn defaults(&self) -> &DefaultPlacements {
        &self.defaults
    }

    pub fn specials(&self) -> &SpecialPlacements<S> {
        &self.specials
    }

    /// Drop cached special tables so they are fetched again on demand.
    pub fn invalidate_special_cache(&self) {
        self.specials.invalidate();
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Compass location of the arrow for `motion`.
    pub fn calculate_location(&self, motion: &MotionDescriptor, _ctx: &PictographContext) -> Option<Location> {
        arrow_location(motion)
    }

    /// Adjustment for `motion`: the special override when one exists,
    /// otherwise the tiered default.
    pub async fn calculate_adjustment(
        &self,
        ctx: &PictographContext,
        motion: &MotionDescriptor,
        color: Option<Color>,
    ) -> Adjustment {
        if let Some(special) = self.specials.resolve(motion, ctx, color).await {
            return special;
        }
        let key = default_placement_key(motion, ctx);
        self.defaults
            .resolve(ctx.grid_mode, motion.motion_type, &key, ctx.letter, motion.turns)
    }

    /// Final arrow placement for one motion of `ctx`.
    pub async fn calculate_placement(&self, ctx: &PictographContext, motion: &MotionDescriptor) -> PlacementResult {
        let Some(location) = self.calculate_location(motion, ctx) else {
            return PlacementResult::ORIGIN;
        };

        let kind = if motion.motion_type.uses_hand_point() { AnchorKind::Hand } else { AnchorKind::Layer2 };
        let Some(anchor) = self.anchor(ctx.grid_mode, location, kind) else {
            return PlacementResult::ORIGIN;
        };
        let rotation = f64::from(calculate_rotation(location, motion.end_orientation));
        let adjustment = self.calculate_adjustment(ctx, motion, None).await;

        // Adjustments are authored in the arrow's frame.
        let offset = DVec2::from_angle(rotation.to_radians()).rotate(adjustment.as_vec());
        let position = anchor + offset;

        PlacementResult {
            x: position.x,
            y: position.y,
            rotation_degrees: rotation,
            mirrored: should_mirror(motion.motion_type, motion.rotation_direction),
        }
    }

    /// Arrow placements for both motions, resolved concurrently.
    pub async fn calculate_all_placements(&self, ctx: &PictographContext) -> PictographPlacements {
        let (blue, red) = tokio::join!(
            self.calculate_placement(ctx, &ctx.blue),
            self.calculate_placement(ctx, &ctx.red),
        );
        PictographPlacements { blue, red }
    }

    /// Prop placement: the hand point at the motion's end, turned by its
    /// end orientation. Props are never mirrored or adjusted.
    pub fn calculate_prop_placement(&self, ctx: &PictographContext, motion: &MotionDescriptor) -> PlacementResult {
        let location = motion.end_location;
        let Some(anchor) = self.anchor(ctx.grid_mode, location, AnchorKind::Hand) else {
            return PlacementResult::ORIGIN;
        };
        PlacementResult {
            x: anchor.x,
            y: anchor.y,
            rotation_degrees: f64::from(calculate_rotation(location, motion.end_orientation)),
            mirrored: false,
        }
    }

    /// Grid anchor for `location`, or `None` (logged) when the grid has no
    /// such point.
    fn anchor(&self, mode: GridMode, location: Location, kind: AnchorKind) -> Option<DVec2> {
        let point = self.grids.for_mode(mode).anchor(location, kind);
        if point.is_none() {
            let err = Error::MissingGridAnchor(crate::geometry::anchor_name(location, mode, kind));
            tracing::warn!(error = %err, "placing at origin");
        }
        point
    }
}

impl PlacementEngine<MemorySource> {
    /// Engine over an empty in-memory source with built-in grid data.
    pub async fn open_memory() -> Result<Self> {
        Self::with_source(MemorySource::new()).await
    }
}

impl PlacementEngine<AnySource> {
    /// Engine over the source described by `config`.
    pub async fn open(config: &SourceConfig) -> Result<Self> {
        Self::with_source(AnySource::from_config(config)).await
    }
}

async fn load_grid<S: TableSource>(source: &S, mode: GridMode) -> Result<GridPointTable> {
    let path = grid_points_path(mode);
    match source.fetch(&path).await? {
        Some(bytes) => GridPointTable::from_json(mode, &bytes),
        None => Err(Error::NotFound(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pro_n_to_e() -> PictographContext {
        let blue = MotionDescriptor::new(Color::Blue, MotionType::Pro, Location::N, Location::E)
            .with_rotation(RotationDirection::Clockwise);
        let red = MotionDescriptor::new(Color::Red, MotionType::Pro, Location::S, Location::W)
            .with_rotation(RotationDirection::Clockwise);
        PictographContext::new(None, GridMode::Diamond, blue, red).unwrap()
    }

    #[tokio::test]
    async fn test_no_tables_places_on_anchor() {
        let engine = PlacementEngine::open_memory().await.unwrap();
        let ctx = pro_n_to_e();
        let result = engine.calculate_placement(&ctx, &ctx.blue).await;

        let anchor = engine.grid_points().diamond.get("ne_diamond_layer2_point").unwrap();
        assert_eq!(result.position(), anchor);
        assert_eq!(result.rotation_degrees, 135.0);
        assert!(!result.mirrored);
    }

    #[tokio::test]
    async fn test_unmapped_location_degrades_to_origin() {
        let engine = PlacementEngine::open_memory().await.unwrap();
        let mut ctx = pro_n_to_e();
        ctx.blue.end_location = Location::S;
        let result = engine.calculate_placement(&ctx, &ctx.blue).await;
        assert_eq!(result, PlacementResult::ORIGIN);
    }

    #[tokio::test]
    async fn test_missing_anchor_places_at_origin() {
        let source = MemorySource::new();
        source.insert("diamond/default/static_placements.json", r#"{ "static": { "0": [30, 40] } }"#);
        let engine = PlacementEngine::with_source(source).await.unwrap();
        // Static on an intercardinal has no diamond hand point.
        let blue = MotionDescriptor::new(Color::Blue, MotionType::Static, Location::NE, Location::NE)
            .with_rotation(RotationDirection::CounterClockwise);
        let red = MotionDescriptor::new(Color::Red, MotionType::Static, Location::S, Location::S);
        let ctx = PictographContext::new(None, GridMode::Diamond, blue, red).unwrap();

        let result = engine.calculate_placement(&ctx, &ctx.blue).await;
        assert_eq!(result, PlacementResult::ORIGIN);

        // The partner on a cardinal still gets its adjustment.
        let red = engine.calculate_placement(&ctx, &ctx.red).await;
        assert_ne!(red, PlacementResult::ORIGIN);
    }

    #[tokio::test]
    async fn test_prop_without_anchor_places_at_origin() {
        let engine = PlacementEngine::open_memory().await.unwrap();
        let blue = MotionDescriptor::new(Color::Blue, MotionType::Pro, Location::NE, Location::NW)
            .with_orientations(Orientation::In, Orientation::Out);
        let red = MotionDescriptor::new(Color::Red, MotionType::Static, Location::S, Location::S);
        let ctx = PictographContext::new(None, GridMode::Diamond, blue, red).unwrap();
        assert_eq!(engine.calculate_prop_placement(&ctx, &ctx.blue), PlacementResult::ORIGIN);
    }

    #[tokio::test]
    async fn test_prop_placement() {
        let engine = PlacementEngine::open_memory().await.unwrap();
        let ctx = pro_n_to_e();
        let prop = engine.calculate_prop_placement(&ctx, &ctx.blue);
        let anchor = engine.grid_points().diamond.get("e_diamond_hand_point").unwrap();
        assert_eq!(prop.position(), anchor);
        assert_eq!(prop.rotation_degrees, 180.0);
        assert!(!prop.mirrored);
    }

    #[tokio::test]
    async fn test_grid_from_source_is_required_when_not_builtin() {
        let options = EngineOptions { use_builtin_grid: false };
        let result = PlacementEngine::with_options(MemorySource::new(), options).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
