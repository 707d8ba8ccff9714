//! Special-table caching under concurrent placement.
//!
//! A slow source keeps the first fetch in flight long enough for every
//! other request for the same table to pile up behind it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pictograph_placement::{
    Color, Error, GridMode, Letter, Location, MemorySource, MotionDescriptor, MotionType,
    PictographContext, PlacementEngine, Result, TableSource,
};
use pretty_assertions::assert_eq;
use serde_json::json;

const SPECIAL_A: &str = "diamond/special/radial_layer1_alpha/A_placements.json";

/// Delays every fetch, then reads from the wrapped memory source.
#[derive(Clone)]
struct SlowSource {
    inner: MemorySource,
    delay: Duration,
}

#[async_trait]
impl TableSource for SlowSource {
    async fn fetch(&self, path: &str) -> Result<Option<Vec<u8>>> {
        tokio::time::sleep(self.delay).await;
        self.inner.fetch(path).await
    }
}

/// Serves default tables normally but fails every special fetch.
#[derive(Clone, Default)]
struct FailingSpecials {
    special_calls: Arc<AtomicU64>,
}

#[async_trait]
impl TableSource for FailingSpecials {
    async fn fetch(&self, path: &str) -> Result<Option<Vec<u8>>> {
        if !path.contains("/special/") {
            return Ok(None);
        }
        self.special_calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(10)).await;
        Err(Error::TableLoad { path: path.to_string(), reason: "connection reset".into() })
    }
}

fn letter_a() -> PictographContext {
    let blue = MotionDescriptor::new(Color::Blue, MotionType::Pro, Location::N, Location::E);
    let red = MotionDescriptor::new(Color::Red, MotionType::Pro, Location::S, Location::W);
    PictographContext::new(Some(Letter::A), GridMode::Diamond, blue, red).unwrap()
}

fn memory_with_special() -> MemorySource {
    let memory = MemorySource::new();
    memory.insert_json(
        SPECIAL_A,
        &json!({ "(0, 0)": { "blue": [-5, -45], "red": [-15, -35] } }),
    );
    memory
}

async fn slow_engine(memory: MemorySource) -> PlacementEngine<SlowSource> {
    let source = SlowSource { inner: memory, delay: Duration::from_millis(20) };
    PlacementEngine::with_source(source).await.unwrap()
}

// ============================================================================
// 1. Both arrows of one pictograph share a single fetch
// ============================================================================

#[tokio::test]
async fn test_all_placements_fetch_special_once() {
    let memory = memory_with_special();
    let engine = slow_engine(memory.clone()).await;
    let ctx = letter_a();

    let placements = engine.calculate_all_placements(&ctx).await;
    assert_ne!(placements.blue, placements.red);
    assert_eq!(memory.fetch_count(SPECIAL_A), 1);

    // Cached from here on.
    engine.calculate_all_placements(&ctx).await;
    assert_eq!(memory.fetch_count(SPECIAL_A), 1);
    assert_eq!(engine.specials().cached_len(), 1);
}

// ============================================================================
// 2. Many tasks on a multi-thread runtime still fetch once
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_spawned_tasks_fetch_special_once() {
    let memory = memory_with_special();
    let engine = Arc::new(slow_engine(memory.clone()).await);

    let mut handles = Vec::new();
    for _ in 0..16 {
        let engine = Arc::clone(&engine);
        handles.push(tokio::spawn(async move {
            let ctx = letter_a();
            engine.calculate_adjustment(&ctx, &ctx.blue, None).await
        }));
    }

    for handle in handles {
        let adjustment = handle.await.unwrap();
        assert_eq!((adjustment.dx, adjustment.dy), (-5, -45));
    }
    assert_eq!(memory.fetch_count(SPECIAL_A), 1);
}

// ============================================================================
// 3. Invalidation forces a refetch and picks up new data
// ============================================================================

#[tokio::test]
async fn test_invalidate_refetches() {
    let memory = memory_with_special();
    let engine = slow_engine(memory.clone()).await;
    let ctx = letter_a();

    let before = engine.calculate_adjustment(&ctx, &ctx.blue, None).await;
    assert_eq!((before.dx, before.dy), (-5, -45));

    memory.insert_json(SPECIAL_A, &json!({ "(0, 0)": { "blue": [7, 8] } }));
    let stale = engine.calculate_adjustment(&ctx, &ctx.blue, None).await;
    assert_eq!((stale.dx, stale.dy), (-5, -45));

    engine.invalidate_special_cache();
    let after = engine.calculate_adjustment(&ctx, &ctx.blue, None).await;
    assert_eq!((after.dx, after.dy), (7, 8));
    assert_eq!(memory.fetch_count(SPECIAL_A), 2);
}

// ============================================================================
// 4. A missing special table is remembered as empty
// ============================================================================

#[tokio::test]
async fn test_absent_special_cached_as_empty() {
    let memory = MemorySource::new();
    let engine = slow_engine(memory.clone()).await;
    let ctx = letter_a();

    engine.calculate_all_placements(&ctx).await;
    engine.calculate_all_placements(&ctx).await;
    assert_eq!(memory.fetch_count(SPECIAL_A), 1);
}

// ============================================================================
// 5. A failing fetch is cached as empty until invalidated
// ============================================================================

#[tokio::test]
async fn test_failed_special_load_cached_until_invalidated() {
    let source = FailingSpecials::default();
    let calls = Arc::clone(&source.special_calls);
    let engine = PlacementEngine::with_source(source).await.unwrap();
    let ctx = letter_a();

    let first = engine.calculate_all_placements(&ctx).await;
    let second = engine.calculate_all_placements(&ctx).await;
    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let adjustment = engine.calculate_adjustment(&ctx, &ctx.blue, None).await;
    assert!(adjustment.is_zero());
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    engine.invalidate_special_cache();
    engine.calculate_all_placements(&ctx).await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
