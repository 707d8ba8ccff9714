//! In-memory table source.
//!
//! This is the reference implementation of `TableSource`. Documents live in
//! a `HashMap` behind an `RwLock` and every fetch is counted, which lets
//! tests observe how often the engine actually goes to its source.
//!
//! Use this source for:
//! - Testing key generation and lookup precedence with hand-written tables
//! - Embedding the engine where tables are compiled into the binary

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::TableSource;
use crate::Result;

/// In-process document store.
#[derive(Clone, Default)]
pub struct MemorySource {
    inner: Arc<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    documents: RwLock<HashMap<String, Vec<u8>>>,
    /// path → number of fetches
    fetches: RwLock<HashMap<String, u64>>,
    total_fetches: AtomicU64,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store (or replace) the document at `path`.
    pub fn insert(&self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.inner.documents.write().insert(path.into(), bytes.into());
    }

    /// Store a JSON value as the document at `path`.
    pub fn insert_json(&self, path: impl Into<String>, value: &serde_json::Value) {
        self.insert(path, value.to_string());
    }

    pub fn remove(&self, path: &str) -> bool {
        self.inner.documents.write().remove(path).is_some()
    }

    /// How many times `path` has been fetched.
    pub fn fetch_count(&self, path: &str) -> u64 {
        self.inner.fetches.read().get(path).copied().unwrap_or(0)
    }

    pub fn total_fetches(&self) -> u64 {
        self.inner.total_fetches.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl TableSource for MemorySource {
    async fn fetch(&self, path: &str) -> Result<Option<Vec<u8>>> {
        self.inner.total_fetches.fetch_add(1, Ordering::Relaxed);
        *self.inner.fetches.write().entry(path.to_string()).or_default() += 1;
        Ok(self.inner.documents.read().get(path).cloned())
    }
}
