// src/services/cache.rs

//! Time-based cache of parsed sheets.
//!
//! Entries are keyed by sheet name and expire logically once their age
//! reaches the TTL; stale entries stay in the map until overwritten.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, TimeDelta, Utc};

use crate::models::Row;

/// Parsed rows of one sheet and when they were fetched.
#[derive(Debug, Clone)]
pub struct CachedSheet {
    pub fetched_at: DateTime<Utc>,
    pub rows: Arc<[Row]>,
}

impl CachedSheet {
    /// Whether the entry is still within `ttl` at `now`.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        now.signed_duration_since(self.fetched_at) < ttl
    }
}

/// Storage for fetched sheets, shared by everything that reads them.
pub trait SheetCache: Send + Sync {
    /// Entry stored under `sheet`, fresh or not.
    fn get(&self, sheet: &str) -> Option<CachedSheet>;

    /// Store `rows` under `sheet`, replacing any previous entry.
    fn set(&self, sheet: &str, rows: Arc<[Row]>, fetched_at: DateTime<Utc>);
}

/// In-process cache; lives as long as the value that owns it.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CachedSheet>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SheetCache for MemoryCache {
    fn get(&self, sheet: &str) -> Option<CachedSheet> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(sheet)
            .cloned()
    }

    fn set(&self, sheet: &str, rows: Arc<[Row]>, fetched_at: DateTime<Utc>) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(sheet.to_string(), CachedSheet { fetched_at, rows });
    }
}
