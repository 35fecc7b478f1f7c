// ── cachebackend.rs ─────────────────────────────────────────────────────────

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{
    Arc,
    RwLock
};

use crate::holiday::region::Region;
use crate::optimizer::recommendation::Recommendation;

/// Memo key: one window search per region and year.
pub type CacheKey = (Region, i32);

pub type CachedWindows = Arc<Vec<Recommendation>>;

/// Memo behaviour of [`VacationOptimizer`](crate::optimizer::vacationoptimizer::VacationOptimizer).
///
/// A failed computation is returned to the caller and nothing is stored.
pub trait CacheBackend {
    fn get_or_compute<E>(
        &self,
        key: CacheKey,
        compute: impl FnOnce() -> Result<CachedWindows, E>
    ) -> Result<CachedWindows, E>;

    fn invalidate(&self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── single-threaded: RefCell ────────────────────────────────────────────────

#[derive(Default)]
pub struct RefCellBackend {
    cache: RefCell<HashMap<CacheKey, CachedWindows>>
}

impl RefCellBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheBackend for RefCellBackend {
    fn get_or_compute<E>(
        &self,
        key: CacheKey,
        compute: impl FnOnce() -> Result<CachedWindows, E>
    ) -> Result<CachedWindows, E> {
        if let Some(hit) = self.cache.borrow().get(&key) {
            return Ok(Arc::clone(hit));
        }
        let value = compute()?;
        self.cache.borrow_mut().insert(key, Arc::clone(&value));
        Ok(value)
    }

    fn invalidate(&self) {
        self.cache.borrow_mut().clear();
    }

    fn len(&self) -> usize {
        self.cache.borrow().len()
    }
}

// ── multi-threaded: RwLock ──────────────────────────────────────────────────
//
// Two threads missing the same key may both compute; the later insert wins.
// Poisoned guards are recovered, the map is never left half-written.

#[derive(Default)]
pub struct RwLockBackend {
    cache: RwLock<HashMap<CacheKey, CachedWindows>>
}

impl RwLockBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheBackend for RwLockBackend {
    fn get_or_compute<E>(
        &self,
        key: CacheKey,
        compute: impl FnOnce() -> Result<CachedWindows, E>
    ) -> Result<CachedWindows, E> {
        let hit = self.cache
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&key)
            .cloned();
        if let Some(hit) = hit {
            return Ok(hit);
        }

        let value = compute()?;
        self.cache
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key, Arc::clone(&value));
        Ok(value)
    }

    fn invalidate(&self) {
        self.cache.write().unwrap_or_else(|e| e.into_inner()).clear();
    }

    fn len(&self) -> usize {
        self.cache.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}
