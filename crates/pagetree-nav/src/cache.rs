//! Identity-keyed cache for flattened page sequences.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use pagetree::{Page, PageTree, TreeId, flatten};

/// Snapshot of cache activity counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from a stored sequence.
    pub hits: u64,
    /// Lookups that flattened the tree.
    pub misses: u64,
    /// Sequences currently stored.
    pub entries: usize,
}

struct CacheEntry {
    pages: Arc<[Page]>,
    last_used: u64,
}

struct CacheInner {
    entries: HashMap<TreeId, CacheEntry>,
    /// Monotonic counter backing the recency ordering.
    tick: u64,
    hits: u64,
    misses: u64,
}

impl CacheInner {
    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(id, _)| *id);
        if let Some(id) = oldest {
            self.entries.remove(&id);
            tracing::debug!(tree_id = %id, "Evicted flattened sequence");
        }
    }
}

/// Bounded cache of flattened sequences keyed by tree identity.
///
/// Keys are [`TreeId`]s: two structurally identical trees occupy separate
/// entries, and a rebuilt tree can never be served its predecessor's
/// sequence. Values are owned snapshots, so the cache holds no reference
/// to any tree. When the bound is reached the least recently used entry
/// is dropped.
pub struct FlattenCache {
    inner: Mutex<CacheInner>,
    capacity: usize,
}

impl FlattenCache {
    /// Create a cache holding at most `capacity` sequences.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "flatten cache capacity must be non-zero");
        Self {
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                tick: 0,
                hits: 0,
                misses: 0,
            }),
            capacity,
        }
    }

    /// Fetch the flattened sequence for `tree`, computing it on first use.
    ///
    /// Flattening happens outside the lock. When two callers miss on the
    /// same tree at once, the first stored sequence wins and later callers
    /// adopt it; a caller never observes a partially built sequence.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn get_or_flatten(&self, tree: &PageTree) -> Arc<[Page]> {
        let id = tree.id();

        {
            let mut guard = self.inner.lock().unwrap();
            let inner = &mut *guard;
            inner.tick += 1;
            if let Some(entry) = inner.entries.get_mut(&id) {
                entry.last_used = inner.tick;
                inner.hits += 1;
                return Arc::clone(&entry.pages);
            }
            inner.misses += 1;
        }

        let pages: Arc<[Page]> =
            flatten(&tree.children).into_iter().cloned().collect();
        warn_on_duplicate_urls(id, &pages);

        let mut guard = self.inner.lock().unwrap();
        let inner = &mut *guard;
        inner.tick += 1;
        let tick = inner.tick;
        if let Some(entry) = inner.entries.get_mut(&id) {
            // Another caller stored the sequence meanwhile; adopt it.
            entry.last_used = tick;
            return Arc::clone(&entry.pages);
        }
        if inner.entries.len() >= self.capacity {
            inner.evict_oldest();
        }
        inner.entries.insert(
            id,
            CacheEntry {
                pages: Arc::clone(&pages),
                last_used: tick,
            },
        );
        pages
    }

    /// Current counter values and entry count.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock().unwrap();
        CacheStats {
            hits: inner.hits,
            misses: inner.misses,
            entries: inner.entries.len(),
        }
    }
}

/// Duplicate URLs are tolerated; the first occurrence anchors lookups.
/// Later occurrences usually point at an authoring mistake.
fn warn_on_duplicate_urls(id: TreeId, pages: &[Page]) {
    let mut seen = HashSet::with_capacity(pages.len());
    for page in pages {
        if !seen.insert(page.url.as_str()) {
            tracing::warn!(tree_id = %id, url = %page.url, "Duplicate URL in page tree");
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
