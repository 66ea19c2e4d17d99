//! Sequential navigation resolution.

use std::sync::Arc;

use pagetree::{Page, PageTree};
use serde::Serialize;

use crate::cache::{CacheStats, FlattenCache};

/// Default number of flattened sequences a navigator retains.
const DEFAULT_CACHE_CAPACITY: usize = 16;

/// Previous and next entries around the current page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Neighbors {
    /// Entry preceding the current page in reading order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<Page>,
    /// Entry following the current page in reading order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Page>,
}

/// Navigation resolver owning a flatten cache.
///
/// One navigator serves a site for its whole lifetime; dropping it discards
/// every cached sequence. Repeated lookups against the same tree instance
/// reuse the cached flattening, while a rebuilt tree (which carries a fresh
/// [`pagetree::TreeId`]) starts cold, so stale orderings are never served.
///
/// # Thread Safety
///
/// All methods take `&self` and are safe to call concurrently; see
/// [`FlattenCache`] for the miss discipline.
pub struct Navigator {
    cache: FlattenCache,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Create a navigator with the default cache capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Create a navigator retaining at most `capacity` flattened sequences.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: FlattenCache::new(capacity),
        }
    }

    /// The flattened reading order for `tree`.
    ///
    /// Cached per tree instance; the returned snapshot stays valid after
    /// the cache evicts or replaces the entry.
    #[must_use]
    pub fn flattened(&self, tree: &PageTree) -> Arc<[Page]> {
        self.cache.get_or_flatten(tree)
    }

    /// Resolve the entries around `current_url` in reading order.
    ///
    /// URLs compare by exact string equality; no trailing-slash or case
    /// normalization happens. When the URL appears more than once, the
    /// first occurrence anchors the result. A URL outside the tree (a
    /// custom page, say) resolves to empty neighbors rather than an error,
    /// and the first and last entries have no previous and no next
    /// respectively.
    #[must_use]
    pub fn neighbors(&self, tree: &PageTree, current_url: &str) -> Neighbors {
        let pages = self.flattened(tree);
        let Some(position) = pages.iter().position(|page| page.url == current_url)
        else {
            return Neighbors::default();
        };

        Neighbors {
            previous: position
                .checked_sub(1)
                .and_then(|index| pages.get(index))
                .cloned(),
            next: pages.get(position + 1).cloned(),
        }
    }

    /// Resolve neighbors unless the caller supplies them.
    ///
    /// Page-level configuration may pin the footer links; such an explicit
    /// value wins wholesale and the tree is not consulted, even when one
    /// side of it is absent.
    #[must_use]
    pub fn neighbors_or(
        &self,
        tree: &PageTree,
        current_url: &str,
        explicit: Option<Neighbors>,
    ) -> Neighbors {
        match explicit {
            Some(neighbors) => neighbors,
            None => self.neighbors(tree, current_url),
        }
    }

    /// Cache activity counters.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use pagetree::Folder;
    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Navigator: Send, Sync);
    assert_impl_all!(Neighbors: Send, Sync, Clone);

    fn guide_tree() -> PageTree {
        PageTree::new("Docs").with_children(vec![
            Folder::new("Guide")
                .with_index(Page::new("Guide", "/guide"))
                .with_children(vec![
                    Page::new("Install", "/guide/install").into(),
                    Page::new("Usage", "/guide/usage").into(),
                ])
                .into(),
        ])
    }

    // =========================================================================
    // Neighbor resolution
    // =========================================================================

    #[test]
    fn test_middle_page_has_both_neighbors() {
        let navigator = Navigator::new();
        let tree = guide_tree();

        let neighbors = navigator.neighbors(&tree, "/guide/install");

        assert_eq!(neighbors.previous, Some(Page::new("Guide", "/guide")));
        assert_eq!(neighbors.next, Some(Page::new("Usage", "/guide/usage")));
    }

    #[test]
    fn test_first_entry_has_no_previous() {
        let navigator = Navigator::new();
        let tree = guide_tree();

        let neighbors = navigator.neighbors(&tree, "/guide");

        assert_eq!(neighbors.previous, None);
        assert_eq!(
            neighbors.next,
            Some(Page::new("Install", "/guide/install"))
        );
    }

    #[test]
    fn test_last_entry_has_no_next() {
        let navigator = Navigator::new();
        let tree = guide_tree();

        let neighbors = navigator.neighbors(&tree, "/guide/usage");

        assert_eq!(
            neighbors.previous,
            Some(Page::new("Install", "/guide/install"))
        );
        assert_eq!(neighbors.next, None);
    }

    #[test]
    fn test_sole_entry_has_no_neighbors() {
        let navigator = Navigator::new();
        let tree = PageTree::new("Docs")
            .with_children(vec![Page::new("Only", "/only").into()]);

        assert_eq!(navigator.neighbors(&tree, "/only"), Neighbors::default());
    }

    #[test]
    fn test_unknown_url_resolves_to_empty_neighbors() {
        let navigator = Navigator::new();
        let tree = guide_tree();

        assert_eq!(
            navigator.neighbors(&tree, "/not-in-tree"),
            Neighbors::default()
        );
    }

    #[test]
    fn test_urls_match_exactly() {
        let navigator = Navigator::new();
        let tree = guide_tree();

        assert_eq!(
            navigator.neighbors(&tree, "/guide/install/"),
            Neighbors::default()
        );
    }

    #[test]
    fn test_external_pages_never_appear_as_neighbors() {
        let navigator = Navigator::new();
        let tree = PageTree::new("Docs").with_children(vec![
            Page::new("First", "/first").into(),
            Page::external("Elsewhere", "https://example.com").into(),
            Page::new("Last", "/last").into(),
        ]);

        let neighbors = navigator.neighbors(&tree, "/first");

        assert_eq!(neighbors.next, Some(Page::new("Last", "/last")));
    }

    #[test]
    fn test_duplicate_url_anchors_at_first_occurrence() {
        let navigator = Navigator::new();
        let tree = PageTree::new("Docs").with_children(vec![
            Page::new("Intro", "/intro").into(),
            Page::new("Twice", "/dup").into(),
            Page::new("Middle", "/middle").into(),
            Page::new("Twice again", "/dup").into(),
        ]);

        let neighbors = navigator.neighbors(&tree, "/dup");

        assert_eq!(neighbors.previous, Some(Page::new("Intro", "/intro")));
        assert_eq!(neighbors.next, Some(Page::new("Middle", "/middle")));
    }

    #[test]
    fn test_repeated_resolution_is_deterministic() {
        let navigator = Navigator::new();
        let tree = guide_tree();

        let cold = navigator.neighbors(&tree, "/guide/install");
        let warm = navigator.neighbors(&tree, "/guide/install");

        assert_eq!(cold, warm);
        assert_eq!(navigator.cache_stats().misses, 1);
        assert_eq!(navigator.cache_stats().hits, 1);
    }

    // =========================================================================
    // Explicit overrides
    // =========================================================================

    #[test]
    fn test_explicit_override_wins_without_lookup() {
        let navigator = Navigator::new();
        let tree = guide_tree();
        let pinned = Neighbors {
            previous: None,
            next: Some(Page::new("Start over", "/guide")),
        };

        let resolved =
            navigator.neighbors_or(&tree, "/guide/install", Some(pinned.clone()));

        assert_eq!(resolved, pinned);
        // The tree was never flattened.
        assert_eq!(navigator.cache_stats().misses, 0);
        assert_eq!(navigator.cache_stats().hits, 0);
    }

    #[test]
    fn test_missing_override_falls_back_to_resolution() {
        let navigator = Navigator::new();
        let tree = guide_tree();

        let resolved = navigator.neighbors_or(&tree, "/guide/install", None);

        assert_eq!(resolved, navigator.neighbors(&tree, "/guide/install"));
        assert_eq!(navigator.cache_stats().misses, 1);
    }

    // =========================================================================
    // Caching behavior
    // =========================================================================

    #[test]
    fn test_flattened_sequence_is_shared_per_tree_instance() {
        let navigator = Navigator::new();
        let tree = guide_tree();

        let first = navigator.flattened(&tree);
        let second = navigator.flattened(&tree);

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_rebuilt_tree_starts_cold() {
        let navigator = Navigator::new();
        let tree = guide_tree();
        let rebuilt = guide_tree();

        let _ = navigator.neighbors(&tree, "/guide/install");
        let _ = navigator.neighbors(&rebuilt, "/guide/install");

        assert_eq!(navigator.cache_stats().misses, 2);
        assert_eq!(navigator.cache_stats().entries, 2);
    }

    #[test]
    fn test_concurrent_resolution() {
        use std::thread;

        let navigator = Arc::new(Navigator::new());
        let tree = Arc::new(guide_tree());

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let navigator = Arc::clone(&navigator);
                let tree = Arc::clone(&tree);
                thread::spawn(move || {
                    let neighbors = navigator.neighbors(&tree, "/guide/install");
                    assert_eq!(
                        neighbors.next,
                        Some(Page::new("Usage", "/guide/usage"))
                    );
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(navigator.cache_stats().entries, 1);
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    #[test]
    fn test_neighbors_serialize_omits_absent_sides() {
        let neighbors = Neighbors {
            previous: None,
            next: Some(Page::new("Usage", "/guide/usage")),
        };

        let value = serde_json::to_value(&neighbors).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "next": {
                    "name": "Usage",
                    "url": "/guide/usage",
                    "external": false,
                }
            })
        );
    }
}
