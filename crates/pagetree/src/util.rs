//! Derived views over a tree: sibling listings and tree splitting.

use crate::node::{Node, Page, PageTree};

/// List the pages sharing a container with the entry matching `url`.
///
/// The container is the folder (or the tree root) whose direct child page
/// carries the URL, or the folder whose index page carries it. The entry
/// itself is excluded; sibling folders and separators contribute nothing.
///
/// Returns an empty list when the URL is not in the tree.
#[must_use]
pub fn peers<'t>(tree: &'t PageTree, url: &str) -> Vec<&'t Page> {
    container_children(&tree.children, url)
        .map(|children| {
            children
                .iter()
                .filter_map(|node| match node {
                    Node::Page(page) if page.url != url => Some(page),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Find the child list of the container holding `url`.
fn container_children<'t>(children: &'t [Node], url: &str) -> Option<&'t [Node]> {
    for node in children {
        match node {
            Node::Page(page) if page.url == url => return Some(children),
            Node::Folder(folder) => {
                if let Some(index) = &folder.index
                    && index.url == url
                {
                    return Some(&folder.children);
                }
                if let Some(found) = container_children(&folder.children, url) {
                    return Some(found);
                }
            }
            Node::Page(_) | Node::Separator(_) => {}
        }
    }
    None
}

/// Split a tree into one standalone tree per top-level folder.
///
/// Each produced tree takes the folder's name and children and mints its
/// own identity, so navigators cache the pieces independently of the
/// original. A folder's index page becomes the leading child of its tree,
/// keeping the flattened order identical to the folder's order within the
/// original. Top-level pages and separators are dropped.
#[must_use]
pub fn separate(tree: &PageTree) -> Vec<PageTree> {
    tree.children
        .iter()
        .filter_map(|node| match node {
            Node::Folder(folder) => {
                let mut children: Vec<Node> =
                    Vec::with_capacity(folder.children.len() + 1);
                if let Some(index) = &folder.index {
                    children.push(index.clone().into());
                }
                children.extend(folder.children.iter().cloned());
                Some(PageTree::new(folder.name.clone()).with_children(children))
            }
            Node::Page(_) | Node::Separator(_) => None,
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::flatten;
    use crate::node::{Folder, Separator};

    fn sample_tree() -> PageTree {
        PageTree::new("Docs").with_children(vec![
            Page::new("Overview", "/docs").into(),
            Page::new("Changelog", "/docs/changelog").into(),
            Folder::new("Guide")
                .with_index(Page::new("Guide", "/docs/guide"))
                .with_children(vec![
                    Page::new("Install", "/docs/guide/install").into(),
                    Page::new("Usage", "/docs/guide/usage").into(),
                    Page::external("Forum", "https://example.com/forum").into(),
                    Separator::new().into(),
                    Folder::new("Advanced").into(),
                ])
                .into(),
        ])
    }

    // =========================================================================
    // peers
    // =========================================================================

    #[test]
    fn test_peers_of_top_level_page() {
        let tree = sample_tree();

        let siblings = peers(&tree, "/docs");

        assert_eq!(
            siblings.iter().map(|page| page.url.as_str()).collect::<Vec<_>>(),
            ["/docs/changelog"]
        );
    }

    #[test]
    fn test_peers_exclude_self_and_non_pages() {
        let tree = sample_tree();

        let siblings = peers(&tree, "/docs/guide/install");

        assert_eq!(
            siblings.iter().map(|page| page.url.as_str()).collect::<Vec<_>>(),
            ["/docs/guide/usage", "https://example.com/forum"]
        );
    }

    #[test]
    fn test_folder_index_url_lists_the_folder_children() {
        let tree = sample_tree();

        let siblings = peers(&tree, "/docs/guide");

        assert_eq!(
            siblings.iter().map(|page| page.url.as_str()).collect::<Vec<_>>(),
            [
                "/docs/guide/install",
                "/docs/guide/usage",
                "https://example.com/forum"
            ]
        );
    }

    #[test]
    fn test_peers_for_unknown_url_is_empty() {
        let tree = sample_tree();

        assert!(peers(&tree, "/missing").is_empty());
    }

    // =========================================================================
    // separate
    // =========================================================================

    #[test]
    fn test_separate_produces_one_tree_per_top_level_folder() {
        let tree = sample_tree();

        let parts = separate(&tree);

        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].name, "Guide");
        assert_ne!(parts[0].id(), tree.id());
    }

    #[test]
    fn test_separated_tree_keeps_flatten_order() {
        let tree = sample_tree();

        let parts = separate(&tree);
        let flat = flatten(&parts[0].children);

        assert_eq!(
            flat.iter().map(|page| page.url.as_str()).collect::<Vec<_>>(),
            ["/docs/guide", "/docs/guide/install", "/docs/guide/usage"]
        );
    }

    #[test]
    fn test_separate_drops_loose_pages() {
        let tree = PageTree::new("Docs").with_children(vec![
            Page::new("Loose", "/loose").into(),
            Separator::new().into(),
        ]);

        assert!(separate(&tree).is_empty());
    }
}
