//! Sidebar tab derivation from root-flagged folders.

use pagetree::{Folder, Node, PageTree, flatten};
use serde::Serialize;

/// One sidebar tab, derived from a root-flagged folder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TabOption {
    /// Tab title (the folder name).
    pub title: String,
    /// Landing URL: the folder's index page, else its first navigable page.
    pub url: String,
    /// Description carried over from the folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Icon identifier carried over from the folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Collect sidebar tabs from every root-flagged folder in the tree.
///
/// Folders are visited in display order at any depth. A root folder with
/// neither an index page nor a navigable descendant yields no tab, since
/// the tab would have nowhere to link.
#[must_use]
pub fn sidebar_tabs(tree: &PageTree) -> Vec<TabOption> {
    let mut tabs = Vec::new();
    collect_tabs(&tree.children, &mut tabs);
    tabs
}

fn collect_tabs(nodes: &[Node], tabs: &mut Vec<TabOption>) {
    for node in nodes {
        if let Node::Folder(folder) = node {
            if folder.root
                && let Some(url) = landing_url(folder)
            {
                tabs.push(TabOption {
                    title: folder.name.clone(),
                    url,
                    description: folder.description.clone(),
                    icon: folder.icon.clone(),
                });
            }
            collect_tabs(&folder.children, tabs);
        }
    }
}

fn landing_url(folder: &Folder) -> Option<String> {
    if let Some(index) = &folder.index {
        return Some(index.url.clone());
    }
    flatten(&folder.children)
        .first()
        .map(|page| page.url.clone())
}

// =============================================================================
// Tests
// =============================================================================
