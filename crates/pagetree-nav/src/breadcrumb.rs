//! Breadcrumb trails along tree paths.

use pagetree::{Node, PageTree, search_path};
use serde::Serialize;

/// One entry of a breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    /// Display name.
    pub name: String,
    /// Link target; entries without one render as plain labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Options controlling breadcrumb assembly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BreadcrumbOptions {
    /// Append the current page as the final entry.
    pub include_page: bool,
    /// Emit labeled separators along the path.
    pub include_separator: bool,
    /// Prepend an entry for the tree itself.
    pub include_root: bool,
    /// Link target for the tree entry.
    pub root_url: Option<String>,
}

impl BreadcrumbOptions {
    /// Create the default options: ancestry only, no root, no separators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the current page as the final entry.
    #[must_use]
    pub fn with_current_page(mut self) -> Self {
        self.include_page = true;
        self
    }

    /// Emit labeled separators along the path.
    #[must_use]
    pub fn with_separators(mut self) -> Self {
        self.include_separator = true;
        self
    }

    /// Prepend an unlinked entry for the tree itself.
    #[must_use]
    pub fn with_root(mut self) -> Self {
        self.include_root = true;
        self
    }

    /// Prepend an entry for the tree itself, linking to `url`.
    #[must_use]
    pub fn with_root_url(mut self, url: impl Into<String>) -> Self {
        self.include_root = true;
        self.root_url = Some(url.into());
        self
    }
}

/// Assemble a breadcrumb trail from a path of nodes.
///
/// Each folder along the path contributes one entry, linking to its index
/// page when it has one. Pages contribute only when `include_page` is set,
/// and separators only when `include_separator` is set and they carry a
/// label. An empty path yields an empty trail (the root entry still
/// appears when requested).
///
/// Works directly on the given path; the flatten cache is not involved.
#[must_use]
pub fn breadcrumb_from_path(
    tree: &PageTree,
    path: &[&Node],
    options: &BreadcrumbOptions,
) -> Vec<BreadcrumbItem> {
    let mut items = Vec::new();

    if options.include_root {
        items.push(BreadcrumbItem {
            name: tree.name.clone(),
            url: options.root_url.clone(),
        });
    }

    for node in path {
        match node {
            Node::Folder(folder) => items.push(BreadcrumbItem {
                name: folder.name.clone(),
                url: folder.index.as_ref().map(|index| index.url.clone()),
            }),
            Node::Page(page) => {
                if options.include_page {
                    items.push(BreadcrumbItem {
                        name: page.name.clone(),
                        url: Some(page.url.clone()),
                    });
                }
            }
            Node::Separator(separator) => {
                if options.include_separator
                    && let Some(name) = &separator.name
                {
                    items.push(BreadcrumbItem {
                        name: name.clone(),
                        url: None,
                    });
                }
            }
        }
    }

    items
}

/// Resolve the breadcrumb trail for a URL.
///
/// Finds the node chain with [`search_path`] and assembles it via
/// [`breadcrumb_from_path`]. A URL not present in the tree yields an empty
/// trail. For a folder's index URL the trail ends with the folder's own
/// entry.
#[must_use]
pub fn breadcrumb_for_url(
    tree: &PageTree,
    url: &str,
    options: &BreadcrumbOptions,
) -> Vec<BreadcrumbItem> {
    let path = search_path(&tree.children, url).unwrap_or_default();
    breadcrumb_from_path(tree, &path, options)
}

// =============================================================================
// Tests
// =============================================================================
