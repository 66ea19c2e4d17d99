//! Locating a node by URL and recording the path to it.

use crate::node::Node;

/// Find the chain of nodes leading from `nodes` to the entry matching `url`.
///
/// URLs compare by exact string equality. A page match ends the chain at
/// that page; a folder whose index page matches ends the chain at the
/// folder itself, since the index represents the folder in navigation.
/// When the same URL appears more than once, the first occurrence in
/// display order wins.
///
/// Returns `None` when no node carries the URL.
#[must_use]
pub fn search_path<'t>(nodes: &'t [Node], url: &str) -> Option<Vec<&'t Node>> {
    for node in nodes {
        match node {
            Node::Folder(folder) => {
                if let Some(index) = &folder.index
                    && index.url == url
                {
                    return Some(vec![node]);
                }
                if let Some(mut path) = search_path(&folder.children, url) {
                    path.insert(0, node);
                    return Some(path);
                }
            }
            Node::Page(page) if page.url == url => return Some(vec![node]),
            Node::Page(_) | Node::Separator(_) => {}
        }
    }
    None
}

// =============================================================================
// Tests
// =============================================================================
