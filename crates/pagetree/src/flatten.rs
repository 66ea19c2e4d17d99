//! Tree flattening into sequential reading order.

use crate::node::{Node, Page};

/// Flatten tree nodes into the ordered sequence of navigable pages.
///
/// The walk is depth-first and left-to-right: a folder's index page (when
/// present) precedes the folder's children, and sibling order is preserved
/// exactly. External pages and separators carry no position in the
/// sequence.
///
/// The result order is fully determined by the input; flattening the same
/// nodes twice yields the same sequence.
#[must_use]
pub fn flatten(nodes: &[Node]) -> Vec<&Page> {
    let mut pages = Vec::new();
    collect_pages(nodes, &mut pages);
    pages
}

fn collect_pages<'t>(nodes: &'t [Node], pages: &mut Vec<&'t Page>) {
    for node in nodes {
        match node {
            Node::Page(page) => {
                if !page.external {
                    pages.push(page);
                }
            }
            Node::Folder(folder) => {
                if let Some(index) = &folder.index
                    && !index.external
                {
                    pages.push(index);
                }
                collect_pages(&folder.children, pages);
            }
            Node::Separator(_) => {}
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
