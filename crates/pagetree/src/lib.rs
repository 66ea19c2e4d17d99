//! Navigable page tree model and traversal.
//!
//! This crate provides:
//! - [`PageTree`] and [`Node`]: the tree handed over by the content layer
//! - [`flatten`]: the ordered sequence of navigable pages
//! - [`search_path`]: the node chain leading to a URL
//! - [`peers`] and [`separate`]: sibling listings and per-folder splitting
//!
//! # Quick Start
//!
//! ```
//! use pagetree::{Folder, Page, PageTree, flatten};
//!
//! let tree = PageTree::new("Docs").with_children(vec![
//!     Folder::new("Guide")
//!         .with_index(Page::new("Guide", "/guide"))
//!         .with_children(vec![
//!             Page::new("Install", "/guide/install").into(),
//!             Page::new("Usage", "/guide/usage").into(),
//!         ])
//!         .into(),
//! ]);
//!
//! let order = flatten(&tree.children);
//! let urls: Vec<&str> = order.iter().map(|page| page.url.as_str()).collect();
//! assert_eq!(urls, ["/guide", "/guide/install", "/guide/usage"]);
//! ```

mod flatten;
mod node;
mod search;
mod util;

pub use flatten::flatten;
pub use node::{Folder, Node, Page, PageTree, Separator, TreeError, TreeId};
pub use search::search_path;
pub use util::{peers, separate};
