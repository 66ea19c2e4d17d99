//! Navigation resolution over page trees.
//!
//! This crate provides:
//! - [`Navigator`]: previous/next resolution with an identity-keyed
//!   flatten cache
//! - [`breadcrumb_for_url`] and [`breadcrumb_from_path`]: breadcrumb
//!   trails from the tree root to the current node
//! - [`sidebar_tabs`]: tab options derived from root-flagged folders
//!
//! # Quick Start
//!
//! ```
//! use pagetree::{Folder, Page, PageTree};
//! use pagetree_nav::Navigator;
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
//! let navigator = Navigator::new();
//! let neighbors = navigator.neighbors(&tree, "/guide/install");
//! assert_eq!(neighbors.previous.map(|page| page.url), Some("/guide".to_owned()));
//! assert_eq!(neighbors.next.map(|page| page.url), Some("/guide/usage".to_owned()));
//! ```

mod breadcrumb;
mod cache;
mod navigator;
mod tabs;

pub use breadcrumb::{
    BreadcrumbItem, BreadcrumbOptions, breadcrumb_for_url, breadcrumb_from_path,
};
pub use cache::{CacheStats, FlattenCache};
pub use navigator::{Navigator, Neighbors};
pub use tabs::{TabOption, sidebar_tabs};
