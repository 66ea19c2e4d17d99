//! Page tree data model.
//!
//! A tree is built from three node kinds: [`Page`] (a link target),
//! [`Folder`] (a grouping with optional index page), and [`Separator`]
//! (a visual divider). The [`PageTree`] root carries a process-unique
//! [`TreeId`] used by navigators to key derived data.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// A link target in the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Display name shown in navigation.
    pub name: String,
    /// URL the page links to.
    pub url: String,
    /// Whether the URL points outside this site.
    ///
    /// External pages appear in the tree but never participate in
    /// sequential (previous/next) navigation.
    #[serde(default)]
    pub external: bool,
    /// Short description for link previews and tab listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Icon identifier for UI rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Page {
    /// Create a page pointing at a site-internal URL.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            external: false,
            description: None,
            icon: None,
        }
    }

    /// Create a page pointing outside the site.
    #[must_use]
    pub fn external(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            external: true,
            ..Self::new(name, url)
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach an icon identifier.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// A grouping node holding nested children and an optional index page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Display name shown in navigation.
    pub name: String,
    /// Page opened when the folder itself is selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<Page>,
    /// Child nodes in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    /// Marks the folder as a standalone navigation root (sidebar tab).
    #[serde(default)]
    pub root: bool,
    /// Whether UIs should render the folder expanded initially.
    #[serde(default, rename = "defaultOpen")]
    pub default_open: bool,
    /// Short description for tab listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Icon identifier for UI rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Folder {
    /// Create an empty folder.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index: None,
            children: Vec::new(),
            root: false,
            default_open: false,
            description: None,
            icon: None,
        }
    }

    /// Attach an index page.
    #[must_use]
    pub fn with_index(mut self, index: Page) -> Self {
        self.index = Some(index);
        self
    }

    /// Replace the child list.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Mark the folder as a standalone navigation root.
    #[must_use]
    pub fn with_root(mut self) -> Self {
        self.root = true;
        self
    }

    /// Render the folder expanded by default.
    #[must_use]
    pub fn with_default_open(mut self) -> Self {
        self.default_open = true;
        self
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach an icon identifier.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// A visual divider between sibling nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separator {
    /// Optional label rendered with the divider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Icon identifier for UI rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Separator {
    /// Create an unlabeled divider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a label.
    #[must_use]
    pub fn with_label(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach an icon identifier.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// One node of a page tree.
///
/// Serializes with a `type` tag (`page`, `folder`, `separator`) so trees
/// survive a JSON hand-off to frontend code unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// A link target.
    Page(Page),
    /// A grouping with nested children.
    Folder(Folder),
    /// A visual divider.
    Separator(Separator),
}

impl From<Page> for Node {
    fn from(page: Page) -> Self {
        Self::Page(page)
    }
}

impl From<Folder> for Node {
    fn from(folder: Folder) -> Self {
        Self::Folder(folder)
    }
}

impl From<Separator> for Node {
    fn from(separator: Separator) -> Self {
        Self::Separator(separator)
    }
}

/// Identity token distinguishing tree instances.
///
/// Each constructed [`PageTree`] mints a fresh id from a process-wide
/// counter. Structural copies (including [`PageTree::clone`]) and
/// deserialized trees receive their own ids, so derived-data caches keyed
/// on `TreeId` never conflate two tree instances that merely look alike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TreeId(u64);

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(1);

impl TreeId {
    fn mint() -> Self {
        Self(NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for TreeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A complete navigation tree.
///
/// Nodes own their children, so the structure is acyclic by construction;
/// traversals assume nothing beyond that.
///
/// Navigators key derived data (flattened orderings) on [`PageTree::id`],
/// so a tree handed to a navigator must be treated as frozen. To change the
/// structure, build a new tree or clone and modify the copy; both carry a
/// fresh id and therefore fresh cache entries.
///
/// Equality is structural and ignores identity: two trees with the same
/// name and children compare equal even though their ids differ.
#[derive(Debug, Serialize, Deserialize)]
pub struct PageTree {
    /// Display name of the whole tree.
    pub name: String,
    /// Top-level nodes in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(skip, default = "TreeId::mint")]
    id: TreeId,
}

impl PageTree {
    /// Create an empty tree with a fresh identity.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            id: TreeId::mint(),
        }
    }

    /// Replace the top-level node list.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// The identity minted when this tree instance was constructed.
    #[must_use]
    pub fn id(&self) -> TreeId {
        self.id
    }

    /// Parse a tree from its JSON representation.
    ///
    /// The parsed tree mints a fresh identity; it never inherits cache
    /// entries from the instance that produced the JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Parse`] if the JSON is malformed or does not
    /// describe a page tree.
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        serde_json::from_str(json).map_err(TreeError::Parse)
    }

    /// Serialize the tree to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String, TreeError> {
        serde_json::to_string(self).map_err(TreeError::Serialize)
    }
}

impl Clone for PageTree {
    /// Clone the structure under a fresh identity.
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            children: self.children.clone(),
            id: TreeId::mint(),
        }
    }
}

impl PartialEq for PageTree {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.children == other.children
    }
}

impl Eq for PageTree {}

/// Error type for tree serialization.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// JSON did not describe a valid page tree.
    #[error("invalid page tree JSON: {0}")]
    Parse(#[source] serde_json::Error),
    /// Tree could not be serialized.
    #[error("page tree serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
}

// =============================================================================
// Tests
// =============================================================================
