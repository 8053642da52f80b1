use serde::{Deserialize, Serialize};

/// A resource record carried by leaf nodes.
///
/// Leaves reference a source by its full URL; the URL doubles as the
/// secondary sort key when two leaves share a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Full URL the source was loaded from
    pub url: String,
}

impl Source {
    /// Create a new source record from a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// A node in the hierarchical sources display.
///
/// Either a grouping directory (domain, bundler namespace, path segment)
/// whose `contents` sequence IS the display order, or a leaf source.
///
/// Invariant (caller contract): within any directory, `contents` stays
/// sorted per [`TreeNodeMatcher`](crate::TreeNodeMatcher) and sibling
/// names are unique. This crate only reads the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    /// Grouping node with an ordered child sequence
    Directory {
        name: String,
        contents: Vec<TreeNode>,
    },
    /// Leaf node carrying a source record
    Source { name: String, contents: Source },
}

impl TreeNode {
    /// Create a directory node with the given children.
    pub fn directory(name: impl Into<String>, contents: Vec<TreeNode>) -> Self {
        TreeNode::Directory {
            name: name.into(),
            contents,
        }
    }

    /// Create a leaf node for a source.
    pub fn source(name: impl Into<String>, source: Source) -> Self {
        TreeNode::Source {
            name: name.into(),
            contents: source,
        }
    }

    /// Display name of the node.
    pub fn name(&self) -> &str {
        match self {
            TreeNode::Directory { name, .. } => name,
            TreeNode::Source { name, .. } => name,
        }
    }

    /// True iff the node is a directory, regardless of whether its child
    /// sequence is currently empty.
    pub fn has_children(&self) -> bool {
        matches!(self, TreeNode::Directory { .. })
    }

    /// True iff the node is a leaf source.
    pub fn is_source(&self) -> bool {
        matches!(self, TreeNode::Source { .. })
    }

    /// Borrow the child sequence of a directory node.
    pub fn contents(&self) -> Option<&[TreeNode]> {
        match self {
            TreeNode::Directory { contents, .. } => Some(contents),
            TreeNode::Source { .. } => None,
        }
    }
}

/// Result of a sibling-list search.
///
/// When `found`, `index` is the position of the exact match. Otherwise
/// `index` is the position at which the target must be inserted to keep
/// the sequence sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub found: bool,
    pub index: usize,
}

impl SearchResult {
    pub(crate) fn found_at(index: usize) -> Self {
        Self { found: true, index }
    }

    pub(crate) fn insert_at(index: usize) -> Self {
        Self {
            found: false,
            index,
        }
    }
}
