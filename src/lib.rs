//! sources-tree - Deterministic ordering and lookup for hierarchical source trees
//!
//! This library answers two questions about a tree of grouping directories
//! and URL-identified source leaves:
//! - where does a key belong (or already sit) inside a sorted sibling list,
//! - how do two siblings order relative to each other, given special-cased
//!   names, directory-before-file bias, and an optional URL sort key.
//!
//! It never builds or mutates a tree; callers own the child sequences and
//! this crate only reads them.
//!
//! # Example
//!
//! ```rust
//! use sources_tree::{
//!     find_node_in_contents, get_domain, Source, TreeNode, TreeNodeMatcher,
//! };
//!
//! // Normalized once per tree build, not once per comparison.
//! let debuggee_host = get_domain(Some("https://www.example.com/index.html"));
//!
//! // A sibling list kept sorted by the matcher rules: the aggregate index
//! // entry and the debuggee's own group first, then plain domains.
//! let tree = TreeNode::directory(
//!     "root",
//!     vec![
//!         TreeNode::directory("(index)", vec![]),
//!         TreeNode::directory("example.com", vec![]),
//!         TreeNode::directory("cdn.vendor.net", vec![]),
//!     ],
//! );
//!
//! // An existing group is found at its index.
//! let matcher = TreeNodeMatcher::new("cdn.vendor.net", true, debuggee_host.as_deref());
//! let result = find_node_in_contents(&tree, &matcher);
//! assert!(result.found);
//! assert_eq!(result.index, 2);
//!
//! // An absent group gets a stable insertion point.
//! let matcher = TreeNodeMatcher::new("assets.shop.io", true, debuggee_host.as_deref());
//! let result = find_node_in_contents(&tree, &matcher);
//! assert!(!result.found);
//! assert_eq!(result.index, 2);
//!
//! // Leaves with the same name disambiguate by URL.
//! let incoming = Source::new("https://example.com/b/index.js");
//! let matcher = TreeNodeMatcher::new("index.js", false, debuggee_host.as_deref())
//!     .with_source(&incoming)
//!     .with_sort_by_url(true);
//! let leaves = TreeNode::directory(
//!     "example.com",
//!     vec![TreeNode::source(
//!         "index.js",
//!         Source::new("https://example.com/a/index.js"),
//!     )],
//! );
//! let result = find_node_in_contents(&leaves, &matcher);
//! assert!(!result.found);
//! assert_eq!(result.index, 1);
//! ```

pub mod collate;
pub mod domain;
pub mod matcher;
pub mod search;
pub mod types;

// Re-export commonly used items
pub use domain::{get_domain, is_exact_domain_match};
pub use matcher::{
    classify, is_url_extension, Exception, NodeMatcher, TreeNodeMatcher, INDEX_NAME,
};
pub use search::find_node_in_contents;
pub use types::{SearchResult, Source, TreeNode};
