//! Sibling-order comparators.
//!
//! A matcher is a three-way comparison between a search target and one
//! candidate sibling, closed over the search context: the target name,
//! whether the target is a directory, the debuggee host, and an optional
//! source record for URL tie-breaking. The same matcher drives both exact
//! lookup and sorted insertion-point computation in
//! [`find_node_in_contents`](crate::find_node_in_contents).

mod exceptions;

pub use exceptions::{classify, is_url_extension, Exception, INDEX_NAME};

use std::cmp::Ordering;

use crate::collate;
use crate::domain::is_exact_domain_match;
use crate::types::{Source, TreeNode};

/// Trait for sibling-order comparators.
///
/// `Less` means the candidate node sorts before the target, `Equal` that
/// the candidate is the target, `Greater` that it sorts after.
pub trait NodeMatcher {
    /// Compare a candidate sibling against the search target.
    fn compare(&self, node: &TreeNode) -> Ordering;
}

/// The standard sibling-order comparator.
///
/// Rule precedence, first match decides:
///
/// 1. domain equality of target and candidate names (both sides strip a
///    leading `"www."`);
/// 2. candidate name is an [`Exception`]: candidate first;
/// 3. target name is an [`Exception`]: target first;
/// 4. directories before files;
/// 5. with [`with_sort_by_url`](Self::with_sort_by_url), source-vs-source
///    comparisons order by full URL;
/// 6. collated name comparison.
///
/// Holds only borrowed context; construct one per search and discard it.
#[derive(Debug, Clone, Copy)]
pub struct TreeNodeMatcher<'a> {
    part: &'a str,
    is_dir: bool,
    debuggee_host: Option<&'a str>,
    source: Option<&'a Source>,
    sort_by_url: bool,
}

impl<'a> TreeNodeMatcher<'a> {
    /// Create a matcher for `part`, the name being searched for or
    /// inserted. `is_dir` states whether that target is a directory;
    /// `debuggee_host` is the normalized host of the page under
    /// inspection, from [`get_domain`](crate::get_domain).
    pub fn new(part: &'a str, is_dir: bool, debuggee_host: Option<&'a str>) -> Self {
        Self {
            part,
            is_dir,
            debuggee_host,
            source: None,
            sort_by_url: false,
        }
    }

    /// Attach the source record being placed, enabling the URL
    /// tie-break between same-named leaves.
    pub fn with_source(mut self, source: &'a Source) -> Self {
        self.source = Some(source);
        self
    }

    /// Order source-vs-source comparisons by full URL instead of name.
    pub fn with_sort_by_url(mut self, sort_by_url: bool) -> Self {
        self.sort_by_url = sort_by_url;
        self
    }

    /// The URL comparison, when this matcher is configured for it and
    /// the candidate carries a URL.
    fn compare_by_url(&self, node: &TreeNode) -> Option<Ordering> {
        if !self.sort_by_url {
            return None;
        }
        match (node, self.source) {
            (TreeNode::Source { contents, .. }, Some(source)) => {
                Some(collate::compare(&contents.url, &source.url))
            }
            _ => None,
        }
    }
}

impl NodeMatcher for TreeNodeMatcher<'_> {
    fn compare(&self, node: &TreeNode) -> Ordering {
        // Same name, modulo the www. prefix. Under URL ordering two
        // leaves may share a name yet be distinct sources, so equality
        // defers to the URL comparison.
        if is_exact_domain_match(self.part, node.name()) {
            if let Some(by_url) = self.compare_by_url(node) {
                return by_url;
            }
            return Ordering::Equal;
        }

        // Exception names hold a fixed early position.
        if exceptions::classify(node.name(), self.debuggee_host).is_some() {
            return Ordering::Less;
        }
        if exceptions::classify(self.part, self.debuggee_host).is_some() {
            return Ordering::Greater;
        }

        // Directories group before files.
        let node_is_dir = node.has_children();
        if node_is_dir != self.is_dir {
            return if node_is_dir {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        if let Some(by_url) = self.compare_by_url(node) {
            return by_url;
        }

        collate::compare(node.name(), self.part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str) -> TreeNode {
        TreeNode::source(name, Source::new(format!("https://host/{name}")))
    }

    #[test]
    fn test_exact_name_match() {
        let matcher = TreeNodeMatcher::new("app.js", false, None);
        assert_eq!(matcher.compare(&leaf("app.js")), Ordering::Equal);
    }

    #[test]
    fn test_www_prefix_equality_both_directions() {
        let matcher = TreeNodeMatcher::new("www.example.com", true, None);
        assert_eq!(
            matcher.compare(&TreeNode::directory("example.com", vec![])),
            Ordering::Equal
        );

        let matcher = TreeNodeMatcher::new("example.com", true, None);
        assert_eq!(
            matcher.compare(&TreeNode::directory("www.example.com", vec![])),
            Ordering::Equal
        );
    }

    #[test]
    fn test_index_node_sorts_first() {
        let matcher = TreeNodeMatcher::new("aaa.com", true, None);
        assert_eq!(matcher.compare(&leaf(INDEX_NAME)), Ordering::Less);
    }

    #[test]
    fn test_index_part_sorts_first() {
        let matcher = TreeNodeMatcher::new(INDEX_NAME, false, None);
        assert_eq!(matcher.compare(&leaf("aaa.com")), Ordering::Greater);
    }

    #[test]
    fn test_debuggee_host_node_sorts_first() {
        let matcher = TreeNodeMatcher::new("a.com", false, Some("b.com"));
        assert_eq!(matcher.compare(&leaf("b.com")), Ordering::Less);
        assert_eq!(matcher.compare(&leaf("www.b.com")), Ordering::Less);
    }

    #[test]
    fn test_debuggee_host_part_sorts_first() {
        let matcher = TreeNodeMatcher::new("b.com", false, Some("b.com"));
        assert_eq!(matcher.compare(&leaf("z.com")), Ordering::Greater);
    }

    #[test]
    fn test_directory_before_file_overrides_alphabetical() {
        // Leaf "a" vs directory target "z": the directory still wins.
        let matcher = TreeNodeMatcher::new("z", true, None);
        assert_eq!(matcher.compare(&leaf("a")), Ordering::Greater);

        // Directory node "z" vs leaf target "a": the node wins.
        let matcher = TreeNodeMatcher::new("a", false, None);
        assert_eq!(
            matcher.compare(&TreeNode::directory("z", vec![])),
            Ordering::Less
        );
    }

    #[test]
    fn test_same_kind_sorts_by_name() {
        let matcher = TreeNodeMatcher::new("beta", false, None);
        assert_eq!(matcher.compare(&leaf("alpha")), Ordering::Less);
        assert_eq!(matcher.compare(&leaf("zeta")), Ordering::Greater);
    }

    #[test]
    fn test_extension_named_node_sorts_first() {
        // "app.js" is extension-shaped, "assets" is not.
        let matcher = TreeNodeMatcher::new("assets", false, None);
        assert_eq!(matcher.compare(&leaf("app.js")), Ordering::Less);

        let matcher = TreeNodeMatcher::new("app.js", false, None);
        assert_eq!(matcher.compare(&leaf("assets")), Ordering::Greater);
    }

    #[test]
    fn test_sort_by_url_orders_same_named_sources() {
        let incoming = Source::new("http://b/index.js");
        let matcher = TreeNodeMatcher::new("index.js", false, None)
            .with_source(&incoming)
            .with_sort_by_url(true);

        let earlier = TreeNode::source("index.js", Source::new("http://a/index.js"));
        assert_eq!(matcher.compare(&earlier), Ordering::Less);

        let later = TreeNode::source("index.js", Source::new("http://c/index.js"));
        assert_eq!(matcher.compare(&later), Ordering::Greater);

        let same = TreeNode::source("index.js", Source::new("http://b/index.js"));
        assert_eq!(matcher.compare(&same), Ordering::Equal);
    }

    #[test]
    fn test_sort_by_url_ignored_without_source() {
        let matcher = TreeNodeMatcher::new("index.js", false, None).with_sort_by_url(true);
        assert_eq!(matcher.compare(&leaf("index.js")), Ordering::Equal);
    }

    #[test]
    fn test_sort_by_url_ignored_for_directories() {
        let incoming = Source::new("http://b/index.js");
        let matcher = TreeNodeMatcher::new("example.com", true, None)
            .with_source(&incoming)
            .with_sort_by_url(true);
        assert_eq!(
            matcher.compare(&TreeNode::directory("example.com", vec![])),
            Ordering::Equal
        );
    }

    #[test]
    fn test_custom_matcher_impl() {
        struct ByName<'a>(&'a str);
        impl NodeMatcher for ByName<'_> {
            fn compare(&self, node: &TreeNode) -> Ordering {
                collate::compare(node.name(), self.0)
            }
        }

        let by_name = ByName("m");
        assert_eq!(by_name.compare(&leaf("a")), Ordering::Less);
        assert_eq!(by_name.compare(&leaf("m")), Ordering::Equal);
    }
}
