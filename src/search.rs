//! Binary search over a sorted sibling list.

use std::cmp::Ordering;

use crate::matcher::NodeMatcher;
use crate::types::{SearchResult, TreeNode};

/// Locate the search target inside `tree`'s child sequence.
///
/// Lower-bound binary search over the borrowed sibling list, using the
/// matcher as a three-way comparator. Returns the exact index on a
/// match, otherwise the insertion point that keeps the sequence sorted.
/// A leaf `tree` or a directory with no children yields
/// `{found: false, index: 0}` without evaluating the matcher.
///
/// Precondition (not validated): the children are sorted consistently
/// with the matcher's ordering. An inconsistent comparator yields an
/// unspecified but non-panicking result.
///
/// O(log n) comparator evaluations for n children.
pub fn find_node_in_contents<M>(tree: &TreeNode, matcher: &M) -> SearchResult
where
    M: NodeMatcher + ?Sized,
{
    let contents = match tree.contents() {
        Some(contents) if !contents.is_empty() => contents,
        _ => return SearchResult::insert_at(0),
    };

    let mut left = 0;
    let mut right = contents.len() - 1;
    while left < right {
        let middle = (left + right) / 2;
        if matcher.compare(&contents[middle]) == Ordering::Less {
            left = middle + 1;
        } else {
            right = middle;
        }
    }

    match matcher.compare(&contents[left]) {
        Ordering::Equal => SearchResult::found_at(left),
        // The child at `left` sorts after the target: insert before it.
        Ordering::Greater => SearchResult::insert_at(left),
        Ordering::Less => SearchResult::insert_at(left + 1),
    }
}
