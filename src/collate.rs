//! Collated string comparison.
//!
//! Display names sort case- and accent-insensitively, the way a locale
//! collator would order them: "Réadme" groups with "readme", "B" does not
//! jump ahead of "a". Comparison runs over NFKD-decomposed, case-folded
//! character streams; a raw comparison breaks ties so the relation stays
//! a strict total order, which the binary search requires.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;

/// Three-way collated comparison of two strings.
pub fn compare(a: &str, b: &str) -> Ordering {
    folded(a).cmp(folded(b)).then_with(|| a.cmp(b))
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfkd().flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(compare("apple", "Banana"), Ordering::Less);
        assert_eq!(compare("Banana", "apple"), Ordering::Greater);
        // Codepoint order would put "Banana" (0x42) before "apple" (0x61).
        assert!("Banana" < "apple");
    }

    #[test]
    fn test_accent_folding() {
        assert_eq!(compare("réadme", "readme"), Ordering::Greater);
        assert_eq!(compare("résumé.js", "rosters.js"), Ordering::Less);
    }

    #[test]
    fn test_tie_break_keeps_total_order() {
        // Equal under folding, distinct raw strings: must not compare Equal.
        assert_ne!(compare("readme", "README"), Ordering::Equal);
        assert_eq!(compare("readme", "readme"), Ordering::Equal);
    }

    #[test]
    fn test_antisymmetry() {
        let pairs = [("a", "b"), ("index.js", "Index.js"), ("", "x")];
        for (a, b) in pairs {
            assert_eq!(compare(a, b), compare(b, a).reverse(), "{a:?} vs {b:?}");
        }
    }
}
