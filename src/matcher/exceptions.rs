//! Exception rules for sibling ordering.
//!
//! A handful of node names occupy a fixed early position in every sibling
//! list, regardless of alphabetical order: the synthetic aggregate index
//! entry, the group for the host currently being debugged, and names that
//! are themselves file-extension shaped. Each rule is an independent
//! tagged check; [`classify`] evaluates them in a fixed order and returns
//! the first that applies.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::is_exact_domain_match;

/// Synthetic label of the aggregated index entry.
pub const INDEX_NAME: &str = "(index)";

/// Namespace marker used by the Angular bundler.
const ANGULAR_BUNDLER: &str = "ng://";

/// Namespace marker used by the Webpack bundler.
const WEBPACK_BUNDLER: &str = "webpack://";

/// Recognized web-source file extensions. A closed set: a bare
/// `\.\w+$` test would classify every domain name ("a.com") as an
/// extension-shaped name and promote it.
static EXTENSION_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:[^/]*\.)?(?:js|jsx|mjs|cjs|ts|tsx|json|html?|css|wasm|map)$")
        .expect("EXTENSION_NAME: hardcoded regex is invalid")
});

/// Why a name sorts into the fixed early group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exception {
    /// The synthetic `"(index)"` aggregate entry
    IndexEntry,
    /// The group for the host currently being debugged
    DebuggeeHost,
    /// A bare extension or a filename with a recognized extension
    UrlExtension,
}

/// Classify `name` against the exception rules, first match wins.
///
/// Bundler namespace markers (`"ng://"`, `"webpack://"`) are recognized
/// and reported at debug verbosity but not promoted; they keep their
/// alphabetical position.
pub fn classify(name: &str, debuggee_host: Option<&str>) -> Option<Exception> {
    if name == INDEX_NAME {
        return Some(Exception::IndexEntry);
    }

    if let Some(host) = debuggee_host {
        if is_exact_domain_match(name, host) {
            return Some(Exception::DebuggeeHost);
        }
    }

    if name == ANGULAR_BUNDLER || name == WEBPACK_BUNDLER {
        tracing::debug!(part = name, "bundler namespace marker in sibling ordering");
    }

    if is_url_extension(name) {
        return Some(Exception::UrlExtension);
    }

    None
}

/// True iff `name` is a bare extension (`"js"`, `".map"`) or a filename
/// with a recognized web-source extension (`"index.js"`).
pub fn is_url_extension(name: &str) -> bool {
    EXTENSION_NAME.is_match(name)
}
