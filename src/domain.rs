//! Host normalization.
//!
//! Grouping directories at the top of the tree are keyed by domain. A
//! host and its `www.`-prefixed alias belong to the same group, so both
//! the normalizer and the equality helper strip one leading `"www."`.

use url::Url;

const WWW_PREFIX: &str = "www.";

/// Extract the comparable domain of a URL.
///
/// Returns `None` for an absent URL, an unparsable URL, or a URL with no
/// host component (e.g. `data:` or `about:` URLs). A leading `"www."` is
/// stripped from the host.
///
/// # Example
///
/// ```
/// use sources_tree::get_domain;
///
/// assert_eq!(get_domain(Some("https://www.example.com/x")), Some("example.com".into()));
/// assert_eq!(get_domain(Some("https://sub.example.com/x")), Some("sub.example.com".into()));
/// assert_eq!(get_domain(Some("not a url")), None);
/// assert_eq!(get_domain(None), None);
/// ```
pub fn get_domain(url: Option<&str>) -> Option<String> {
    let url = url?;
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    Some(strip_www(host).to_string())
}

/// Check whether two names denote the same domain, each side
/// independently stripping one leading `"www."`.
///
/// Shared by the primary equality rule of the matcher and by the
/// debuggee-host exception, so the two can never diverge.
pub fn is_exact_domain_match(a: &str, b: &str) -> bool {
    strip_www(a) == strip_www(b)
}

fn strip_www(name: &str) -> &str {
    name.strip_prefix(WWW_PREFIX).unwrap_or(name)
}
