//! Exclusion selector resolution.
//!
//! Given an "omit default chrome" flag and an optional user-supplied
//! comma-separated CSS selector list, this module produces the effective
//! exclusion selector and resolves it against a parsed document into an
//! [`OmitSet`] of element identities. The set is computed once per scrape
//! and stays immutable for the duration of the render.

use std::collections::HashSet;

use ego_tree::NodeId;

use crate::Result;
use crate::parse::Document;

/// Baseline selector list targeting common boilerplate regions.
///
/// Covers the navigation bar, sidebar container and its content id, the
/// pagination control, the footer, and the table-of-contents block and its
/// content id.
pub const DEFAULT_OMIT_SELECTORS: &str =
    "nav, .sidebar, #sidebar-content, .pagination, footer, .table-of-contents, #table-of-contents-content";

/// The set of elements excluded from Markdown output for one invocation.
///
/// Membership is by node identity, not value equality; an element's entire
/// subtree is implicitly omitted once the element itself is a member, because
/// the renderer never recurses past an omitted node.
#[derive(Debug, Clone, Default)]
pub struct OmitSet {
    ids: HashSet<NodeId>,
}

impl OmitSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tests whether a node is excluded.
    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of excluded elements (descendants not counted).
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub(crate) fn insert(&mut self, id: NodeId) {
        self.ids.insert(id);
    }
}

/// Builds the effective exclusion selector string.
///
/// With `omit_defaults` set, the baseline list is comma-joined with `extra`
/// when `extra` is non-empty; without it, `extra` is used verbatim. Returns
/// `None` when the effective selector is empty, in which case no query should
/// be attempted.
pub fn effective_selector(omit_defaults: bool, extra: &str) -> Option<String> {
    let extra = extra.trim();
    match (omit_defaults, extra.is_empty()) {
        (true, true) => Some(DEFAULT_OMIT_SELECTORS.to_string()),
        (true, false) => Some(format!("{}, {}", DEFAULT_OMIT_SELECTORS, extra)),
        (false, true) => None,
        (false, false) => Some(extra.to_string()),
    }
}

/// Resolves the exclusion selector against a document.
///
/// Every element matching the effective selector becomes a member of the
/// result set. An empty effective selector yields an empty set without
/// querying the document.
///
/// # Errors
///
/// Returns [`crate::PagemarkError::InvalidSelector`] when the effective
/// selector is not valid CSS selector syntax. The failure is not degraded
/// locally; the whole scrape operation fails.
pub fn resolve_omit_set(doc: &Document, omit_defaults: bool, extra: &str) -> Result<OmitSet> {
    let mut set = OmitSet::new();

    let Some(selector) = effective_selector(omit_defaults, extra) else {
        return Ok(set);
    };

    for element in doc.select(&selector)? {
        set.insert(element.id());
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PagemarkError;

    const CHROME_HTML: &str = r#"
        <body>
            <nav>Menu</nav>
            <div class="sidebar"><div id="sidebar-content">Links</div></div>
            <p>Body text</p>
            <div class="ads">Buy now</div>
            <footer>Copyright</footer>
        </body>
    "#;

    #[test]
    fn test_effective_selector_defaults_only() {
        let selector = effective_selector(true, "");
        assert_eq!(selector.as_deref(), Some(DEFAULT_OMIT_SELECTORS));
    }

    #[test]
    fn test_effective_selector_defaults_plus_extra() {
        let selector = effective_selector(true, ".ads, .promo").unwrap();
        assert!(selector.starts_with(DEFAULT_OMIT_SELECTORS));
        assert!(selector.ends_with(".ads, .promo"));
    }

    #[test]
    fn test_effective_selector_extra_only() {
        assert_eq!(effective_selector(false, ".ads").as_deref(), Some(".ads"));
    }

    #[test]
    fn test_effective_selector_empty() {
        assert_eq!(effective_selector(false, ""), None);
        assert_eq!(effective_selector(false, "   "), None);
    }

    #[test]
    fn test_resolve_defaults() {
        let doc = Document::parse(CHROME_HTML);
        let set = resolve_omit_set(&doc, true, "").unwrap();

        // nav, .sidebar, #sidebar-content, footer
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_resolve_extra_only_leaves_defaults_alone() {
        let doc = Document::parse(CHROME_HTML);
        let set = resolve_omit_set(&doc, false, ".ads, .promo").unwrap();

        assert_eq!(set.len(), 1);

        let footer = doc.select("footer").unwrap()[0];
        assert!(!set.contains(footer.id()));

        let ads = doc.select(".ads").unwrap()[0];
        assert!(set.contains(ads.id()));
    }

    #[test]
    fn test_resolve_empty_selector_yields_empty_set() {
        let doc = Document::parse(CHROME_HTML);
        let set = resolve_omit_set(&doc, false, "").unwrap();

        assert!(set.is_empty());
    }

    #[test]
    fn test_resolve_invalid_selector() {
        let doc = Document::parse(CHROME_HTML);
        let result = resolve_omit_set(&doc, false, "[invalid");

        assert!(matches!(result, Err(PagemarkError::InvalidSelector(_))));
    }

    #[test]
    fn test_invalid_extra_fails_even_with_defaults() {
        let doc = Document::parse(CHROME_HTML);
        let result = resolve_omit_set(&doc, true, "[invalid");

        assert!(matches!(result, Err(PagemarkError::InvalidSelector(_))));
    }

    #[test]
    fn test_membership_is_by_identity() {
        let doc = Document::parse("<p class='a'>same text</p><p class='b'>same text</p>");
        let set = resolve_omit_set(&doc, false, ".a").unwrap();

        let a = doc.select(".a").unwrap()[0];
        let b = doc.select(".b").unwrap()[0];
        assert!(set.contains(a.id()));
        assert!(!set.contains(b.id()));
    }
}
