//! Tag catalogs driving filtering and rendering.
//!
//! Each list is exposed both as an array (for iteration, in a stable order)
//! and, where lookups happen per node, as a `HashSet` for O(1) membership.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Selector used when the caller supplies none: the whole document.
pub const ROOT_SELECTOR: &str = "html";

/// Tag rendered literally, without whitespace minification.
pub const PREFORMATTED_TAG: &str = "pre";

/// Tag replaced by its `alt` text unless retained.
pub const IMAGE_TAG: &str = "img";

// === Tag Lists (arrays for iteration) ===

/// Void elements: never closed, never carry children.
pub static VOID_TAGS: [&str; 16] = [
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Elements followed by a newline when they are a direct selector match.
///
/// Derived from the `display: block` defaults of the HTML rendering section,
/// plus `li` (`display: list-item`).
pub static BLOCK_TAGS: [&str; 38] = [
    "address", "article", "aside", "blockquote", "body", "center", "dd", "dir", "div", "dl",
    "dt", "figure", "figcaption", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hgroup", "hr", "html", "legend", "listing", "menu", "nav", "ol", "p",
    "plaintext", "pre", "section", "summary", "ul", "xmp", "li",
];

/// Selectors for content that is `display: none` by default.
///
/// Matching elements are dropped before extraction unless the literal
/// selector string appears among the requested keep tags.
pub static DISPLAY_NONE_SELECTORS: [&str; 20] = [
    "[hidden]",
    "area",
    "base",
    "basefont",
    "command",
    "datalist",
    "head",
    "input[type=hidden]",
    "link",
    "menu[type=context]",
    "meta",
    "noembed",
    "noframes",
    "param",
    "rp",
    "script",
    "source",
    "style",
    "track",
    "title",
];

/// Named groups of tags accepted as a single keep-tag request.
pub static BUNDLES: [(&str, &[&str]); 5] = [
    ("hs", &["h1", "h2", "h3", "h4", "h5", "h6"]),
    ("metadata", &["title", "meta"]),
    (
        "structure",
        &["header", "nav", "main", "article", "section", "aside", "footer"],
    ),
    (
        "tables",
        &[
            "table", "tr", "td", "th", "thead", "tbody", "tfoot", "caption", "colgroup", "col",
        ],
    ),
    ("lists", &["ul", "ol", "li", "dl", "dd", "dt"]),
];

/// Attributes retained on every kept tag.
pub static GLOBAL_ATTRS: [&str; 2] = ["id", "class"];

/// Tag-specific attributes retained in addition to [`GLOBAL_ATTRS`].
pub static TAG_ATTRS: [(&str, &[&str]); 3] = [
    ("a", &["href"]),
    ("img", &["alt"]),
    ("meta", &["name", "value"]),
];

// === Lookup tables ===

/// `VOID_TAGS` as a `HashSet`
pub static VOID_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| VOID_TAGS.into_iter().collect());

/// `BLOCK_TAGS` as a `HashSet`
pub static BLOCK_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BLOCK_TAGS.into_iter().collect());

/// `BUNDLES` keyed by bundle name
pub static BUNDLE_MAP: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| BUNDLES.into_iter().collect());

/// `TAG_ATTRS` keyed by tag name
pub static TAG_ATTR_MAP: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| TAG_ATTRS.into_iter().collect());

// === Helper Functions ===

/// Check if a tag never takes a closing tag.
#[inline]
#[must_use]
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAG_SET.contains(tag)
}

/// Check if a tag is followed by a newline when selected.
#[inline]
#[must_use]
pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAG_SET.contains(tag)
}

/// Members of a keep-tag bundle, or `None` for a plain tag name.
#[inline]
#[must_use]
pub fn bundle(name: &str) -> Option<&'static [&'static str]> {
    BUNDLE_MAP.get(name).copied()
}

/// Check if an attribute survives on a kept tag by default.
#[must_use]
pub fn is_allowed_attr(tag: &str, attr: &str) -> bool {
    GLOBAL_ATTRS.contains(&attr)
        || TAG_ATTR_MAP
            .get(tag)
            .is_some_and(|attrs| attrs.contains(&attr))
}
