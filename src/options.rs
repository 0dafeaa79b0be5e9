//! Configuration options for extraction.
//!
//! The `Options` struct is the extraction request: which regions to
//! extract, what to drop first, which tags to keep and how to format the
//! output.

/// Configuration options for extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings, or the chained setters.
///
/// # Example
///
/// ```rust
/// use strip_tags::Options;
///
/// // Use defaults: whole document, plain text
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     selectors: vec![".entry".to_string()],
///     minify: true,
///     ..Options::default()
/// };
///
/// // Or chain setters
/// let options = Options::default()
///     .with_selectors(["article"])
///     .with_keep_tags(["hs", "a"])
///     .minify(true);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// CSS selectors picking the regions to extract, applied in order.
    ///
    /// An element matched by several selectors is emitted once per selector.
    ///
    /// Default: empty, meaning the whole document (`html`)
    pub selectors: Vec<String>,

    /// CSS selectors for elements removed (with their subtrees) before
    /// extraction, whether or not their tag is kept.
    ///
    /// Default: empty
    pub remove_selectors: Vec<String>,

    /// Tag names (or bundle names such as `hs` or `tables`) whose markup is
    /// retained in the output.
    ///
    /// Default: empty (plain text)
    pub keep_tags: Vec<String>,

    /// Keep every attribute on retained tags, not only the allow-listed ones.
    ///
    /// Default: `false`
    pub all_attrs: bool,

    /// Collapse whitespace runs.
    ///
    /// Default: `false`
    pub minify: bool,

    /// Stop after the first matched element across all selectors.
    ///
    /// Default: `false`
    pub first: bool,
}

fn owned<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

impl Options {
    /// Set the selectors to extract.
    #[must_use]
    pub fn with_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selectors = owned(selectors);
        self
    }

    /// Set the selectors removed before extraction.
    #[must_use]
    pub fn with_remove<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.remove_selectors = owned(selectors);
        self
    }

    /// Set the tags (or bundles) to keep.
    #[must_use]
    pub fn with_keep_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keep_tags = owned(tags);
        self
    }

    /// Keep every attribute on retained tags.
    #[must_use]
    pub fn all_attrs(mut self, all_attrs: bool) -> Self {
        self.all_attrs = all_attrs;
        self
    }

    /// Collapse whitespace in the output.
    #[must_use]
    pub fn minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Stop after the first match.
    #[must_use]
    pub fn first(mut self, first: bool) -> Self {
        self.first = first;
        self
    }
}
