//! Extraction pipeline.
//!
//! parse -> resolve keep tags -> filter -> lower -> walk selectors -> finish.
//! Each call owns its tree; nothing is shared between calls.

use crate::dom::{Document, Tree};
use crate::error::Result;
use crate::filter;
use crate::keep::KeepTags;
use crate::options::Options;
use crate::render::RenderOptions;
use crate::walker;
use crate::whitespace::minify_whitespace;

/// Main entry point for extraction.
pub(crate) fn extract_text(html: &str, options: &Options) -> Result<String> {
    log::debug!(
        "extracting {} chars with {} selector(s), {} remove selector(s), {} keep tag(s)",
        html.len(),
        options.selectors.len(),
        options.remove_selectors.len(),
        options.keep_tags.len()
    );

    let document = Document::from(html);
    let keep = KeepTags::resolve(&options.keep_tags);

    filter::apply(&document, &options.keep_tags, &options.remove_selectors, &keep)?;
    let tree = Tree::from_document(document);

    let render_opts = RenderOptions {
        keep: &keep,
        minify: options.minify,
        all_attrs: options.all_attrs,
    };
    let raw = walker::walk(&tree, &options.selectors, options.first, &render_opts)?;

    let output = finish(&raw, options.minify);
    log::debug!("extraction produced {} chars", output.len());
    Ok(output)
}

/// Trim the assembled output and, when minifying, collapse its whitespace.
#[must_use]
pub fn finish(raw: &str, minify: bool) -> String {
    let trimmed = raw.trim();
    if minify {
        minify_whitespace(trimmed)
    } else {
        trimmed.to_string()
    }
}
