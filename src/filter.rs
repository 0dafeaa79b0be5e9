//! Structural filtering.
//!
//! Runs before extraction and mutates the parsed document in place, so
//! every later selector sees the filtered structure:
//!
//! 1. drop elements that are `display: none` by default, unless the literal
//!    selector string was requested as a keep tag;
//! 2. drop elements matching the caller's remove selectors, unconditionally;
//! 3. replace `<img alt>` with its alt text, unless `img` is kept.
//!
//! Removal is irreversible for the call and takes the element's tail with it.

use crate::dom::{self, Document};
use crate::error::Result;
use crate::keep::KeepTags;
use crate::tags::{DISPLAY_NONE_SELECTORS, IMAGE_TAG};

/// Apply all filtering passes in order.
pub fn apply<S: AsRef<str>>(
    document: &Document,
    requested_keep_tags: &[S],
    remove_selectors: &[S],
    keep: &KeepTags,
) -> Result<()> {
    remove_display_none(document, requested_keep_tags)?;
    remove_selected(document, remove_selectors)?;
    if !keep.contains(IMAGE_TAG) {
        replace_images_with_alt(document)?;
    }
    Ok(())
}

/// Remove every element matching a default display-suppressed selector.
///
/// The exemption compares against the keep-tag request as written, so a
/// bundle that happens to contain `title` does not exempt `title`.
pub fn remove_display_none<S: AsRef<str>>(document: &Document, requested_keep_tags: &[S]) -> Result<()> {
    for selector in DISPLAY_NONE_SELECTORS {
        if requested_keep_tags.iter().any(|tag| tag.as_ref() == selector) {
            log::trace!("keeping display:none selector {selector:?}");
            continue;
        }
        remove_matching(document, selector)?;
    }
    Ok(())
}

/// Remove every element matching one of the caller's remove selectors.
pub fn remove_selected<S: AsRef<str>>(document: &Document, remove_selectors: &[S]) -> Result<()> {
    for selector in remove_selectors {
        remove_matching(document, selector.as_ref())?;
    }
    Ok(())
}

/// Replace each image carrying an `alt` attribute with that text.
///
/// Images without `alt` stay as empty elements.
pub fn replace_images_with_alt(document: &Document) -> Result<()> {
    let images = dom::select(document, "img[alt]")?;
    log::debug!("replacing {} image(s) with alt text", images.len());

    for img in &images {
        if let Some(alt) = img.attr("alt") {
            dom::replace_with_text(document, img, &alt);
        }
    }
    Ok(())
}

fn remove_matching(document: &Document, selector: &str) -> Result<()> {
    let matches = dom::select(document, selector)?;
    if !matches.is_empty() {
        log::debug!("removing {} element(s) matching {selector:?}", matches.len());
    }
    for node in &matches {
        dom::remove_with_tail(node);
    }
    Ok(())
}
