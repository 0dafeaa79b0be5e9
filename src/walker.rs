//! Selector walking.
//!
//! Drives the renderer over each selector's matches, in selector order and
//! then document order, and assembles the raw (unfinished) output.
//!
//! Matches are not deduplicated across selectors: an element matched by two
//! selectors, or a descendant of another selector's match, is emitted once
//! per matching selector.

use crate::dom::Tree;
use crate::error::Result;
use crate::render::{render, RenderOptions};
use crate::tags::{self, ROOT_SELECTOR};

/// Walk `selectors` over the tree and concatenate the rendered matches.
///
/// Each match contributes its rendering, a newline when it is a block tag,
/// and then its tail text verbatim. With `first`, the walk stops after the
/// first match of any selector.
pub fn walk<S: AsRef<str>>(
    tree: &Tree,
    selectors: &[S],
    first: bool,
    opts: &RenderOptions,
) -> Result<String> {
    let mut out = String::new();

    if selectors.is_empty() {
        walk_selector(tree, ROOT_SELECTOR, first, opts, &mut out)?;
        return Ok(out);
    }

    for selector in selectors {
        let stop = walk_selector(tree, selector.as_ref(), first, opts, &mut out)?;
        if stop {
            log::debug!("first match found for {:?}; stopping", selector.as_ref());
            break;
        }
    }
    Ok(out)
}

/// Returns `true` when `first` is set and a match was emitted.
fn walk_selector(
    tree: &Tree,
    selector: &str,
    first: bool,
    opts: &RenderOptions,
    out: &mut String,
) -> Result<bool> {
    let matches = tree.query(selector)?;
    log::trace!("selector {selector:?} matched {} element(s)", matches.len());

    for handle in matches {
        let Some(element) = tree.element(handle) else {
            continue;
        };

        out.push_str(&render(tree, handle, opts));
        if tags::is_block_tag(&element.name) {
            out.push('\n');
        }
        if let Some(tail) = &element.tail {
            out.push_str(tail);
        }

        if first {
            return Ok(true);
        }
    }
    Ok(false)
}
