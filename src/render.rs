//! Node rendering.
//!
//! Converts a (filtered) subtree into text, reconstructing markup only for
//! tags in the keep set. Rendering is read-only over the tree.

use crate::dom::{Element, Node, NodeHandle, Tree};
use crate::keep::KeepTags;
use crate::tags::{self, PREFORMATTED_TAG};
use crate::whitespace::minify_text;

/// Rendering switches shared by every node of one extraction.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    /// Tags whose markup is reconstructed.
    pub keep: &'a KeepTags,
    /// Collapse whitespace in text runs (never inside `pre`).
    pub minify: bool,
    /// Keep every attribute on kept tags instead of the allow-list.
    pub all_attrs: bool,
}

/// Render a node and its descendants.
///
/// The node's own tail is not part of the result; children's tails are.
#[must_use]
pub fn render(tree: &Tree, handle: NodeHandle, opts: &RenderOptions) -> String {
    let mut out = String::new();
    let mut stack = vec![Step::Visit(handle)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Visit(current) => match tree.node(current) {
                Some(Node::Text(text)) => push_text(text, opts.minify, &mut out),
                Some(Node::Element(element)) => {
                    open_element(tree, current, element, opts, &mut stack, &mut out);
                }
                None => {}
            },
            Step::Tail(current) => {
                if let Some(tail) = tree.element(current).and_then(|e| e.tail.as_deref()) {
                    push_text(tail, opts.minify, &mut out);
                }
            }
            Step::Close(name) => {
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
        }
    }
    out
}

enum Step<'t> {
    Visit(NodeHandle),
    Tail(NodeHandle),
    Close(&'t str),
}

/// Emit what comes before an element's children and schedule the rest.
fn open_element<'t>(
    tree: &'t Tree,
    handle: NodeHandle,
    element: &'t Element,
    opts: &RenderOptions,
    stack: &mut Vec<Step<'t>>,
    out: &mut String,
) {
    let kept = opts.keep.contains(&element.name);
    if kept {
        push_open_tag(element, opts.all_attrs, out);
        if !tags::is_void_tag(&element.name) {
            stack.push(Step::Close(&element.name));
        }
    }

    if element.name == PREFORMATTED_TAG {
        out.push_str(&tree.text_content(handle));
        return;
    }
    for &child in element.children.iter().rev() {
        stack.push(Step::Tail(child));
        stack.push(Step::Visit(child));
    }
}

fn push_text(text: &str, minify: bool, out: &mut String) {
    if minify {
        out.push_str(&minify_text(text));
    } else {
        out.push_str(text);
    }
}

fn push_open_tag(element: &Element, all_attrs: bool, out: &mut String) {
    out.push('<');
    out.push_str(&element.name);
    for (name, value) in &element.attrs {
        if all_attrs || tags::is_allowed_attr(&element.name, name) {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&value.replace('"', "&quot;"));
            out.push('"');
        }
    }
    out.push('>');
}
