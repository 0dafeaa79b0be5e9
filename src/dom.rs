//! Tree Access Facade
//!
//! Parsing, CSS selector matching and structural edits are delegated to the
//! `dom_query` crate. Once filtering is done the document is lowered into an
//! arena of [`Node`]s addressed by [`NodeHandle`], using the lxml-style
//! text/tail model:
//!
//! ```html
//! <div>
//!   TEXT HERE          <!-- a Text child of div -->
//!   <span>inner</span>
//!   TAIL HERE          <!-- span's tail -->
//! </div>
//! ```
//!
//! Rendering reads the arena; selectors still run on the `dom_query`
//! document, whose elements map one-to-one onto arena handles. Every
//! traversal here uses an explicit work stack, so nesting depth is bounded
//! by memory rather than by the call stack.

use std::collections::HashMap;

pub use dom_query::{Document, Matcher, NodeId, NodeRef};

use crate::error::{Error, Result};

/// Index of a node in a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(usize);

/// A single arena slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A tagged node.
    Element(Element),
    /// A run of character data.
    Text(String),
}

/// Element payload: name, attributes, children and the owned tail text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lowercase tag name.
    pub name: String,
    /// Attributes in source order, namespace prefix included (`xlink:href`).
    pub attrs: Vec<(String, String)>,
    /// Child nodes in document order.
    pub children: Vec<NodeHandle>,
    /// Text between this element's closing tag and the next sibling element.
    pub tail: Option<String>,
}

impl Element {
    /// Get an attribute value by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// A filtered document: the `dom_query` tree used for selector matching plus
/// the arena that extraction renders.
pub struct Tree {
    document: Document,
    nodes: Vec<Node>,
    roots: Vec<NodeHandle>,
    handles: HashMap<NodeId, NodeHandle>,
}

impl std::fmt::Debug for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree")
            .field("nodes", &self.nodes)
            .field("roots", &self.roots)
            .finish_non_exhaustive()
    }
}

/// Parse an HTML document straight into a [`Tree`], without filtering.
///
/// Never fails: html5ever recovers from malformed markup the way browsers do.
#[must_use]
pub fn parse(html: &str) -> Tree {
    Tree::from_document(Document::from(html))
}

/// Compile a selector, mapping parse failures to [`Error::InvalidSelector`].
pub fn compile_selector(selector: &str) -> Result<Matcher> {
    Matcher::new(selector).map_err(|err| Error::InvalidSelector {
        selector: selector.to_string(),
        reason: format!("{err:?}"),
    })
}

// === Document Manipulation ===

/// All elements of `document` matching `selector`, in document order.
pub fn select<'a>(document: &'a Document, selector: &str) -> Result<Vec<NodeRef<'a>>> {
    let matcher = compile_selector(selector)?;
    Ok(document.select_matcher(&matcher).nodes().to_vec())
}

/// Detach an element together with its tail: the text (and comments) up to
/// the next element sibling.
pub fn remove_with_tail(node: &NodeRef) {
    let mut next = node.next_sibling();
    while let Some(sibling) = next {
        if sibling.is_element() {
            break;
        }
        next = sibling.next_sibling();
        sibling.remove_from_parent();
    }
    node.remove_from_parent();
}

/// Replace an element with a text node. Following text stays in place.
pub fn replace_with_text(document: &Document, node: &NodeRef, text: &str) {
    let replacement = document.tree.new_text(text);
    node.replace_with(&replacement);
}

// === Lowering ===

struct Frame<'a> {
    parent: Option<NodeHandle>,
    pending: std::vec::IntoIter<NodeRef<'a>>,
    previous_element: Option<NodeHandle>,
}

#[derive(Default)]
struct Lowering {
    nodes: Vec<Node>,
    roots: Vec<NodeHandle>,
    handles: HashMap<NodeId, NodeHandle>,
}

impl Lowering {
    /// Lower everything below `root`. Text following an element becomes that
    /// element's tail, adjacent text runs merge, comments and doctypes are
    /// dropped.
    fn lower(&mut self, root: &NodeRef) {
        let mut stack = vec![Frame {
            parent: None,
            pending: root.children().into_iter(),
            previous_element: None,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(child) = frame.pending.next() else {
                stack.pop();
                continue;
            };
            let parent = frame.parent;

            if child.is_element() {
                let handle = self.push_element(&child);
                self.attach(parent, handle);
                frame.previous_element = Some(handle);
                stack.push(Frame {
                    parent: Some(handle),
                    pending: child.children().into_iter(),
                    previous_element: None,
                });
            } else if child.is_text() {
                let text = child.text();
                match frame.previous_element {
                    Some(handle) => self.append_tail(handle, &text),
                    None => self.push_text(parent, &text),
                }
            }
        }
    }

    fn push(&mut self, node: Node) -> NodeHandle {
        self.nodes.push(node);
        NodeHandle(self.nodes.len() - 1)
    }

    fn push_element(&mut self, node: &NodeRef) -> NodeHandle {
        let name = node
            .node_name()
            .map(|name| name.to_string())
            .unwrap_or_default();
        let attrs = node
            .attrs()
            .iter()
            .map(|attr| {
                let name = match &attr.name.prefix {
                    Some(prefix) => format!("{prefix}:{}", attr.name.local),
                    None => attr.name.local.to_string(),
                };
                (name, attr.value.to_string())
            })
            .collect();

        let handle = self.push(Node::Element(Element {
            name,
            attrs,
            children: Vec::new(),
            tail: None,
        }));
        self.handles.insert(node.id, handle);
        handle
    }

    fn siblings_mut(&mut self, parent: Option<NodeHandle>) -> Option<&mut Vec<NodeHandle>> {
        match parent {
            None => Some(&mut self.roots),
            Some(handle) => match self.nodes.get_mut(handle.0) {
                Some(Node::Element(element)) => Some(&mut element.children),
                _ => None,
            },
        }
    }

    fn attach(&mut self, parent: Option<NodeHandle>, handle: NodeHandle) {
        if let Some(siblings) = self.siblings_mut(parent) {
            siblings.push(handle);
        }
    }

    fn push_text(&mut self, parent: Option<NodeHandle>, text: &str) {
        let last = self
            .siblings_mut(parent)
            .and_then(|siblings| siblings.last().copied());
        if let Some(Node::Text(existing)) = last.and_then(|handle| self.nodes.get_mut(handle.0)) {
            existing.push_str(text);
            return;
        }
        let handle = self.push(Node::Text(text.to_string()));
        self.attach(parent, handle);
    }

    fn append_tail(&mut self, handle: NodeHandle, text: &str) {
        if let Some(Node::Element(element)) = self.nodes.get_mut(handle.0) {
            element.tail.get_or_insert_with(String::new).push_str(text);
        }
    }
}

enum TextStep {
    Visit(NodeHandle),
    Tail(NodeHandle),
}

impl Tree {
    /// Lower a (typically already filtered) document into a [`Tree`].
    #[must_use]
    pub fn from_document(document: Document) -> Self {
        let mut lowering = Lowering::default();
        lowering.lower(&document.root());

        Tree {
            document,
            nodes: lowering.nodes,
            roots: lowering.roots,
            handles: lowering.handles,
        }
    }

    /// Top-level nodes of the document (normally just `html`).
    #[must_use]
    pub fn roots(&self) -> &[NodeHandle] {
        &self.roots
    }

    /// Get the node stored at `handle`.
    #[must_use]
    pub fn node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle.0)
    }

    /// Get the element stored at `handle`.
    #[must_use]
    pub fn element(&self, handle: NodeHandle) -> Option<&Element> {
        match self.node(handle) {
            Some(Node::Element(element)) => Some(element),
            _ => None,
        }
    }

    /// Tag name of an element.
    #[must_use]
    pub fn tag_name(&self, handle: NodeHandle) -> Option<&str> {
        self.element(handle).map(|element| element.name.as_str())
    }

    /// All elements matching `selector`, in document order.
    pub fn query(&self, selector: &str) -> Result<Vec<NodeHandle>> {
        let matcher = compile_selector(selector)?;
        Ok(self.query_matcher(&matcher))
    }

    /// Like [`Tree::query`] with a pre-compiled matcher.
    #[must_use]
    pub fn query_matcher(&self, matcher: &Matcher) -> Vec<NodeHandle> {
        self.document
            .select_matcher(matcher)
            .nodes()
            .iter()
            .filter_map(|node| self.handles.get(&node.id).copied())
            .collect()
    }

    /// Concatenated text of all descendants, including the tails of
    /// descendant elements but not the tail of `handle` itself.
    #[must_use]
    pub fn text_content(&self, handle: NodeHandle) -> String {
        let mut out = String::new();
        let mut stack = vec![TextStep::Visit(handle)];

        while let Some(step) = stack.pop() {
            match step {
                TextStep::Visit(current) => match self.node(current) {
                    Some(Node::Text(text)) => out.push_str(text),
                    Some(Node::Element(element)) => {
                        for &child in element.children.iter().rev() {
                            stack.push(TextStep::Tail(child));
                            stack.push(TextStep::Visit(child));
                        }
                    }
                    None => {}
                },
                TextStep::Tail(current) => {
                    if let Some(tail) = self.element(current).and_then(|e| e.tail.as_deref()) {
                        out.push_str(tail);
                    }
                }
            }
        }
        out
    }
}
