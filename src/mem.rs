//! In-memory page and store.
//!
//! `MemPage` is a minimal element tree with attributes, class lists and
//! click listeners. Clicks bubble from the target through its ancestors and
//! then reach document listeners, the same order a browser uses. It exists
//! so the controllers can be exercised without a browser.

#[cfg(test)]
#[path = "mem_test.rs"]
mod mem_test;

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::error::Error;
use crate::page::{ClickHandler, Page, Store};
use crate::selector::Selector;

/// Handle to an element in a [`MemPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node {
    tag: String,
    attrs: BTreeMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn matches(&self, selector: &Selector) -> bool {
        selector.matches(&self.tag, &|name| self.attrs.get(name).map(String::as_str))
    }
}

pub struct MemPage {
    nodes: RefCell<Vec<Node>>,
    root: NodeId,
    body: NodeId,
    element_listeners: RefCell<Vec<(NodeId, ClickHandler<MemPage>)>>,
    document_listeners: RefCell<Vec<ClickHandler<MemPage>>>,
}

impl Default for MemPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemPage {
    /// A page holding only `<html>` and an empty `<body>`.
    #[must_use]
    pub fn new() -> Self {
        let root = NodeId(0);
        let body = NodeId(1);
        let nodes = vec![
            Node { tag: "html".into(), attrs: BTreeMap::new(), parent: None, children: vec![body] },
            Node { tag: "body".into(), attrs: BTreeMap::new(), parent: Some(root), children: Vec::new() },
        ];
        Self {
            nodes: RefCell::new(nodes),
            root,
            body,
            element_listeners: RefCell::new(Vec::new()),
            document_listeners: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn body_id(&self) -> NodeId {
        self.body
    }

    /// Append a new element under `parent` and return it.
    pub fn append(&self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(Node {
            tag: tag.to_owned(),
            attrs: attrs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect(),
            parent: Some(parent),
            children: Vec::new(),
        });
        nodes[parent.0].children.push(id);
        id
    }

    /// Dispatch a click on `target`.
    ///
    /// Element listeners run innermost first, then document listeners.
    /// Listener lists are snapshotted before dispatch so handlers may freely
    /// mutate the page.
    pub fn click(&self, target: NodeId) {
        let path = self.ancestors(target);
        let element_listeners: Vec<(NodeId, ClickHandler<MemPage>)> = self.element_listeners.borrow().clone();
        for node in &path {
            for (listening, handler) in &element_listeners {
                if listening == node {
                    handler(self, node);
                }
            }
        }
        let document_listeners: Vec<ClickHandler<MemPage>> = self.document_listeners.borrow().clone();
        for handler in &document_listeners {
            handler(self, &target);
        }
    }

    /// Whether the class list of `element` contains `class`.
    #[must_use]
    pub fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[element.0]
            .attrs
            .get("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    /// Number of listeners attached to `element`.
    #[must_use]
    pub fn listener_count(&self, element: NodeId) -> usize {
        self.element_listeners.borrow().iter().filter(|(id, _)| *id == element).count()
    }

    #[must_use]
    pub fn document_listener_count(&self) -> usize {
        self.document_listeners.borrow().len()
    }

    /// `element` followed by its ancestors up to the root.
    fn ancestors(&self, element: NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut path = vec![element];
        let mut current = nodes[element.0].parent;
        while let Some(id) = current {
            path.push(id);
            current = nodes[id.0].parent;
        }
        path
    }

    /// Preorder walk of the descendants of `scope`.
    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = nodes[scope.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    fn filter(&self, candidates: Vec<NodeId>, selector: &Selector) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        candidates.into_iter().filter(|id| nodes[id.0].matches(selector)).collect()
    }
}

impl Page for MemPage {
    type Element = NodeId;

    fn root(&self) -> Option<NodeId> {
        Some(self.root)
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.body)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let mut all = vec![self.root];
        all.extend(self.descendants(self.root));
        let nodes = self.nodes.borrow();
        all.into_iter().find(|node| nodes[node.0].attrs.get("id").is_some_and(|v| v == id))
    }

    fn select_all(&self, selector: &Selector) -> Result<Vec<NodeId>, Error> {
        let mut all = vec![self.root];
        all.extend(self.descendants(self.root));
        Ok(self.filter(all, selector))
    }

    fn select_within(&self, scope: &NodeId, selector: &Selector) -> Result<Vec<NodeId>, Error> {
        Ok(self.filter(self.descendants(*scope), selector))
    }

    fn closest(&self, element: &NodeId, selector: &Selector) -> Result<Option<NodeId>, Error> {
        let path = self.ancestors(*element);
        let nodes = self.nodes.borrow();
        Ok(path.into_iter().find(|id| nodes[id.0].matches(selector)))
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[element.0].attrs.get(name).cloned()
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) -> Result<(), Error> {
        self.nodes.borrow_mut()[element.0].attrs.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_class(&self, element: &NodeId, class: &str, on: bool) -> Result<(), Error> {
        let mut nodes = self.nodes.borrow_mut();
        let attrs = &mut nodes[element.0].attrs;
        let mut classes: Vec<String> = attrs
            .get("class")
            .map(|list| list.split_whitespace().filter(|c| *c != class).map(str::to_owned).collect())
            .unwrap_or_default();
        if on {
            classes.push(class.to_owned());
        }
        attrs.insert("class".into(), classes.join(" "));
        Ok(())
    }

    fn on_click(&self, element: &NodeId, handler: ClickHandler<Self>) -> Result<(), Error> {
        self.element_listeners.borrow_mut().push((*element, handler));
        Ok(())
    }

    fn on_document_click(&self, handler: ClickHandler<Self>) -> Result<(), Error> {
        self.document_listeners.borrow_mut().push(handler);
        Ok(())
    }
}

/// Shared in-memory key/value store. Clones see the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding `key = value`.
    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl Store for MemStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
