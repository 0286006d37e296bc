//! In-memory [`DomHost`] for tests.

use crate::shared::dom::{ClickHandler, DomHost};
use contracts::shared::sidebar::{ButtonSpec, ElementLookup};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryNode {
    pub tag: String,
    pub id: Option<String>,
    pub class_name: String,
    pub title: Option<String>,
    pub text: String,
    /// Selectors other than `#id` this node answers to.
    pub matches: Vec<String>,
    /// Appended at runtime rather than present in the initial markup.
    pub created: bool,
}

#[derive(Default)]
struct Inner {
    nodes: Vec<MemoryNode>,
    listeners: HashMap<usize, Vec<ClickHandler>>,
    body_classes: BTreeSet<String>,
}

#[derive(Clone, Default)]
pub struct MemoryDom {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(self, tag: &str, id: Option<&str>, matches: &[&str]) -> Self {
        self.inner.borrow_mut().nodes.push(MemoryNode {
            tag: tag.to_string(),
            id: id.map(str::to_string),
            matches: matches.iter().map(|s| s.to_string()).collect(),
            ..MemoryNode::default()
        });
        self
    }

    pub fn with_body_class(self, class: &str) -> Self {
        self.inner.borrow_mut().body_classes.insert(class.to_string());
        self
    }

    pub fn node(&self, handle: usize) -> MemoryNode {
        self.inner.borrow().nodes[handle].clone()
    }

    pub fn node_by_id(&self, id: &str) -> Option<MemoryNode> {
        self.inner
            .borrow()
            .nodes
            .iter()
            .find(|node| node.id.as_deref() == Some(id))
            .cloned()
    }

    pub fn handle_by_id(&self, id: &str) -> Option<usize> {
        self.inner
            .borrow()
            .nodes
            .iter()
            .position(|node| node.id.as_deref() == Some(id))
    }

    pub fn created_nodes(&self) -> Vec<MemoryNode> {
        self.inner
            .borrow()
            .nodes
            .iter()
            .filter(|node| node.created)
            .cloned()
            .collect()
    }

    pub fn listener_count(&self, handle: usize) -> usize {
        self.inner
            .borrow()
            .listeners
            .get(&handle)
            .map_or(0, Vec::len)
    }

    pub fn total_listeners(&self) -> usize {
        self.inner.borrow().listeners.values().map(Vec::len).sum()
    }

    pub fn body_classes(&self) -> Vec<String> {
        self.inner.borrow().body_classes.iter().cloned().collect()
    }

    /// Dispatches a click to every listener on the element.
    pub fn click(&self, handle: usize) {
        // Handlers call back into the DOM, so they run without the borrow held.
        let handlers = self.inner.borrow_mut().listeners.remove(&handle);
        let Some(mut handlers) = handlers else {
            return;
        };
        for handler in handlers.iter_mut() {
            handler();
        }
        let mut inner = self.inner.borrow_mut();
        let slot = inner.listeners.entry(handle).or_default();
        handlers.append(slot);
        *slot = handlers;
    }

    pub fn click_id(&self, id: &str) {
        if let Some(handle) = self.handle_by_id(id) {
            self.click(handle);
        }
    }
}

impl DomHost for MemoryDom {
    type Element = usize;

    fn find(&self, lookup: &ElementLookup) -> Option<usize> {
        let selector = lookup.as_selector();
        self.inner.borrow().nodes.iter().position(|node| match lookup {
            ElementLookup::Id(id) => node.id.as_deref() == Some(id.as_str()),
            ElementLookup::Selector(_) => {
                node.matches.contains(&selector)
                    || node.id.as_ref().is_some_and(|id| format!("#{id}") == selector)
            }
        })
    }

    fn append_button(&self, spec: &ButtonSpec) -> Result<usize, String> {
        let mut inner = self.inner.borrow_mut();
        inner.nodes.push(MemoryNode {
            tag: "button".to_string(),
            id: Some(spec.id.clone()),
            class_name: spec.class_name.clone(),
            title: Some(spec.title.clone()),
            text: spec.label.clone(),
            matches: vec![format!("button.{}", spec.class_name)],
            created: true,
        });
        Ok(inner.nodes.len() - 1)
    }

    fn on_click(&self, element: &usize, handler: ClickHandler) -> Result<(), String> {
        let mut inner = self.inner.borrow_mut();
        if *element >= inner.nodes.len() {
            return Err(format!("no element with handle {element}"));
        }
        inner.listeners.entry(*element).or_default().push(handler);
        Ok(())
    }

    fn body_has_class(&self, class: &str) -> bool {
        self.inner.borrow().body_classes.contains(class)
    }

    fn set_body_class(&self, class: &str, present: bool) -> Result<(), String> {
        let mut inner = self.inner.borrow_mut();
        if present {
            inner.body_classes.insert(class.to_string());
        } else {
            inner.body_classes.remove(class);
        }
        Ok(())
    }
}
