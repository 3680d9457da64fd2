use super::{Page, PageContext};
use std::cell::RefCell;

#[derive(Debug, Clone)]
struct Node {
    classes: Vec<String>,
    id: String,
    inner_html: String,
}

/// A flat in-memory page: a list of elements with classes, ids and contents.
///
/// Used by native callers that want controller output without a browser.
#[derive(Debug, Default)]
pub struct MemoryPage {
    context: PageContext,
    nodes: RefCell<Vec<Node>>,
}

impl MemoryPage {
    pub fn new(context: PageContext) -> Self {
        Self {
            context,
            nodes: RefCell::default(),
        }
    }

    /// Append an element. `class` may hold several space-separated class names.
    /// Returns the handle of the new element.
    pub fn push(&mut self, class: &str, id: &str, inner_html: &str) -> usize {
        let nodes = self.nodes.get_mut();
        nodes.push(Node {
            classes: class.split_whitespace().map(str::to_string).collect(),
            id: id.to_string(),
            inner_html: inner_html.to_string(),
        });
        nodes.len() - 1
    }

    /// Builder form of [`MemoryPage::push`].
    pub fn with_element(mut self, class: &str, id: &str, inner_html: &str) -> Self {
        self.push(class, id, inner_html);
        self
    }

    pub fn inner_html(&self, element: usize) -> Option<String> {
        self.nodes.borrow().get(element).map(|n| n.inner_html.clone())
    }

    /// Contents of the element with the given id.
    pub fn inner_html_by_id(&self, id: &str) -> Option<String> {
        self.nodes
            .borrow()
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.inner_html.clone())
    }

    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }
}

impl Page for MemoryPage {
    type Element = usize;

    fn context(&self) -> &PageContext {
        &self.context
    }

    fn elements_by_class(&self, class: &str) -> Vec<usize> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, n)| n.classes.iter().any(|c| c == class))
            .map(|(i, _)| i)
            .collect()
    }

    fn element_id(&self, element: &usize) -> String {
        self.nodes
            .borrow()
            .get(*element)
            .map(|n| n.id.clone())
            .unwrap_or_default()
    }

    fn set_inner_html(&self, element: &usize, html: &str) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(*element) {
            node.inner_html = html.to_string();
        }
    }
}
