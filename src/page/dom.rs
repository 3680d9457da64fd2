use super::{Page, PageContext};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// The live browser document.
#[derive(Debug, Clone)]
pub struct DomPage {
    document: Document,
    context: PageContext,
}

impl DomPage {
    pub const fn new(document: Document, context: PageContext) -> Self {
        Self { document, context }
    }

    /// The current window's document, if running in a window.
    pub fn current(context: PageContext) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document, context))
    }
}

impl Page for DomPage {
    type Element = Element;

    fn context(&self) -> &PageContext {
        &self.context
    }

    fn elements_by_class(&self, class: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(&format!(".{}", class)) else {
            tracing::warn!(class, "invalid class selector");
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn element_id(&self, element: &Element) -> String {
        element.id()
    }

    fn set_inner_html(&self, element: &Element, html: &str) {
        element.set_inner_html(html);
    }
}
