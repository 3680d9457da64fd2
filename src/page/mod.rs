//! Access to the documentation page the controllers rewrite.

#[cfg(target_arch = "wasm32")]
mod dom;
mod memory;

#[cfg(target_arch = "wasm32")]
pub use dom::DomPage;
pub use memory::MemoryPage;

/// Container listing the modules that import the current one.
pub const IMPORTED_BY_LIST_CLASS: &str = "imported-by-list";
/// Containers listing the instances of a typeclass.
pub const INSTANCES_LIST_CLASS: &str = "instances-list";
/// Containers listing the instances that involve a type.
pub const INSTANCES_FOR_LIST_CLASS: &str = "instances-for-list";

/// Id prefix of [`INSTANCES_LIST_CLASS`] elements; the rest of the id is the class name.
pub const INSTANCES_LIST_ID_PREFIX: &str = "instances-list-";
/// Id prefix of [`INSTANCES_FOR_LIST_CLASS`] elements; the rest of the id is the type name.
pub const INSTANCES_FOR_LIST_ID_PREFIX: &str = "instances-for-list-";

/// Values the page bootstrap provides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    /// Prefixed onto every rendered link.
    pub site_root: String,
    /// Name of the module this page documents, if it documents one.
    pub module_name: Option<String>,
}

impl PageContext {
    pub fn new(site_root: impl Into<String>) -> Self {
        Self {
            site_root: site_root.into(),
            module_name: None,
        }
    }

    pub fn with_module(mut self, module_name: impl Into<String>) -> Self {
        self.module_name = Some(module_name.into());
        self
    }

    /// The module name, treating an empty string as absent.
    pub fn module_name(&self) -> Option<&str> {
        self.module_name.as_deref().filter(|name| !name.is_empty())
    }
}

/// The subset of the DOM the controllers need.
///
/// Element handles are cheap clones that stay valid for the life of the page.
pub trait Page {
    type Element: Clone;

    fn context(&self) -> &PageContext;

    /// Every element carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;

    /// First element carrying `class`.
    fn first_by_class(&self, class: &str) -> Option<Self::Element> {
        self.elements_by_class(class).into_iter().next()
    }

    fn element_id(&self, element: &Self::Element) -> String;

    /// Replace the element's children with `html`.
    fn set_inner_html(&self, element: &Self::Element, html: &str);
}
