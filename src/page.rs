//! Seams between the controllers and their host.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controllers never touch `web-sys` directly. They read and mutate the
//! page through [`Page`] and persist through [`Store`], so the same logic
//! runs against the browser (`web` module, `hydrate` feature) and against the
//! in-memory page used by tests (`mem` module).
//!
//! Methods take `&self`: the DOM is shared mutable state owned by the host,
//! and handlers receive the page again on every click.

use std::fmt;
use std::rc::Rc;

use crate::error::Error;
use crate::selector::Selector;

/// Click callback.
///
/// Receives the page and the element the click is reported for: the
/// listening element for element listeners, the event target for the
/// document listener.
pub type ClickHandler<P> = Rc<dyn Fn(&P, &<P as Page>::Element)>;

/// Read/write access to a rendered document.
pub trait Page: Sized + 'static {
    /// Handle to one element. Equality is element identity.
    type Element: Clone + PartialEq + fmt::Debug + 'static;

    /// The `<html>` element.
    fn root(&self) -> Option<Self::Element>;

    /// The `<body>` element.
    fn body(&self) -> Option<Self::Element>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All matching elements in document order.
    fn select_all(&self, selector: &Selector) -> Result<Vec<Self::Element>, Error>;

    /// Matching descendants of `scope` in document order. `scope` itself is
    /// never included.
    fn select_within(&self, scope: &Self::Element, selector: &Selector) -> Result<Vec<Self::Element>, Error>;

    /// Nearest inclusive ancestor of `element` that matches.
    fn closest(&self, element: &Self::Element, selector: &Selector) -> Result<Option<Self::Element>, Error>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str) -> Result<(), Error>;

    /// Add `class` when `on`, remove it otherwise.
    fn set_class(&self, element: &Self::Element, class: &str, on: bool) -> Result<(), Error>;

    /// Listen for clicks on `element` (including clicks bubbling up from its
    /// descendants) for the lifetime of the page.
    fn on_click(&self, element: &Self::Element, handler: ClickHandler<Self>) -> Result<(), Error>;

    /// Listen for every click on the document for the lifetime of the page.
    fn on_document_click(&self, handler: ClickHandler<Self>) -> Result<(), Error>;
}

/// String key/value persistence.
pub trait Store: 'static {
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
}
