//! Browser backend and wasm entry points.
//!
//! `WebPage` maps [`Page`] onto `web-sys`; `LocalStore` maps [`Store`] onto
//! `localStorage`. Listener closures are leaked with `Closure::forget` since
//! they live as long as the page.
//!
//! TRADE-OFFS
//! ==========
//! `localStorage` may be unavailable (privacy modes, sandboxed frames). The
//! page then still themes and toggles for the session; nothing persists.

use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event};

use crate::boot::BootGuard;
use crate::config::Config;
use crate::controls::PageControls;
use crate::error::Error;
use crate::page::{ClickHandler, Page, Store};
use crate::selector::Selector;

fn dom_err(op: &'static str) -> impl FnOnce(JsValue) -> Error {
    move |err| Error::Dom { op, detail: format!("{err:?}") }
}

fn storage_err(op: &'static str) -> impl FnOnce(JsValue) -> Error {
    move |err| Error::Storage { op, detail: format!("{err:?}") }
}

/// The live document.
#[derive(Clone)]
pub struct WebPage {
    document: Document,
}

impl WebPage {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The current window's document.
    pub fn current() -> Result<Self, Error> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let document = window.document().ok_or(Error::NoDocument)?;
        Ok(Self::new(document))
    }

    fn listen(&self, target: &web_sys::EventTarget, handler: ClickHandler<Self>, delegated: bool) -> Result<(), Error> {
        let page = self.clone();
        let closure = Closure::wrap(Box::new(move |ev: Event| {
            let reported = if delegated { ev.target() } else { ev.current_target() };
            let Some(event_target) = reported else {
                return;
            };
            let Ok(element) = event_target.dyn_into::<Element>() else {
                return;
            };
            handler(&page, &element);
        }) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(dom_err("addEventListener"))?;
        closure.forget();
        Ok(())
    }
}

fn collect(list: &web_sys::NodeList) -> Vec<Element> {
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(element) = node.dyn_into::<Element>() {
                out.push(element);
            }
        }
    }
    out
}

impl Page for WebPage {
    type Element = Element;

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn select_all(&self, selector: &Selector) -> Result<Vec<Element>, Error> {
        let list = self.document.query_selector_all(&selector.to_css()).map_err(dom_err("querySelectorAll"))?;
        Ok(collect(&list))
    }

    fn select_within(&self, scope: &Element, selector: &Selector) -> Result<Vec<Element>, Error> {
        let list = scope.query_selector_all(&selector.to_css()).map_err(dom_err("querySelectorAll"))?;
        Ok(collect(&list))
    }

    fn closest(&self, element: &Element, selector: &Selector) -> Result<Option<Element>, Error> {
        element.closest(&selector.to_css()).map_err(dom_err("closest"))
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) -> Result<(), Error> {
        element.set_attribute(name, value).map_err(dom_err("setAttribute"))
    }

    fn set_class(&self, element: &Element, class: &str, on: bool) -> Result<(), Error> {
        element
            .class_list()
            .toggle_with_force(class, on)
            .map(|_| ())
            .map_err(dom_err("classList.toggle"))
    }

    fn on_click(&self, element: &Element, handler: ClickHandler<Self>) -> Result<(), Error> {
        self.listen(element, handler, false)
    }

    fn on_document_click(&self, handler: ClickHandler<Self>) -> Result<(), Error> {
        self.listen(&self.document, handler, true)
    }
}

/// `localStorage`, when the browser grants it.
#[derive(Clone)]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    /// Open the window's `localStorage`, degrading to a non-persisting store.
    #[must_use]
    pub fn open() -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => Some(storage),
            Some(Err(err)) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
            _ => {
                log::warn!("localStorage unavailable");
                None
            }
        };
        Self { storage }
    }
}

impl Store for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let Some(storage) = &self.storage else {
            return Ok(None);
        };
        storage.get_item(key).map_err(storage_err("getItem"))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let Some(storage) = &self.storage else {
            log::debug!("not persisting {key}: no storage");
            return Ok(());
        };
        storage.set_item(key, value).map_err(storage_err("setItem"))
    }
}

fn init_logging() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("console logger already installed: {err}");
    }
}

thread_local! {
    static BOOT: BootGuard = const { BootGuard::new() };
}

fn install(config: Config) -> Result<(), Error> {
    if !BOOT.with(BootGuard::claim) {
        log::warn!("page controls already installed; ignoring repeated boot");
        return Ok(());
    }
    let page = WebPage::current()?;
    PageControls::install(&page, LocalStore::open(), config)?;
    Ok(())
}

/// Install the page controls with the default markers. Later calls on the
/// same page are ignored.
#[wasm_bindgen]
pub fn boot() -> Result<(), JsValue> {
    init_logging();
    install(Config::default()).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Install the page controls with a JSON override of the default markers.
#[wasm_bindgen(js_name = bootWithConfig)]
pub fn boot_with_config(config: &str) -> Result<(), JsValue> {
    init_logging();
    let config = Config::from_json(config).map_err(|err| JsValue::from_str(&err.to_string()))?;
    install(config).map_err(|err| JsValue::from_str(&err.to_string()))
}
