//! Thin seam over the page DOM.
//!
//! The sidebar controller only talks to [`DomHost`], so its wiring can be
//! exercised without a browser. [`BrowserDom`] is the `web-sys` implementation
//! used on the page.

use contracts::shared::sidebar::{ButtonSpec, ElementLookup};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement};

pub type ClickHandler = Box<dyn FnMut()>;

pub trait DomHost {
    type Element: Clone + PartialEq;

    fn find(&self, lookup: &ElementLookup) -> Option<Self::Element>;

    /// Creates a `<button>` and appends it as the last child of `<body>`.
    fn append_button(&self, spec: &ButtonSpec) -> Result<Self::Element, String>;

    /// The handler lives as long as the page.
    fn on_click(&self, element: &Self::Element, handler: ClickHandler) -> Result<(), String>;

    fn body_has_class(&self, class: &str) -> bool;

    fn set_body_class(&self, class: &str, present: bool) -> Result<(), String>;
}

pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    pub fn current() -> Option<Self> {
        let document = window().and_then(|w| w.document())?;
        Some(Self { document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn body(&self) -> Result<HtmlElement, String> {
        self.document
            .body()
            .ok_or_else(|| "document has no <body>".to_string())
    }
}

fn js_err(err: JsValue) -> String {
    format!("{:?}", err)
}

impl DomHost for BrowserDom {
    type Element = Element;

    fn find(&self, lookup: &ElementLookup) -> Option<Element> {
        match lookup {
            ElementLookup::Id(id) => self.document.get_element_by_id(id),
            ElementLookup::Selector(selector) => match self.document.query_selector(selector) {
                Ok(found) => found,
                Err(err) => {
                    log::warn!("Invalid selector '{}': {}", selector, js_err(err));
                    None
                }
            },
        }
    }

    fn append_button(&self, spec: &ButtonSpec) -> Result<Element, String> {
        let body = self.body()?;
        let button = self.document.create_element("button").map_err(js_err)?;
        button.set_id(&spec.id);
        button.set_class_name(&spec.class_name);
        button.set_attribute("title", &spec.title).map_err(js_err)?;
        button.set_text_content(Some(&spec.label));
        body.append_child(&button).map_err(js_err)?;
        Ok(button)
    }

    fn on_click(&self, element: &Element, mut handler: ClickHandler) -> Result<(), String> {
        let closure = Closure::wrap(Box::new(move |_event: web_sys::MouseEvent| {
            handler();
        }) as Box<dyn FnMut(_)>);

        element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        closure.forget(); // Keep the closure alive
        Ok(())
    }

    fn body_has_class(&self, class: &str) -> bool {
        self.document
            .body()
            .map(|body| body.class_list().contains(class))
            .unwrap_or(false)
    }

    fn set_body_class(&self, class: &str, present: bool) -> Result<(), String> {
        self.body()?
            .class_list()
            .toggle_with_force(class, present)
            .map(|_| ())
            .map_err(js_err)
    }
}
