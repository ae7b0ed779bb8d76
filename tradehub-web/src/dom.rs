use tradehub::utils::resolve_csrf_token;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlDocument, HtmlElement,
    HtmlInputElement, Window,
};

pub trait JsResultExt<T> {
    fn js_err(self) -> anyhow::Result<T>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn js_err(self) -> anyhow::Result<T> {
        self.map_err(|e| anyhow::anyhow!("{e:?}"))
    }
}

/// Listener that lives as long as the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> anyhow::Result<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .js_err()?;
    closure.forget();
    Ok(())
}

pub fn listen_once(
    target: &EventTarget,
    event: &str,
    handler: impl FnOnce(Event) + 'static,
) -> anyhow::Result<()> {
    let callback = Closure::once_into_js(handler);
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.unchecked_ref(),
            &options,
        )
        .js_err()
}

pub fn set_timeout(
    window: &Window,
    delay_ms: u32,
    callback: impl FnOnce() + 'static,
) -> anyhow::Result<()> {
    let callback = Closure::once_into_js(callback);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms as i32,
        )
        .js_err()?;
    Ok(())
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return vec![];
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn create(document: &Document, tag: &str, class: &str) -> anyhow::Result<Element> {
    let element = document.create_element(tag).js_err()?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::warn!("Cannot set {property} {err:?}");
    }
}

pub fn csrf_token(document: &Document, injected: Option<&str>) -> Option<String> {
    let field = query(document, "[name=csrfmiddlewaretoken]")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value());
    let cookies = document
        .dyn_ref::<HtmlDocument>()
        .and_then(|doc| doc.cookie().ok())
        .unwrap_or_default();
    resolve_csrf_token(injected, field.as_deref(), &cookies)
}
