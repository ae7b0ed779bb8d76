use js_sys::Array;
use tradehub::controllers::effects::{
    reveal_delay, REVEAL_ANIMATION, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::{self, JsResultExt};

/// Fades cards in the first time they scroll into view.
pub fn observe(document: &Document) -> anyhow::Result<()> {
    let Some(root) = document.document_element() else {
        return Ok(());
    };
    let targets = dom::query_all(&root, REVEAL_SELECTOR);
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(html) = target.dyn_ref::<HtmlElement>() {
                    dom::set_style(html, "animation", REVEAL_ANIMATION);
                }
                observer.unobserve(&target);
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .js_err()?;
    callback.forget();

    for (index, target) in targets.iter().enumerate() {
        if let Some(html) = target.dyn_ref::<HtmlElement>() {
            dom::set_style(html, "opacity", "0");
            dom::set_style(html, "transform", "translateY(30px)");
            dom::set_style(html, "animation-delay", &reveal_delay(index));
        }
        observer.observe(target);
    }
    Ok(())
}
