use log::warn;
use tradehub::controllers::toast::{CONTAINER_CLASS, CONTAINER_STYLE, EXIT_ANIMATION, EXIT_ANIMATION_MS};
use tradehub::controllers::{Shell, ToastKind};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom::{self, JsResultExt};

/// Toasts and confirmation dialogs for the live page.
pub struct PageShell {
    window: Window,
    document: Document,
    lifetime_ms: u32,
}

impl PageShell {
    pub fn new(window: Window, document: Document, lifetime_ms: u32) -> Self {
        Self {
            window,
            document,
            lifetime_ms,
        }
    }

    fn container(&self) -> anyhow::Result<Element> {
        if let Some(container) = dom::query(&self.document, &format!(".{CONTAINER_CLASS}")) {
            return Ok(container);
        }
        let container = dom::create(&self.document, "div", CONTAINER_CLASS)?;
        container
            .set_attribute("style", CONTAINER_STYLE)
            .js_err()?;
        let body = self
            .document
            .body()
            .ok_or(anyhow::anyhow!("Document has no body"))?;
        body.append_child(&container).js_err()?;
        Ok(container)
    }

    fn try_toast(&self, message: &str, kind: ToastKind) -> anyhow::Result<()> {
        let alert = dom::create(&self.document, "div", kind.class())?;
        let text = dom::create(&self.document, "span", "")?;
        text.set_text_content(Some(message));
        let close = dom::create(&self.document, "button", "alert-close")?;
        close.set_text_content(Some("\u{00d7}"));
        alert.append_child(&text).js_err()?;
        alert.append_child(&close).js_err()?;

        let target = alert.clone();
        dom::listen_once(&close, "click", move |_| target.remove())?;

        self.container()?.append_child(&alert).js_err()?;
        dismiss_later(&self.window, alert, self.lifetime_ms)
    }
}

impl Shell for PageShell {
    fn toast(&self, message: &str, kind: ToastKind) {
        if let Err(err) = self.try_toast(message, kind) {
            warn!("Cannot show {kind} toast {err:?}");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }
}

/// Plays the exit animation after `lifetime_ms`, then detaches the banner.
/// Banners dismissed by hand in the meantime are left alone.
pub fn dismiss_later(window: &Window, alert: Element, lifetime_ms: u32) -> anyhow::Result<()> {
    let window_for_exit = window.clone();
    dom::set_timeout(window, lifetime_ms, move || {
        if alert.parent_element().is_none() {
            return;
        }
        if let Some(html) = alert.dyn_ref::<HtmlElement>() {
            dom::set_style(html, "animation", EXIT_ANIMATION);
        }
        if let Err(err) = dom::set_timeout(&window_for_exit, EXIT_ANIMATION_MS, move || {
            if alert.parent_element().is_some() {
                alert.remove();
            }
        }) {
            warn!("Cannot schedule alert removal {err:?}");
        }
    })
}

/// Server-rendered `.alert` banners get the same lifetime as toasts.
pub fn dismiss_server_alerts(window: &Window, document: &Document, lifetime_ms: u32) {
    let Some(root) = document.document_element() else {
        return;
    };
    for alert in dom::query_all(&root, ".alert") {
        if let Err(err) = dismiss_later(window, alert, lifetime_ms) {
            warn!("Cannot schedule alert dismissal {err:?}");
        }
    }
}
