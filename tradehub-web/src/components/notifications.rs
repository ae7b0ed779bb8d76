use log::warn;
use tradehub::controllers::notifications::{row_class, EMPTY_PLACEHOLDER, MARK_READ_LABEL, OPEN_LABEL};
use tradehub::controllers::{Badge, PanelBody, PanelView};
use tradehub::payloads::Notification;
use web_sys::{Document, Element, HtmlElement};

use crate::dom::{self, JsResultExt};

pub struct DomPanel {
    document: Document,
    dropdown: Option<HtmlElement>,
    list: Option<Element>,
    badge: Option<HtmlElement>,
}

impl DomPanel {
    /// Pages without the dropdown still get a working badge.
    pub fn locate(document: &Document) -> Self {
        Self {
            document: document.clone(),
            dropdown: dom::html_by_id(document, "notification-dropdown"),
            list: document.get_element_by_id("notification-list"),
            badge: dom::html_by_id(document, "notification-count"),
        }
    }

    fn set_visible(&self, visible: bool) {
        let Some(dropdown) = &self.dropdown else {
            return;
        };
        dom::set_style(dropdown, "display", if visible { "block" } else { "none" });
        if let Err(err) = dropdown.set_attribute("aria-hidden", if visible { "false" } else { "true" }) {
            warn!("Cannot set aria-hidden {err:?}");
        }
    }

    fn try_render(&self, list: &Element, body: &PanelBody) -> anyhow::Result<()> {
        list.set_inner_html("");
        match body {
            PanelBody::Empty => {
                let empty = dom::create(&self.document, "div", "notification-empty")?;
                empty.set_text_content(Some(EMPTY_PLACEHOLDER));
                list.append_child(&empty).js_err()?;
            }
            PanelBody::Rows(rows) => {
                let ul = dom::create(&self.document, "ul", "notification-items list-unstyled")?;
                for notification in rows {
                    let row = self.row(notification)?;
                    ul.append_child(&row).js_err()?;
                }
                list.append_child(&ul).js_err()?;
            }
        }
        Ok(())
    }

    fn row(&self, notification: &Notification) -> anyhow::Result<Element> {
        let li = dom::create(&self.document, "li", row_class(notification))?;
        li.set_attribute("data-id", &notification.id).js_err()?;
        if let Some(kind) = &notification.kind {
            li.set_attribute("data-type", kind).js_err()?;
        }

        let inner = dom::create(&self.document, "div", "notification-inner")?;
        for (tag, class, text) in [
            ("div", "notification-title", &notification.title),
            ("small", "notification-time", &notification.created_at),
            ("div", "notification-message", &notification.message),
        ] {
            let part = dom::create(&self.document, tag, class)?;
            part.set_text_content(Some(text.as_str()));
            inner.append_child(&part).js_err()?;
        }

        let actions = dom::create(&self.document, "div", "notification-actions")?;
        if let Some(link) = notification.link() {
            let open = dom::create(&self.document, "a", "btn btn-sm btn-link")?;
            open.set_attribute("href", link).js_err()?;
            open.set_text_content(Some(OPEN_LABEL));
            actions.append_child(&open).js_err()?;
        }
        if !notification.is_read {
            let mark = dom::create(&self.document, "button", "btn btn-sm btn-primary mark-read-btn")?;
            mark.set_attribute("data-id", &notification.id).js_err()?;
            mark.set_text_content(Some(MARK_READ_LABEL));
            actions.append_child(&mark).js_err()?;
        }

        li.append_child(&inner).js_err()?;
        li.append_child(&actions).js_err()?;
        Ok(li)
    }
}

impl PanelView for DomPanel {
    fn show(&self) {
        self.set_visible(true);
    }

    fn hide(&self) {
        self.set_visible(false);
    }

    fn render(&self, body: &PanelBody) {
        let Some(list) = &self.list else {
            return;
        };
        if let Err(err) = self.try_render(list, body) {
            warn!("Cannot render notifications {err:?}");
        }
    }

    fn mark_row_read(&self, id: &str) {
        let Some(list) = &self.list else {
            return;
        };
        let selector = format!(".notification-item[data-id=\"{}\"]", id.replace('"', "\\\""));
        let Ok(Some(row)) = list.query_selector(&selector) else {
            return;
        };
        if let Err(err) = row.class_list().remove_1("unread") {
            warn!("Cannot update notification row {err:?}");
        }
        if let Ok(Some(button)) = row.query_selector(".mark-read-btn") {
            button.remove();
        }
    }

    fn set_badge(&self, badge: Badge) {
        let Some(element) = &self.badge else {
            return;
        };
        match badge.text() {
            Some(count) => {
                element.set_text_content(Some(count.as_str()));
                dom::set_style(element, "display", "inline-block");
            }
            None => dom::set_style(element, "display", "none"),
        }
    }
}
