use log::warn;
use tradehub::controllers::mobile_menu::{OPEN_MENU_STYLE, TOGGLE_CLASS, TOGGLE_GLYPH, TOGGLE_STYLE};
use tradehub::controllers::MenuView;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::dom::{self, JsResultExt};

pub struct DomMenu {
    document: Document,
}

impl DomMenu {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn nav_menu(&self) -> Option<HtmlElement> {
        dom::query(&self.document, ".nav-menu").and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn try_insert(&self) -> anyhow::Result<()> {
        let (Some(navbar), Some(_)) = (dom::query(&self.document, ".nav-container"), self.nav_menu())
        else {
            return Ok(());
        };
        let Some(anchor) = dom::query(&self.document, ".nav-user")
            .or_else(|| dom::query(&self.document, ".nav-auth"))
        else {
            return Ok(());
        };
        let button = dom::create(&self.document, "button", TOGGLE_CLASS)?;
        button.set_text_content(Some(TOGGLE_GLYPH));
        button.set_attribute("style", TOGGLE_STYLE).js_err()?;
        navbar.insert_before(&button, Some(&anchor)).js_err()?;
        Ok(())
    }
}

impl MenuView for DomMenu {
    fn has_toggle(&self) -> bool {
        dom::query(&self.document, &format!(".{TOGGLE_CLASS}")).is_some()
    }

    fn insert_toggle(&self) {
        if let Err(err) = self.try_insert() {
            warn!("Cannot add mobile menu button {err:?}");
        }
    }

    fn remove_toggle(&self) {
        if let Some(button) = dom::query(&self.document, &format!(".{TOGGLE_CLASS}")) {
            button.remove();
        }
    }

    fn is_open(&self) -> bool {
        self.nav_menu()
            .and_then(|menu| menu.style().get_property_value("display").ok())
            .is_some_and(|display| display == "flex")
    }

    fn set_open(&self, open: bool) {
        let Some(menu) = self.nav_menu() else {
            return;
        };
        if open {
            for (property, value) in OPEN_MENU_STYLE {
                dom::set_style(&menu, property, value);
            }
        } else {
            dom::set_style(&menu, "display", "none");
        }
    }
}
