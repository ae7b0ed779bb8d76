use web_sys::{Document, HtmlElement};

use crate::dom;

pub struct WelcomeModal(HtmlElement);

impl WelcomeModal {
    pub fn locate(document: &Document) -> Option<Self> {
        dom::html_by_id(document, "welcome-modal").map(Self)
    }

    pub fn show(&self) {
        dom::set_style(&self.0, "display", "flex");
    }

    pub fn hide(&self) {
        dom::set_style(&self.0, "display", "none");
    }
}
