use log::warn;
use tradehub::controllers::forms::ERROR_CLASS;
use tradehub::controllers::FormField;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::dom;

pub struct DomField(Element);

impl FormField for DomField {
    fn value(&self) -> String {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            self.0.text_content().unwrap_or_default()
        }
    }

    fn set_invalid(&self, invalid: bool) {
        if let Err(err) = self.0.class_list().toggle_with_force(ERROR_CLASS, invalid) {
            warn!("Cannot mark field {err:?}");
        }
    }
}

pub fn required_fields(form: &Element) -> Vec<DomField> {
    dom::query_all(form, "[required]")
        .into_iter()
        .map(DomField)
        .collect()
}
