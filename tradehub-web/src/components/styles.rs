use tradehub::controllers::effects::{STYLES, STYLE_ELEMENT_ID};
use web_sys::Document;

use crate::dom::{self, JsResultExt};

/// Inserts the keyframes and helper classes once per page.
pub fn inject(document: &Document) -> anyhow::Result<()> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = dom::create(document, "style", "")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(STYLES));
    head.append_child(&style).js_err()?;
    Ok(())
}
