use log::{info, warn};
use web_sys::{Document, Element};

use crate::dom;

/// Marks `button` as the single active filter. Filtering itself happens server-side.
pub fn select(document: &Document, button: &Element) {
    if let Some(root) = document.document_element() {
        for other in dom::query_all(&root, ".filter-btn") {
            if let Err(err) = other.class_list().remove_1("active") {
                warn!("Cannot clear active filter {err:?}");
            }
        }
    }
    if let Err(err) = button.class_list().add_1("active") {
        warn!("Cannot activate filter {err:?}");
    }
    info!(
        "Filter: {}",
        button.get_attribute("data-filter").unwrap_or_default()
    );
}
