use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub fn smooth_scroll(document: &Document, anchor: &Element) {
    let Some(href) = anchor.get_attribute("href") else {
        return;
    };
    // A bare "#" is not a valid selector; query_selector errors and we ignore it.
    let Ok(Some(target)) = document.query_selector(&href) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
