use log::{debug, warn};
use tradehub::utils::theme_class;
use web_sys::{Document, Window};

pub const THEME_KEY: &str = "theme";

/// Storage may be disabled (private mode, sandboxed frames); that reads as unset.
pub fn apply(window: &Window, document: &Document, default: &str) {
    let stored = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(THEME_KEY).ok().flatten());
    let class = theme_class(stored.as_deref(), default);
    debug!("Applying {class}");
    if let Some(body) = document.body() {
        if let Err(err) = body.class_list().add_1(&class) {
            warn!("Cannot apply theme {err:?}");
        }
    }
}
