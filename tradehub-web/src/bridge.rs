use js_sys::Reflect;
use log::warn;
use tradehub::controllers::toast::{COPIED, COPY_FAILED};
use tradehub::controllers::{Shell, ToastKind};
use tradehub::Config;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn write_text(text: &str) -> Result<JsValue, JsValue>;
}

pub async fn copy_to_clipboard(shell: &impl Shell, text: &str) {
    match write_text(text).await {
        Ok(_) => shell.toast(COPIED, ToastKind::Success),
        Err(err) => {
            warn!("Clipboard write failed {err:?}");
            shell.toast(COPY_FAILED, ToastKind::Error)
        }
    }
}

/// String-valued global set by the server-rendered template, if any.
pub fn page_global(name: &str) -> Option<String> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str(name))
        .ok()?
        .as_string()
}

/// `window.TRADEHUB_CONFIG` overlaid with the legacy per-endpoint globals.
pub fn load_config() -> Config {
    let injected = web_sys::window()
        .and_then(|window| Reflect::get(&window, &JsValue::from_str("TRADEHUB_CONFIG")).ok())
        .filter(|value| !value.is_undefined() && !value.is_null());
    let config = match injected {
        Some(value) => serde_wasm_bindgen::from_value::<Config>(value).unwrap_or_else(|err| {
            warn!("Ignoring malformed TRADEHUB_CONFIG {err:?}");
            Config::default()
        }),
        None => Config::default(),
    };
    config.with_legacy_globals(page_global)
}
