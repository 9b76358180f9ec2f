use thiserror::Error;
use wasm_bindgen::JsValue;

use site_core::ConfigError;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("expected a {0} element")]
    WrongElement(&'static str),
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        Self::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}
