//! Bindings to the page-global `mermaid` diagram library.
//!
//! Layout is entirely mermaid's concern; this module only hands it source
//! text and a theme, and converts the async result (or thrown error) into a
//! plain `Result` the components can consume.

use js_sys::{Object, Promise, Reflect};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mermaid)]
    fn initialize(config: &JsValue);

    #[wasm_bindgen(js_namespace = mermaid, catch)]
    fn render(element_id: &str, source: &str) -> Result<Promise, JsValue>;
}

/// Light/dark rendering theme for diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagramTheme {
    Light,
    Dark,
}

impl DiagramTheme {
    pub fn mermaid_name(&self) -> &'static str {
        match self {
            DiagramTheme::Light => "default",
            DiagramTheme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            DiagramTheme::Light => DiagramTheme::Dark,
            DiagramTheme::Dark => DiagramTheme::Light,
        }
    }
}

impl Default for DiagramTheme {
    fn default() -> Self {
        DiagramTheme::Light
    }
}

/// Reconfigure mermaid for the given theme. `startOnLoad` stays off; all
/// rendering goes through [`render_diagram`].
pub fn initialize_theme(theme: DiagramTheme) {
    let config = Object::new();
    let _ = Reflect::set(&config, &"startOnLoad".into(), &JsValue::FALSE);
    let _ = Reflect::set(&config, &"theme".into(), &theme.mermaid_name().into());
    initialize(&config.into());
}

/// Render `source` to an SVG string. `element_id` must be unique per call;
/// mermaid uses it for the generated SVG's DOM id.
///
/// Every failure path (synchronous throw, rejected promise, missing `svg`
/// field) resolves to an error string so callers can show the raw source
/// instead of propagating a JS exception.
pub async fn render_diagram(element_id: &str, source: &str) -> Result<String, String> {
    let promise = render(element_id, source).map_err(js_error_text)?;
    let value = JsFuture::from(promise).await.map_err(js_error_text)?;
    let svg = Reflect::get(&value, &"svg".into()).map_err(js_error_text)?;
    svg.as_string()
        .ok_or_else(|| "mermaid returned no svg output".to_string())
}

fn js_error_text(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    // Error objects carry the useful text in `message`.
    if let Ok(message) = Reflect::get(&err, &"message".into()) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_maps_to_mermaid_names() {
        assert_eq!(DiagramTheme::Light.mermaid_name(), "default");
        assert_eq!(DiagramTheme::Dark.mermaid_name(), "dark");
    }

    #[test]
    fn toggle_flips_between_themes() {
        assert_eq!(DiagramTheme::Light.toggled(), DiagramTheme::Dark);
        assert_eq!(DiagramTheme::Dark.toggled().toggled(), DiagramTheme::Dark);
    }
}
