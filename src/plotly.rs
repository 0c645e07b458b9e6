//! Minimal binding to the Plotly global
//!
//! The chart library ships as a plain script in the HTML shell; decoded graph
//! specs are handed to `Plotly.newPlot` as-is, after the dark-theme layout
//! overrides are merged in.

use serde::Serialize;
use serde_json::{json, Map, Value};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(
        el: &web_sys::Element,
        data: &JsValue,
        layout: &JsValue,
        config: &JsValue,
    ) -> Result<(), JsValue>;
}

/// Draw a figure into `el`, replacing whatever was rendered there before
pub fn render(el: &web_sys::Element, data: &Value, layout: &Value) {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let config = json!({ "responsive": true, "displayModeBar": false });

    let (data, layout, config) = match (
        data.serialize(&serializer),
        themed_layout(layout).serialize(&serializer),
        config.serialize(&serializer),
    ) {
        (Ok(d), Ok(l), Ok(c)) => (d, l, c),
        _ => {
            log::warn!("could not convert graph spec for rendering");
            return;
        }
    };

    if let Err(err) = new_plot(el, &data, &layout, &config) {
        log::warn!("Plotly.newPlot failed: {err:?}");
    }
}

/// Merge the dashboard's dark theme into a backend-provided layout. Existing
/// axis settings are kept; only the grid color is forced.
pub fn themed_layout(layout: &Value) -> Value {
    let mut themed = match layout {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };

    themed.insert("paper_bgcolor".into(), json!("rgba(0,0,0,0)"));
    themed.insert("plot_bgcolor".into(), json!("rgba(0,0,0,0)"));
    themed.insert("font".into(), json!({ "color": "#e2e8f0" }));
    themed.insert("margin".into(), json!({ "t": 40, "r": 20, "b": 40, "l": 40 }));
    themed.insert("autosize".into(), json!(true));

    for axis in ["xaxis", "yaxis"] {
        let mut settings = match themed.get(axis) {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        };
        settings.insert("gridcolor".into(), json!("#334155"));
        themed.insert(axis.into(), Value::Object(settings));
    }

    Value::Object(themed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_preserves_backend_layout_fields() {
        let themed = themed_layout(&json!({
            "title": "Stock",
            "xaxis": { "title": "Shop", "type": "category" }
        }));

        assert_eq!(themed["title"], json!("Stock"));
        assert_eq!(themed["xaxis"]["title"], json!("Shop"));
        assert_eq!(themed["xaxis"]["gridcolor"], json!("#334155"));
        assert_eq!(themed["yaxis"]["gridcolor"], json!("#334155"));
        assert_eq!(themed["paper_bgcolor"], json!("rgba(0,0,0,0)"));
        assert_eq!(themed["autosize"], json!(true));
    }

    #[test]
    fn theme_tolerates_non_object_layout() {
        let themed = themed_layout(&Value::Null);
        assert_eq!(themed["plot_bgcolor"], json!("rgba(0,0,0,0)"));
    }
}
