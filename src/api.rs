//! REST API client for the pharmacy analytics backend
//!
//! Provides typed HTTP requests using gloo-net. Every method performs exactly
//! one round trip: no retries, no caching. A JSON body carrying a top-level
//! `error` field is a domain error from the backend (for example "model not
//! trained yet") and is reported as [`ApiError::Remote`] regardless of the
//! HTTP status code.

use crate::config::DashboardConfig;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// API client for the analytics backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Create an API client from dashboard configuration
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.api_url())
    }

    /// Create an API client from the injected configuration, falling back to
    /// the current origin
    pub fn from_origin() -> Self {
        let config = DashboardConfig::load();
        Self::from_config(&config)
    }

    /// Absolute URL for a resource embedded by reference (iframe / img)
    pub fn resource_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch a chart graph: `{ graph: { data, layout }, inference }` with a
    /// legacy fallback where `data`/`layout` sit at the top level
    pub async fn chart_graph(&self, path: &str) -> Result<GraphPayload, ApiError> {
        decode_graph(self.get_json(path).await?)
    }

    /// Fetch the regression model comparison table
    pub async fn regression_comparison(&self) -> Result<ModelComparison, ApiError> {
        decode_comparison(self.get_json("/api/ml/regression/compare").await?)
    }

    /// Fetch classification metrics for the status classifier
    pub async fn classification_report(&self) -> Result<ClassificationReport, ApiError> {
        decode_classification(self.get_json("/api/ml/classification/metrics").await?)
    }

    /// Fetch the actual-vs-predicted plot for one regression model
    pub async fn regression_plot(&self, model: &str) -> Result<GraphPayload, ApiError> {
        let path = crate::registry::regression_plot_path(&encode_segment(model));
        decode_graph(self.get_json(&path).await?)
    }

    /// Fetch the confusion matrix for one model
    pub async fn confusion_matrix(&self, model: &str) -> Result<ConfusionMatrix, ApiError> {
        let path = crate::registry::confusion_matrix_path(&encode_segment(model));
        decode_confusion(self.get_json(&path).await?)
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = Request::get(&url).send().await?;
        let ok = resp.ok();
        let status = resp.status();

        match resp.json::<Value>().await {
            Ok(body) => screen_body(ok, status, body),
            // A failed status often comes with a non-JSON body; report the
            // status rather than the decode failure.
            Err(_) if !ok => Err(ApiError::Http(status)),
            Err(err) => Err(ApiError::Network(err)),
        }
    }
}

/// Percent-encode a single path segment (model names contain spaces)
fn encode_segment(segment: &str) -> String {
    js_sys::encode_uri_component(segment).into()
}

/// Apply the domain-error and status rules to a decoded JSON body.
///
/// The `error` field wins over the HTTP status: a backend that reports
/// "model not trained yet" with a 500 is still a domain error, not a
/// transport failure.
fn screen_body(ok: bool, status: u16, body: Value) -> Result<Value, ApiError> {
    // Any non-null `error` value is a domain error, string or not; non-string
    // values fall back to their JSON rendering.
    match body.get("error") {
        None | Some(Value::Null) => {}
        Some(Value::String(message)) => return Err(ApiError::Remote(message.clone())),
        Some(other) => return Err(ApiError::Remote(other.to_string())),
    }
    if !ok {
        return Err(ApiError::Http(status));
    }
    Ok(body)
}

// ============================================================================
// Response Types
// ============================================================================

/// A Plotly figure plus the human-readable insight attached by the backend
#[derive(Debug, Clone, PartialEq)]
pub struct GraphPayload {
    /// Plotly trace array, passed through opaquely
    pub data: Value,
    /// Plotly layout object, passed through opaquely
    pub layout: Value,
    /// Insight text; empty when the backend attaches none
    pub inference: String,
}

/// Evaluation scores for one regression model
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegressionScores {
    #[serde(rename = "R2 Score")]
    pub r2: f64,
    #[serde(rename = "MAE")]
    pub mae: f64,
    #[serde(rename = "MSE")]
    pub mse: f64,
    #[serde(rename = "RMSE")]
    pub rmse: f64,
}

/// Regression comparison table, preserving the backend's key order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelComparison {
    pub models: Vec<(String, RegressionScores)>,
}

impl ModelComparison {
    pub fn contains(&self, model: &str) -> bool {
        self.models.iter().any(|(name, _)| name == model)
    }

    pub fn first_model(&self) -> Option<&str> {
        self.models.first().map(|(name, _)| name.as_str())
    }
}

/// Classification metrics response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassificationReport {
    #[serde(rename = "Accuracy")]
    pub accuracy: f64,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Labeled confusion matrix
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConfusionMatrix {
    pub matrix: Vec<Vec<f64>>,
    pub labels: Vec<String>,
}

impl ConfusionMatrix {
    /// Largest cell value, used to scale the heat grid
    pub fn peak(&self) -> f64 {
        self.matrix
            .iter()
            .flatten()
            .copied()
            .fold(0.0_f64, f64::max)
    }
}

// ============================================================================
// Decoding
// ============================================================================

pub fn decode_graph(body: Value) -> Result<GraphPayload, ApiError> {
    let inference = body
        .get("inference")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();
    // Legacy responses put `data`/`layout` at the top level.
    let graph = match body.get("graph") {
        Some(graph) => graph.clone(),
        None => body,
    };
    let data = graph
        .get("data")
        .cloned()
        .ok_or_else(|| ApiError::Decode("graph body missing `data`".into()))?;
    let layout = graph
        .get("layout")
        .cloned()
        .unwrap_or_else(|| Value::Object(Default::default()));

    Ok(GraphPayload {
        data,
        layout,
        inference,
    })
}

pub fn decode_comparison(body: Value) -> Result<ModelComparison, ApiError> {
    let Value::Object(entries) = body else {
        return Err(ApiError::Decode("comparison body is not an object".into()));
    };
    let mut models = Vec::with_capacity(entries.len());
    for (name, scores) in entries {
        let scores = serde_json::from_value(scores)
            .map_err(|err| ApiError::Decode(format!("scores for {name}: {err}")))?;
        models.push((name, scores));
    }
    Ok(ModelComparison { models })
}

pub fn decode_classification(body: Value) -> Result<ClassificationReport, ApiError> {
    serde_json::from_value(body).map_err(|err| ApiError::Decode(err.to_string()))
}

pub fn decode_confusion(body: Value) -> Result<ConfusionMatrix, ApiError> {
    let cm: ConfusionMatrix =
        serde_json::from_value(body).map_err(|err| ApiError::Decode(err.to_string()))?;
    if cm.labels.len() != cm.matrix.len()
        || cm.matrix.iter().any(|row| row.len() != cm.labels.len())
    {
        return Err(ApiError::Decode(
            "confusion matrix is not square against its labels".into(),
        ));
    }
    Ok(cm)
}

// ============================================================================
// Error Types
// ============================================================================

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Backend reported it cannot serve this request (domain error)
    #[error("{0}")]
    Remote(String),

    #[error("HTTP error: {0}")]
    Http(u16),

    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("Unexpected response shape: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_field_wins_regardless_of_status() {
        for (ok, status) in [(true, 200), (false, 500)] {
            let err = screen_body(ok, status, json!({"error": "model not trained yet"}))
                .expect_err("error body must not pass");
            assert!(matches!(err, ApiError::Remote(msg) if msg == "model not trained yet"));
        }
    }

    #[test]
    fn non_string_error_field_is_still_a_domain_error() {
        let err = screen_body(true, 200, json!({"error": {"code": 7}})).unwrap_err();
        assert!(matches!(err, ApiError::Remote(msg) if msg.contains("\"code\":7")));

        let err = screen_body(false, 500, json!({"error": 503})).unwrap_err();
        assert!(matches!(err, ApiError::Remote(msg) if msg == "503"));

        // a null error field carries no message and is not a domain error
        let err = screen_body(false, 500, json!({"error": null})).unwrap_err();
        assert!(matches!(err, ApiError::Http(500)));
    }

    #[test]
    fn non_2xx_without_error_body_is_http_error() {
        let err = screen_body(false, 503, json!({"detail": "overloaded"})).unwrap_err();
        assert!(matches!(err, ApiError::Http(503)));
    }

    #[test]
    fn graph_decodes_nested_shape_with_inference() {
        let payload = decode_graph(json!({
            "graph": {"data": [{"type": "bar"}], "layout": {"title": "Sales"}},
            "inference": "Sales peak in December."
        }))
        .unwrap();
        assert_eq!(payload.data, json!([{"type": "bar"}]));
        assert_eq!(payload.layout, json!({"title": "Sales"}));
        assert_eq!(payload.inference, "Sales peak in December.");
    }

    #[test]
    fn graph_inference_defaults_to_empty() {
        let payload = decode_graph(json!({
            "graph": {"data": [], "layout": {}}
        }))
        .unwrap();
        assert_eq!(payload.inference, "");
    }

    #[test]
    fn graph_accepts_legacy_top_level_shape() {
        let payload = decode_graph(json!({"data": [1, 2], "layout": {"height": 400}})).unwrap();
        assert_eq!(payload.data, json!([1, 2]));
        assert_eq!(payload.layout, json!({"height": 400}));
        assert_eq!(payload.inference, "");
    }

    #[test]
    fn graph_without_data_is_a_decode_error() {
        let err = decode_graph(json!({"graph": {"layout": {}}})).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn comparison_preserves_backend_order() {
        let table = decode_comparison(json!({
            "Random Forest": {"R2 Score": 0.91, "MAE": 12.1, "MSE": 310.0, "RMSE": 17.6},
            "Linear Regression": {"R2 Score": 0.72, "MAE": 25.3, "MSE": 900.0, "RMSE": 30.0}
        }))
        .unwrap();
        let names: Vec<_> = table.models.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["Random Forest", "Linear Regression"]);
        assert_eq!(table.first_model(), Some("Random Forest"));
        assert!(table.contains("Linear Regression"));
        assert!(!table.contains("Gradient Boosting"));
        assert_eq!(table.models[0].1.r2, 0.91);
    }

    #[test]
    fn classification_keeps_extra_metrics() {
        let report = decode_classification(json!({"Accuracy": 0.87, "F1": 0.81})).unwrap();
        assert_eq!(report.accuracy, 0.87);
        assert_eq!(report.extra.get("F1"), Some(&json!(0.81)));
    }

    #[test]
    fn confusion_matrix_must_match_its_labels() {
        let cm = decode_confusion(json!({
            "matrix": [[350.0, 12.0], [40.0, 280.0]],
            "labels": ["Completed", "Cancelled"]
        }))
        .unwrap();
        assert_eq!(cm.peak(), 350.0);

        let err = decode_confusion(json!({
            "matrix": [[1.0, 2.0]],
            "labels": ["A", "B"]
        }))
        .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
