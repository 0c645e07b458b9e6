//! Dashboard view state
//!
//! Owns one [`FetchOutcome`] per chart source plus the selected regression
//! model, and drives every fetch. Renderers only read the signals held here;
//! all mutation goes through this module.
//!
//! Two loading policies coexist:
//!
//! - The chart grid is an independent fan-out: one concurrent fetch per
//!   registry entry, each settling on its own. A slow or failing source never
//!   blocks or blanks its siblings.
//! - The ML view's plot and confusion matrix depend on the selected model.
//!   Selecting a model resets both to `Pending` (stale payloads are discarded,
//!   never shown against the new selection) and issues fresh fetches tagged
//!   with the selection active at issue time. A result whose tag no longer
//!   matches the current selection is dropped: the transport offers no real
//!   cancellation, so superseded requests are neutralized on arrival instead.

use leptos::*;
use std::rc::Rc;

use crate::api::{
    ApiClient, ApiError, ClassificationReport, ConfusionMatrix, GraphPayload, ModelComparison,
};
use crate::registry::{self, ChartDescriptor, ResponseKind, DEFAULT_MODEL};

/// Current fetch state of one data source
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchOutcome<T> {
    /// Request in flight or not yet started
    #[default]
    Pending,
    /// Decoded payload, ready to render
    Ready(T),
    /// The backend reported it cannot produce this data
    Domain(String),
    /// The request failed at the network or decoding level
    Transport(String),
}

impl<T> FetchOutcome<T> {
    /// Convert a fetch result into a terminal outcome. Domain errors keep the
    /// backend's own message; everything else is a transport failure.
    pub fn settle(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(payload) => Self::Ready(payload),
            Err(ApiError::Remote(message)) => Self::Domain(message),
            Err(err) => Self::Transport(err.to_string()),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(payload) => Some(payload),
            _ => None,
        }
    }
}

/// Decoded payload of one chart-grid source
#[derive(Debug, Clone, PartialEq)]
pub enum ChartPayload {
    /// Plotly figure with insight text
    Graph(GraphPayload),
    /// HTML document embedded by reference
    Document { url: String },
    /// Raster image embedded by reference
    Image { url: String },
}

/// One chart-grid source: its static descriptor and its live outcome
#[derive(Clone, Copy)]
pub struct ChartSlot {
    pub descriptor: &'static ChartDescriptor,
    pub outcome: RwSignal<FetchOutcome<ChartPayload>>,
}

impl ChartSlot {
    fn new(descriptor: &'static ChartDescriptor) -> Self {
        Self {
            descriptor,
            outcome: create_rw_signal(FetchOutcome::Pending),
        }
    }

    pub fn settle(&self, result: Result<ChartPayload, ApiError>) {
        self.outcome.try_set(FetchOutcome::settle(result));
    }
}

/// Global dashboard state, provided via context at the app root
#[derive(Clone)]
pub struct DashboardState {
    api: ApiClient,
    /// Chart-grid sources, in registry order
    pub charts: Rc<Vec<ChartSlot>>,
    /// Currently selected regression model
    pub selected_model: RwSignal<String>,
    /// Regression comparison table
    pub comparison: RwSignal<FetchOutcome<ModelComparison>>,
    /// Status-classifier metrics
    pub classification: RwSignal<FetchOutcome<ClassificationReport>>,
    /// Actual-vs-predicted plot for the selected model
    pub model_plot: RwSignal<FetchOutcome<GraphPayload>>,
    /// Confusion matrix for the selected model
    pub confusion: RwSignal<FetchOutcome<ConfusionMatrix>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::with_client(ApiClient::from_origin())
    }

    /// Build the state around an explicit client
    pub fn with_client(api: ApiClient) -> Self {
        let charts = registry::CHARTS.iter().map(ChartSlot::new).collect();
        Self {
            api,
            charts: Rc::new(charts),
            selected_model: create_rw_signal(DEFAULT_MODEL.to_owned()),
            comparison: create_rw_signal(FetchOutcome::Pending),
            classification: create_rw_signal(FetchOutcome::Pending),
            model_plot: create_rw_signal(FetchOutcome::Pending),
            confusion: create_rw_signal(FetchOutcome::Pending),
        }
    }

    /// Kick off the initial load: the chart-grid fan-out and the ML overview
    pub fn start(&self) {
        self.load_charts();
        self.load_model_overview();
    }

    /// Issue one concurrent fetch per chart-grid descriptor. Document and
    /// image sources are embedded by reference, so they resolve immediately;
    /// the browser element performs the actual request.
    pub fn load_charts(&self) {
        for slot in self.charts.iter().copied() {
            match slot.descriptor.kind {
                ResponseKind::Document => {
                    let url = self.api.resource_url(slot.descriptor.path);
                    slot.settle(Ok(ChartPayload::Document { url }));
                }
                ResponseKind::Image => {
                    let url = self.api.resource_url(slot.descriptor.path);
                    slot.settle(Ok(ChartPayload::Image { url }));
                }
                ResponseKind::Graph => {
                    let api = self.api.clone();
                    let path = slot.descriptor.path;
                    spawn_local(async move {
                        let result = api.chart_graph(path).await.map(ChartPayload::Graph);
                        slot.settle(result);
                    });
                }
            }
        }
    }

    /// Load the comparison table and classification metrics, then trigger the
    /// selection-dependent fetches for the effective default model.
    pub fn load_model_overview(&self) {
        {
            let api = self.api.clone();
            let classification = self.classification;
            spawn_local(async move {
                let result = api.classification_report().await;
                classification.try_set(FetchOutcome::settle(result));
            });
        }

        let state = self.clone();
        spawn_local(async move {
            let result = state.api.regression_comparison().await;
            let model = state.apply_comparison(result);
            state.begin_model_load(&model);
            state.spawn_model_fetches(model);
        });
    }

    /// Record the comparison outcome and return the model the dependent views
    /// should load. When the preferred default is absent from the table, the
    /// first available model becomes the selection; this correction happens
    /// once, here, and never again.
    pub fn apply_comparison(&self, result: Result<ModelComparison, ApiError>) -> String {
        let outcome = FetchOutcome::settle(result);
        if let FetchOutcome::Ready(table) = &outcome {
            let current = self.selected_model.get_untracked();
            if !table.contains(&current) {
                if let Some(first) = table.first_model() {
                    log::debug!("model {current:?} not in comparison table, using {first:?}");
                    self.selected_model.set(first.to_owned());
                }
            }
        }
        self.comparison.try_set(outcome);
        self.selected_model.get_untracked()
    }

    /// User intent: switch the selected regression model
    pub fn select_model(&self, model: impl Into<String>) {
        let model = model.into();
        if self.selected_model.get_untracked() == model {
            return;
        }
        self.begin_model_load(&model);
        self.spawn_model_fetches(model);
    }

    /// Synchronous half of a selection change: record the selection and reset
    /// the dependent outcomes so stale payloads vanish before new data lands.
    pub fn begin_model_load(&self, model: &str) {
        self.selected_model.set(model.to_owned());
        self.model_plot.set(FetchOutcome::Pending);
        self.confusion.set(FetchOutcome::Pending);
    }

    fn spawn_model_fetches(&self, model: String) {
        let state = self.clone();
        let tag = model.clone();
        spawn_local(async move {
            let result = state.api.regression_plot(&tag).await;
            state.apply_plot(&tag, result);
        });

        let state = self.clone();
        spawn_local(async move {
            let result = state.api.confusion_matrix(&model).await;
            state.apply_confusion(&model, result);
        });
    }

    /// Apply a plot result issued for `issued_for`, unless superseded
    pub fn apply_plot(&self, issued_for: &str, result: Result<GraphPayload, ApiError>) {
        if self.is_stale(issued_for) {
            return;
        }
        self.model_plot.try_set(FetchOutcome::settle(result));
    }

    /// Apply a confusion-matrix result issued for `issued_for`, unless superseded
    pub fn apply_confusion(&self, issued_for: &str, result: Result<ConfusionMatrix, ApiError>) {
        if self.is_stale(issued_for) {
            return;
        }
        self.confusion.try_set(FetchOutcome::settle(result));
    }

    fn is_stale(&self, issued_for: &str) -> bool {
        let current = self.selected_model.get_untracked();
        if current != issued_for {
            log::debug!("dropping result for {issued_for:?}, selection is now {current:?}");
            return true;
        }
        false
    }
}

// ============================================================================
// Formatting helpers
// ============================================================================

/// Format a metric score for table display, trimming trailing zeros
pub fn format_metric(value: f64) -> String {
    let mut text = format!("{value:.4}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

/// Opacity for one confusion-matrix cell, scaled against the largest cell.
/// Floors at 0.1 so every cell stays visible.
pub fn heat_alpha(value: f64, peak: f64) -> f64 {
    if peak <= 0.0 {
        return 0.1;
    }
    (value / peak).clamp(0.1, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RegressionScores;
    use serde_json::json;

    fn scores() -> RegressionScores {
        RegressionScores {
            r2: 0.9,
            mae: 10.0,
            mse: 200.0,
            rmse: 14.1,
        }
    }

    fn graph(label: &str) -> GraphPayload {
        GraphPayload {
            data: json!([{"name": label}]),
            layout: json!({}),
            inference: String::new(),
        }
    }

    fn test_state() -> DashboardState {
        DashboardState::with_client(ApiClient::new("http://backend.test"))
    }

    #[test]
    fn every_registry_entry_starts_pending() {
        let runtime = create_runtime();
        let state = test_state();
        assert_eq!(state.charts.len(), registry::CHARTS.len());
        assert!(state
            .charts
            .iter()
            .all(|slot| slot.outcome.get_untracked().is_pending()));
        assert_eq!(state.selected_model.get_untracked(), DEFAULT_MODEL);
        runtime.dispose();
    }

    #[test]
    fn chart_outcomes_settle_independently() {
        let runtime = create_runtime();
        let state = test_state();
        let (a, b, c) = (state.charts[0], state.charts[1], state.charts[2]);

        a.settle(Ok(ChartPayload::Graph(graph("sales"))));
        b.settle(Err(ApiError::Http(502)));
        // c never resolves

        assert!(matches!(
            a.outcome.get_untracked(),
            FetchOutcome::Ready(ChartPayload::Graph(_))
        ));
        assert!(matches!(
            b.outcome.get_untracked(),
            FetchOutcome::Transport(msg) if msg.contains("502")
        ));
        assert!(c.outcome.get_untracked().is_pending());
        // siblings beyond the failing one are untouched as well
        assert!(state.charts[3].outcome.get_untracked().is_pending());
        runtime.dispose();
    }

    #[test]
    fn settle_maps_remote_errors_to_domain() {
        let outcome =
            FetchOutcome::<ConfusionMatrix>::settle(Err(ApiError::Remote("untrained".into())));
        assert_eq!(outcome, FetchOutcome::Domain("untrained".into()));

        let outcome = FetchOutcome::<ConfusionMatrix>::settle(Err(ApiError::Decode("bad".into())));
        assert!(matches!(outcome, FetchOutcome::Transport(_)));
    }

    #[test]
    fn selection_change_discards_previous_payload() {
        let runtime = create_runtime();
        let state = test_state();

        state.begin_model_load("Linear Regression");
        state.apply_plot("Linear Regression", Ok(graph("linear")));
        assert!(state.model_plot.get_untracked().ready().is_some());

        state.begin_model_load("Random Forest");
        // stale payload must be gone before the new fetch resolves
        assert!(state.model_plot.get_untracked().is_pending());
        assert!(state.confusion.get_untracked().is_pending());
        runtime.dispose();
    }

    #[test]
    fn superseded_plot_result_is_dropped() {
        let runtime = create_runtime();
        let state = test_state();

        // S1 issued, then S2 before S1 resolves
        state.begin_model_load("Linear Regression");
        state.begin_model_load("Random Forest");

        // S2 resolves first and is applied
        state.apply_plot("Random Forest", Ok(graph("forest")));
        // S1's late result must not overwrite S2's
        state.apply_plot("Linear Regression", Ok(graph("linear")));

        let plot = state.model_plot.get_untracked();
        assert_eq!(plot.ready(), Some(&graph("forest")));
        runtime.dispose();
    }

    #[test]
    fn stale_confusion_error_is_also_dropped() {
        let runtime = create_runtime();
        let state = test_state();

        state.begin_model_load("Decision Tree");
        state.begin_model_load("Gradient Boosting");
        state.apply_confusion("Decision Tree", Err(ApiError::Remote("untrained".into())));

        // the new selection is still loading, not showing the old error
        assert!(state.confusion.get_untracked().is_pending());

        state.apply_confusion("Gradient Boosting", Err(ApiError::Remote("untrained".into())));
        assert_eq!(
            state.confusion.get_untracked(),
            FetchOutcome::Domain("untrained".into())
        );
        runtime.dispose();
    }

    #[test]
    fn absent_default_model_falls_back_to_first_key() {
        let runtime = create_runtime();
        let state = test_state();

        let table = ModelComparison {
            models: vec![("Ridge".to_owned(), scores()), ("Lasso".to_owned(), scores())],
        };
        let model = state.apply_comparison(Ok(table));

        assert_eq!(model, "Ridge");
        assert_eq!(state.selected_model.get_untracked(), "Ridge");
        assert!(state.comparison.get_untracked().ready().is_some());
        runtime.dispose();
    }

    #[test]
    fn present_default_model_is_kept() {
        let runtime = create_runtime();
        let state = test_state();

        let table = ModelComparison {
            models: vec![
                ("Random Forest".to_owned(), scores()),
                (DEFAULT_MODEL.to_owned(), scores()),
            ],
        };
        let model = state.apply_comparison(Ok(table));
        assert_eq!(model, DEFAULT_MODEL);
        runtime.dispose();
    }

    #[test]
    fn failed_comparison_keeps_selection_and_surfaces_error() {
        let runtime = create_runtime();
        let state = test_state();

        let model = state.apply_comparison(Err(ApiError::Http(500)));
        assert_eq!(model, DEFAULT_MODEL);
        assert!(matches!(
            state.comparison.get_untracked(),
            FetchOutcome::Transport(_)
        ));
        runtime.dispose();
    }

    #[test]
    fn metric_formatting_trims_noise() {
        assert_eq!(format_metric(0.9100), "0.91");
        assert_eq!(format_metric(25.0), "25");
        assert_eq!(format_metric(17.6543), "17.6543");
    }

    #[test]
    fn heat_alpha_is_clamped() {
        assert_eq!(heat_alpha(0.0, 500.0), 0.1);
        assert_eq!(heat_alpha(500.0, 500.0), 1.0);
        assert_eq!(heat_alpha(250.0, 500.0), 0.5);
        assert_eq!(heat_alpha(3.0, 0.0), 0.1);
    }
}
