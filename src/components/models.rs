//! ML model comparison view
//!
//! Regression model comparison table, the per-model actual-vs-predicted plot,
//! and the status classifier's metrics with its confusion matrix. The plot
//! and matrix follow the selected model; switching models shows a fresh
//! loading state immediately, never a stale chart for the old selection.

use leptos::*;

use super::charts::PlotlyChart;
use super::primitives::{
    Badge, BadgeVariant, EmptyState, ErrorState, InfoRow, LoadingSpinner, TableCard,
};
use crate::api::ConfusionMatrix;
use crate::registry::REGRESSION_MODELS;
use crate::state::{format_metric, heat_alpha, DashboardState, FetchOutcome};

/// ML models page
#[component]
pub fn MlModelsView() -> impl IntoView {
    view! {
        <div class="view active" role="main" aria-label="Machine learning models">
            <RegressionSection/>
            <ClassificationSection/>
        </div>
    }
}

/// Price-prediction comparison table plus the per-model plot
#[component]
fn RegressionSection() -> impl IntoView {
    view! {
        <TableCard title="Price Prediction Models (Regression)">
            <ComparisonTable/>
            <ModelSelector/>
            <ModelPlotPanel/>
        </TableCard>
    }
}

#[component]
fn ComparisonTable() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let comparison = state.comparison;

    view! {
        <div class="comparison-table" role="region" aria-label="Regression metrics">
            {move || match comparison.get() {
                FetchOutcome::Pending => {
                    view! { <LoadingSpinner message="Loading metrics..."/> }.into_view()
                }
                FetchOutcome::Domain(message) | FetchOutcome::Transport(message) => {
                    view! { <ErrorState message=message title="Metrics unavailable"/> }.into_view()
                }
                FetchOutcome::Ready(table) => view! {
                    <table role="table" aria-label="Model comparison">
                        <thead>
                            <tr>
                                <th scope="col">"Model"</th>
                                <th scope="col">"R2 Score"</th>
                                <th scope="col">"MAE"</th>
                                <th scope="col">"MSE"</th>
                                <th scope="col">"RMSE"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {table
                                .models
                                .into_iter()
                                .map(|(name, scores)| view! {
                                    <tr>
                                        <td class="model-name">{name}</td>
                                        <td class="mono">{format_metric(scores.r2)}</td>
                                        <td class="mono">{format_metric(scores.mae)}</td>
                                        <td class="mono">{format_metric(scores.mse)}</td>
                                        <td class="mono">{format_metric(scores.rmse)}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_view(),
            }}
        </div>
    }
}

/// Model pills; clicking one re-targets the dependent plot and matrix
#[component]
fn ModelSelector() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let selected = state.selected_model;

    view! {
        <div class="model-selector" role="tablist" aria-label="Regression model">
            {REGRESSION_MODELS
                .iter()
                .copied()
                .map(|model| {
                    let state = state.clone();
                    view! {
                        <button
                            class="pill-btn"
                            class:active=move || selected.get() == model
                            role="tab"
                            on:click=move |_| state.select_model(model)
                        >
                            {model}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ModelPlotPanel() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let plot = state.model_plot;

    view! {
        <div class="model-plot" role="region" aria-label="Actual vs predicted">
            {move || match plot.get() {
                FetchOutcome::Pending => {
                    view! { <LoadingSpinner message="Loading plot..."/> }.into_view()
                }
                FetchOutcome::Domain(message) | FetchOutcome::Transport(message) => {
                    view! { <ErrorState message=message title="Plot unavailable"/> }.into_view()
                }
                FetchOutcome::Ready(graph) => view! { <PlotlyChart graph=graph/> }.into_view(),
            }}
        </div>
    }
}

/// Status prediction card: accuracy metrics and the confusion matrix
#[component]
fn ClassificationSection() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let classification = state.classification;

    view! {
        <TableCard title="Status Prediction (Classification)">
            <div class="classification-grid">
                <div class="card-body">
                    {move || match classification.get() {
                        FetchOutcome::Pending => {
                            view! { <LoadingSpinner message="Loading..."/> }.into_view()
                        }
                        FetchOutcome::Domain(message) | FetchOutcome::Transport(message) => {
                            view! { <ErrorState message=message title="Metrics unavailable"/> }
                                .into_view()
                        }
                        FetchOutcome::Ready(report) => view! {
                            <InfoRow label="Model">
                                <Badge text="Random Forest Classifier" variant=BadgeVariant::Primary/>
                            </InfoRow>
                            <InfoRow label="Accuracy">
                                <span class="mono accuracy">{format_metric(report.accuracy)}</span>
                            </InfoRow>
                            <p class="note">
                                "A confusion matrix applies here because status prediction is a classification task."
                            </p>
                        }
                        .into_view(),
                    }}
                </div>
                <ConfusionMatrixPanel/>
            </div>
        </TableCard>
    }
}

#[component]
fn ConfusionMatrixPanel() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let confusion = state.confusion;

    view! {
        <div class="confusion-panel" role="region" aria-label="Confusion matrix">
            {move || match confusion.get() {
                FetchOutcome::Pending => {
                    view! { <LoadingSpinner message="Loading matrix..."/> }.into_view()
                }
                FetchOutcome::Domain(message) | FetchOutcome::Transport(message) => {
                    view! { <ErrorState message=message title="Matrix unavailable"/> }.into_view()
                }
                FetchOutcome::Ready(cm) => confusion_grid(cm),
            }}
        </div>
    }
}

/// Heat grid: label row and column headers around intensity-scaled cells
fn confusion_grid(cm: ConfusionMatrix) -> View {
    if cm.labels.is_empty() {
        return view! { <EmptyState title="No confusion matrix" description="The classifier has not produced one yet"/> }
            .into_view();
    }

    let peak = cm.peak();
    let columns = format!(
        "display: inline-grid; grid-template-columns: auto repeat({}, 1fr); gap: 5px;",
        cm.labels.len()
    );

    let header = std::iter::once(view! { <div></div> }.into_view())
        .chain(cm.labels.iter().map(|label| {
            view! { <div class="matrix-label">{label.clone()}</div> }.into_view()
        }))
        .collect_view();

    let rows = cm
        .matrix
        .iter()
        .zip(&cm.labels)
        .map(|(row, label)| {
            let cells = row
                .iter()
                .map(|&value| {
                    let style = format!(
                        "background: rgba(56, 189, 248, {:.2});",
                        heat_alpha(value, peak)
                    );
                    view! { <div class="matrix-cell mono" style=style>{value}</div> }.into_view()
                })
                .collect_view();
            view! {
                <div class="matrix-label matrix-row-label">{label.clone()}</div>
                {cells}
            }
            .into_view()
        })
        .collect_view();

    view! {
        <div class="confusion-matrix" style=columns aria-label="Confusion matrix grid">
            {header}
            {rows}
        </div>
    }
    .into_view()
}
