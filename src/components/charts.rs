//! Chart grid view
//!
//! Renders one panel per registry descriptor. Panels are fully independent:
//! each one tracks only its own outcome signal, so a failing or slow source
//! leaves every sibling untouched.

use leptos::*;

use super::primitives::{ErrorState, LoadingSpinner};
use crate::api::GraphPayload;
use crate::plotly;
use crate::state::{ChartPayload, ChartSlot, DashboardState, FetchOutcome};

/// Main chart grid, in registry order
#[component]
pub fn ChartGridView() -> impl IntoView {
    let state = expect_context::<DashboardState>();

    view! {
        <div class="view active" role="main" aria-label="Analytics charts">
            <div class="chart-grid">
                {state
                    .charts
                    .iter()
                    .copied()
                    .map(|slot| view! { <ChartPanel chart_slot=slot/> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// One chart panel: title bar plus whatever its outcome currently is
#[component]
fn ChartPanel(chart_slot: ChartSlot) -> impl IntoView {
    let slot = chart_slot;
    let title = slot.descriptor.title;

    view! {
        <div class="table-card chart-card" role="region" aria-label=title>
            <div class="table-header">
                <div class="table-title">{title}</div>
            </div>
            {move || match slot.outcome.get() {
                FetchOutcome::Pending => {
                    view! { <LoadingSpinner message="Loading chart..."/> }.into_view()
                }
                FetchOutcome::Domain(message) | FetchOutcome::Transport(message) => {
                    view! { <ErrorState message=message title="Chart unavailable"/> }.into_view()
                }
                FetchOutcome::Ready(payload) => chart_body(title, payload),
            }}
        </div>
    }
}

fn chart_body(title: &'static str, payload: ChartPayload) -> View {
    match payload {
        ChartPayload::Graph(graph) => view! { <PlotlyChart graph=graph/> }.into_view(),
        ChartPayload::Document { url } => view! {
            <iframe class="chart-frame" src=url title=title></iframe>
        }
        .into_view(),
        ChartPayload::Image { url } => view! {
            <img class="chart-image" src=url alt=title/>
        }
        .into_view(),
    }
}

/// Plotly figure host. The actual drawing happens once the div is mounted;
/// the insight text, when present, sits underneath.
#[component]
pub fn PlotlyChart(graph: GraphPayload) -> impl IntoView {
    let host = create_node_ref::<html::Div>();
    let insight = (!graph.inference.is_empty()).then(|| graph.inference.clone());

    create_effect(move |_| {
        if let Some(el) = host.get() {
            plotly::render(&el, &graph.data, &graph.layout);
        }
    });

    view! {
        <div class="graph-container">
            <div class="plotly-host" node_ref=host></div>
            {insight.map(|text| view! {
                <div class="inference-box">
                    <strong>"Insight: "</strong>
                    {text}
                </div>
            })}
        </div>
    }
}
