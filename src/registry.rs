//! Chart endpoint registry
//!
//! Static descriptions of every data source the dashboard renders. The
//! registry is fixed at compile time; its order determines display order in
//! the chart grid but carries no correctness meaning.

/// How a chart endpoint responds, and therefore how it is embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// JSON body `{ graph: { data, layout }, inference }`, rendered via Plotly.
    Graph,
    /// Standalone HTML document, embedded by reference in an iframe.
    Document,
    /// PNG image, embedded by reference in an `<img>` tag.
    Image,
}

/// One remote chart source: a stable id, a display title, the backend path
/// and the response kind that decides decoding and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub path: &'static str,
    pub kind: ResponseKind,
}

/// All independent chart sources, in display order.
pub const CHARTS: &[ChartDescriptor] = &[
    ChartDescriptor {
        id: "sales_over_time",
        title: "Total Sales Over Time",
        path: "/sales_over_time",
        kind: ResponseKind::Graph,
    },
    ChartDescriptor {
        id: "payment_mode_status",
        title: "Payment Modes vs Status",
        path: "/payment_mode_status",
        kind: ResponseKind::Image,
    },
    ChartDescriptor {
        id: "customer_age_dist",
        title: "Customer Age Distribution",
        path: "/customer_age_dist",
        kind: ResponseKind::Image,
    },
    ChartDescriptor {
        id: "purchase_cost_dist",
        title: "Purchase Cost Distribution",
        path: "/purchase_cost_dist",
        kind: ResponseKind::Image,
    },
    ChartDescriptor {
        id: "supplier_qty",
        title: "Quantity Purchased per Supplier",
        path: "/supplier_qty",
        kind: ResponseKind::Graph,
    },
    ChartDescriptor {
        id: "stock_box",
        title: "Available Stock Units per Shop",
        path: "/stock_box",
        kind: ResponseKind::Graph,
    },
    ChartDescriptor {
        id: "sales_corr_heatmap",
        title: "Sales Correlation Heatmap",
        path: "/sales_corr_heatmap",
        kind: ResponseKind::Image,
    },
    ChartDescriptor {
        id: "top_doctors",
        title: "Top 10 Doctors by Prescriptions",
        path: "/top_doctors",
        kind: ResponseKind::Graph,
    },
    ChartDescriptor {
        id: "prescription_trend",
        title: "Prescriptions Over Years",
        path: "/prescription_trend",
        kind: ResponseKind::Image,
    },
    ChartDescriptor {
        id: "discount_vs_price",
        title: "Discount vs Final Price",
        path: "/discount_vs_price",
        kind: ResponseKind::Graph,
    },
    ChartDescriptor {
        id: "top_meds",
        title: "Top 10 Medicines by Revenue",
        path: "/top_meds",
        kind: ResponseKind::Graph,
    },
    ChartDescriptor {
        id: "shop_ratings_box",
        title: "Shop Ratings by Location",
        path: "/shop_ratings_box",
        kind: ResponseKind::Graph,
    },
    ChartDescriptor {
        id: "shop_ratings_hist",
        title: "Shop Ratings Distribution",
        path: "/shop_ratings_hist",
        kind: ResponseKind::Image,
    },
    ChartDescriptor {
        id: "heads",
        title: "Dataset Previews",
        path: "/heads",
        kind: ResponseKind::Document,
    },
];

/// Regression models the backend trains, in selector display order.
pub const REGRESSION_MODELS: &[&str] = &[
    "Linear Regression",
    "Decision Tree",
    "Random Forest",
    "Gradient Boosting",
];

/// Model selected before the comparison table has loaded.
pub const DEFAULT_MODEL: &str = "Linear Regression";

/// Path of the actual-vs-predicted plot for one regression model.
///
/// The model name is URL-encoded at the request site, not here.
pub fn regression_plot_path(model: &str) -> String {
    format!("/api/ml/regression/plot/{model}")
}

/// Path of the confusion matrix for one model.
pub fn confusion_matrix_path(model: &str) -> String {
    format!("/api/ml/confusion_matrix/{model}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_is_non_empty_with_unique_ids() {
        assert!(!CHARTS.is_empty());
        let ids: HashSet<_> = CHARTS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CHARTS.len());
    }

    #[test]
    fn default_model_is_offered_in_selector() {
        assert!(REGRESSION_MODELS.contains(&DEFAULT_MODEL));
    }

    #[test]
    fn dependent_paths_embed_model_name() {
        assert_eq!(
            regression_plot_path("Random Forest"),
            "/api/ml/regression/plot/Random Forest"
        );
        assert_eq!(
            confusion_matrix_path("Status Classifier"),
            "/api/ml/confusion_matrix/Status Classifier"
        );
    }
}
