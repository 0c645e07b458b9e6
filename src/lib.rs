//! Pharmacy Analytics Dashboard - Leptos-based WebAssembly UI
//!
//! Browser front-end for a pharmacy analytics backend. The backend computes
//! every chart and model artifact; this crate fetches them and renders the
//! result, isolating each panel's loading and error state from its siblings.
//!
//! ## Architecture
//!
//! ```text
//! registry.rs      static list of chart sources (id, path, response kind)
//!      |
//! api.rs           one typed gloo-net request per source, decoded per kind
//!      |
//! state.rs         per-source outcome signals, model selection, staleness
//!      |           guard for superseded selection fetches
//! components/      stateless renderers over the outcome signals
//! ```
//!
//! Data flows strictly downward; user interaction (tab switch, model
//! selection) flows back only into `state.rs`, which decides what to
//! re-fetch.
//!
//! ## Configuration
//!
//! The backend address can be injected by the serving process:
//!
//! ```html
//! <meta name="pharmalytics:api-url" content="http://127.0.0.1:8000">
//! ```
//!
//! or via `window.__PHARMALYTICS_CONFIG__ = { api_url: "..." }`. Without
//! either, the dashboard talks to its own origin.

pub mod api;
pub mod components;
pub mod config;
pub mod plotly;
pub mod registry;
pub mod state;

use leptos::*;
use leptos_router::*;

use components::{charts::ChartGridView, eda::EdaView, header::Header, models::MlModelsView};
use state::DashboardState;

/// Main dashboard application component
#[component]
pub fn App() -> impl IntoView {
    console_error_panic_hook::set_once();

    let state = DashboardState::new();
    provide_context(state.clone());

    // One fetch per chart source plus the ML overview, all concurrent.
    state.start();

    view! {
        <Router>
            <div class="app">
                <Header/>
                <main class="content">
                    <Routes>
                        <Route path="/" view=ChartGridView/>
                        <Route path="/models" view=MlModelsView/>
                        <Route path="/eda" view=EdaView/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    let _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(|| view! { <App/> });
}
