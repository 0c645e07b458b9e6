//! Header and tab navigation

use leptos::*;

use super::primitives::{Badge, BadgeVariant};
use crate::config::DashboardConfig;

/// Title bar with the section tabs. Navigation is plain links; the router
/// decides which view renders. The server-injected backend version, when
/// present, shows next to the title.
#[component]
pub fn Header() -> impl IntoView {
    let version = version_label(DashboardConfig::load().version);

    view! {
        <header class="header">
            <div class="header-titles">
                <h1>
                    "Pharmacy Analytics Dashboard"
                    {version.map(|v| view! { <Badge text=v variant=BadgeVariant::Default/> })}
                </h1>
                <p class="subtitle">"Real-time Interactive Insights & ML Predictions"</p>
            </div>
            <nav class="tab-nav" aria-label="Dashboard sections">
                <a class="tab-btn" href="/">"Dashboard"</a>
                <a class="tab-btn" href="/models">"ML Models"</a>
                <a class="tab-btn" href="/eda">"EDA Analysis"</a>
            </nav>
        </header>
    }
}

/// Normalize an injected version string to a `v`-prefixed badge label.
/// Blank injections render no badge at all.
fn version_label(version: Option<String>) -> Option<String> {
    let version = version?;
    let trimmed = version.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("v{}", trimmed.trim_start_matches('v')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_badge_is_normalized() {
        assert_eq!(version_label(Some("1.4.0".into())), Some("v1.4.0".into()));
        assert_eq!(version_label(Some("v2.1".into())), Some("v2.1".into()));
    }

    #[test]
    fn blank_version_renders_no_badge() {
        assert_eq!(version_label(None), None);
        assert_eq!(version_label(Some("   ".into())), None);
    }
}
