//! Reusable UI primitive components
//!
//! Low-level building blocks shared by the chart grid and the ML view:
//! loading indicators, inline error states, empty states, badges and cards.
//! Every failing panel renders its own [`ErrorState`] in place; siblings are
//! never affected.

use leptos::*;

// ============================================================================
// Loading States
// ============================================================================

/// Loading spinner with optional message. A source that never settles keeps
/// showing this indefinitely; a hung request is not an error.
#[component]
pub fn LoadingSpinner(#[prop(optional)] message: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status" aria-live="polite">
            <svg class="spinner" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                <circle class="spinner-track" cx="12" cy="12" r="10" fill="none" stroke-width="3"/>
                <circle class="spinner-head" cx="12" cy="12" r="10" fill="none" stroke-width="3"
                        stroke-dasharray="31.4 31.4" stroke-linecap="round"/>
            </svg>
            {message.map(|msg| view! { <span class="loading-message">{msg}</span> })}
        </div>
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Inline error display, rendered in place of a chart or table
#[component]
pub fn ErrorState(
    message: String,
    #[prop(optional, default = "Could not load this panel")] title: &'static str,
) -> impl IntoView {
    view! {
        <div class="error-state" role="alert">
            <div class="error-icon" aria-hidden="true">
                <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" d="M12 9v3.75m-9.303 3.376c-.866 1.5.217 3.374 1.948 3.374h14.71c1.73 0 2.813-1.874 1.948-3.374L13.949 3.378c-.866-1.5-3.032-1.5-3.898 0L2.697 16.126ZM12 15.75h.007v.008H12v-.008Z"/>
                </svg>
            </div>
            <div class="error-content">
                <h3 class="error-title">{title}</h3>
                <p class="error-message">{message}</p>
            </div>
        </div>
    }
}

// ============================================================================
// Empty States
// ============================================================================

/// Generic empty state component
#[component]
pub fn EmptyState(
    title: &'static str,
    #[prop(optional)] description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="empty-state" role="status">
            <div class="empty-text">{title}</div>
            {description.map(|desc| view! { <p class="empty-description">{desc}</p> })}
        </div>
    }
}

// ============================================================================
// Badges
// ============================================================================

/// Badge variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Primary,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge",
            BadgeVariant::Primary => "badge badge-primary",
        }
    }
}

/// Badge component with text
#[component]
pub fn Badge<T: IntoView + 'static>(
    text: T,
    #[prop(optional)] variant: BadgeVariant,
) -> impl IntoView {
    view! {
        <span class=variant.class()>{text}</span>
    }
}

// ============================================================================
// Cards & Containers
// ============================================================================

/// Titled card container for tables and charts
#[component]
pub fn TableCard(
    title: &'static str,
    children: Children,
    #[prop(optional)] badge: Option<View>,
) -> impl IntoView {
    view! {
        <div class="table-card">
            <div class="table-header">
                <div class="table-title-group">
                    <div class="table-title">{title}</div>
                    {badge}
                </div>
            </div>
            {children()}
        </div>
    }
}

/// Key-value info row with children for the value
#[component]
pub fn InfoRow(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="info-row">
            <span class="info-label">{label}</span>
            <span class="info-value">{children()}</span>
        </div>
    }
}
