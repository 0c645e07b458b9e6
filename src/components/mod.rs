//! Dashboard UI components
//!
//! Component hierarchy, smallest first:
//!
//! 1. **Primitives** (`primitives.rs`) - loading spinners, inline error and
//!    empty states, badges, cards
//! 2. **Layout** (`header.rs`) - title bar and tab navigation
//! 3. **Views** (`charts.rs`, `models.rs`, `eda.rs`) - page-level components
//!
//! Views are pure functions of the state signals: they render a spinner for a
//! pending source, an inline error for a failed one and the visualization for
//! a ready one. User intents (tab switch, model selection) call back into
//! [`crate::state::DashboardState`]; nothing here performs network requests.

pub mod charts;
pub mod eda;
pub mod header;
pub mod models;
pub mod primitives;

pub use header::Header;

pub use primitives::{
    Badge, BadgeVariant, EmptyState, ErrorState, InfoRow, LoadingSpinner, TableCard,
};
