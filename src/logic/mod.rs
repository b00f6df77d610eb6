//! Core non-UI logic split into modular submodules.

pub mod engine;
pub mod facets;
pub mod filter;
pub mod languages;
pub mod optimistic;
pub mod query;
pub mod relevance;
pub mod search;
pub mod sort;

// Re-export public APIs to preserve short import paths (crate::logic::...)
pub use engine::{ProjectView, compute_visible_projects};
pub use facets::{category_tabs, derive_facets};
pub use filter::{filter_by_category, matches_exact_filters, matches_text};
pub use languages::language_breakdown;
pub use optimistic::{Notifier, RecordingNotifier, TracingNotifier, apply_optimistic};
pub use query::tokenize;
pub use relevance::relevance_score;
pub use search::{SearchSession, spawn_search_worker};
pub use sort::{sort_by_relevance, sort_visible};
