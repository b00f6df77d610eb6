//! Data model shared by the engine, the data sources and the front-end.

pub mod types;

pub use types::{
    AdditionalData, Category, CategorySelection, CategoryTab, Facets, FilterInput, LanguageShare,
    Project, QueryInput, RelevanceTieBreak, SortBy, SortOrder, ViewResults, VisibleProject,
};
