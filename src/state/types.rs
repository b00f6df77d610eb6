//! Core value types used by the project listing engine.

use std::collections::BTreeMap;

use serde::Serialize;

/// Extra, source-specific data attached to a project.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AdditionalData {
    /// Language name to byte count, as reported by the repository host.
    pub languages: BTreeMap<String, u64>,
}

/// A portfolio project as delivered by the portfolio API.
///
/// Optional fields that were absent or `null` in the payload are normalized to
/// empty values while decoding (see [`crate::sources::parse_project`]).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Opaque unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Categorical type tag such as `github` or `custom`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Tags in display order.
    pub tags: Vec<String>,
    /// Owning category, `None` when uncategorized.
    pub project_category_id: Option<String>,
    /// Creation timestamp as sent by the API.
    pub created_at: Option<String>,
    /// Source-specific extras.
    pub additional_data: AdditionalData,
}

/// Project category used to build the filter tabs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Category identifier referenced by [`Project::project_category_id`].
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether the category gets a tab.
    pub is_visible: bool,
}

/// Category selection of the listing view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySelection {
    /// No category filter.
    #[default]
    All,
    /// Only projects without a category.
    Uncategorized,
    /// Only projects in the given category.
    Id(String),
}

impl CategorySelection {
    /// Return the key used on the command line and in tab descriptors.
    #[must_use]
    pub fn as_key(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Uncategorized => "uncategorized",
            Self::Id(id) => id,
        }
    }

    /// What: Parse a selection from its key.
    ///
    /// Inputs:
    /// - `key`: `"all"`, `"uncategorized"` (case-insensitive) or a category id.
    ///
    /// Output:
    /// - The matching selection; an empty key selects everything.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        let trimmed = key.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else if trimmed.eq_ignore_ascii_case("uncategorized") {
            Self::Uncategorized
        } else {
            Self::Id(trimmed.to_string())
        }
    }
}

/// Sort key used when no text search is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Creation date.
    #[default]
    Date,
    /// Title, case-insensitive.
    Name,
}

impl SortBy {
    /// Return the string key used in settings files for this sort key.
    ///
    /// Inputs: none
    ///
    /// Output: Static config key string.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Name => "name",
        }
    }

    /// Parse a sort key from its settings key or aliases.
    ///
    /// Inputs: `s` config string (case-insensitive).
    ///
    /// Output: `Some(SortBy)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "date" | "created_at" | "created" => Some(Self::Date),
            "name" | "title" => Some(Self::Name),
            _ => None,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first.
    Asc,
    /// Largest first.
    #[default]
    Desc,
}

impl SortOrder {
    /// Return the string key used in settings files for this direction.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Parse a direction from its settings key or aliases.
    ///
    /// Inputs: `s` config string (case-insensitive).
    ///
    /// Output: `Some(SortOrder)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Asc),
            "desc" | "descending" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// How projects with equal relevance are ordered while a text search is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelevanceTieBreak {
    /// Keep the order of the filtering pass.
    #[default]
    InputOrder,
    /// Apply the selected `SortBy`/`SortOrder` among equal scores.
    UserSort,
}

impl RelevanceTieBreak {
    /// Return the string key used in settings files.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::InputOrder => "input_order",
            Self::UserSort => "user_sort",
        }
    }

    /// Parse a tie-break policy from its settings key.
    ///
    /// Inputs: `s` config string (case-insensitive).
    ///
    /// Output: `Some(RelevanceTieBreak)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "input_order" | "stable" | "none" => Some(Self::InputOrder),
            "user_sort" | "sort" => Some(Self::UserSort),
            _ => None,
        }
    }
}

/// Filter and sort controls held by the view layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterInput {
    /// Category tab selection.
    pub category: CategorySelection,
    /// Raw search text; tokenized on whitespace.
    pub search_text: String,
    /// Exact project type, empty for no filter.
    pub selected_type: String,
    /// Tags of which a project needs at least one, empty for no filter.
    pub selected_tags: Vec<String>,
    /// Sort key without text search.
    pub sort_by: SortBy,
    /// Sort direction without text search.
    pub sort_order: SortOrder,
    /// Ordering among equal relevance scores.
    pub tie_break: RelevanceTieBreak,
}

/// A project selected for display, borrowed from the input collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VisibleProject<'a> {
    /// The underlying project.
    #[serde(flatten)]
    pub project: &'a Project,
    /// Relevance score when a text search is active.
    #[serde(rename = "relevanceScore", skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<u32>,
}

/// Distinct filter values available in the category-filtered set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    /// Distinct non-empty project types, ascending.
    pub types: Vec<String>,
    /// Distinct non-empty tags, ascending.
    pub tags: Vec<String>,
}

/// One category tab of the listing view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryTab {
    /// Selection activated by the tab.
    pub selection: CategorySelection,
    /// Tab label.
    pub label: String,
    /// Number of projects behind the tab.
    pub count: usize,
}

/// Share of one language in a project's language mix.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LanguageShare {
    /// Language name.
    pub name: String,
    /// Byte count.
    pub bytes: u64,
    /// Percentage of the total, in `[0, 100]`.
    pub percent: f64,
}

/// Filter request sent to the background search worker.
#[derive(Clone, Debug)]
pub struct QueryInput {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Controls to evaluate.
    pub input: FilterInput,
}

/// Owned view computed for a prior [`QueryInput`].
#[derive(Clone, Debug)]
pub struct ViewResults {
    /// Echoed identifier from the originating query.
    pub id: u64,
    /// Visible projects in display order, with their relevance score.
    pub items: Vec<(Project, Option<u32>)>,
    /// Facets of the category-filtered set.
    pub facets: Facets,
    /// Category tabs over the full collection.
    pub tabs: Vec<CategoryTab>,
}
