use crate::state::{CategorySelection, Project};

/// Lower-cased copy of the searchable fields of one project.
///
/// Built once per project and evaluation so matching and scoring do not
/// re-lower the same strings for every keyword.
#[derive(Debug, Clone)]
pub struct SearchableText {
    /// Lower-cased title.
    pub title: String,
    /// Lower-cased description.
    pub description: String,
    /// Lower-cased tags.
    pub tags: Vec<String>,
    /// Lower-cased language names.
    pub languages: Vec<String>,
}

impl SearchableText {
    /// Lower-case the searchable fields of `project`.
    #[must_use]
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.to_lowercase(),
            description: project.description.to_lowercase(),
            tags: project.tags.iter().map(|t| t.to_lowercase()).collect(),
            languages: project
                .additional_data
                .languages
                .keys()
                .map(|l| l.to_lowercase())
                .collect(),
        }
    }

    /// Whether `token` (already lower-cased) occurs in any searchable field.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.title.contains(token)
            || self.description.contains(token)
            || self.tags.iter().any(|t| t.contains(token))
            || self.languages.iter().any(|l| l.contains(token))
    }
}

/// What: Keep the projects that belong to the selected category tab.
///
/// Inputs:
/// - `projects`: Full project collection
/// - `selection`: Active category tab
///
/// Output:
/// - Borrowed projects in input order.
///
/// Details:
/// - `All` keeps everything, `Uncategorized` keeps projects without a category id,
///   `Id` keeps exact id matches.
#[must_use]
pub fn filter_by_category<'a>(
    projects: &'a [Project],
    selection: &CategorySelection,
) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| match selection {
            CategorySelection::All => true,
            CategorySelection::Uncategorized => p.project_category_id.is_none(),
            CategorySelection::Id(id) => p.project_category_id.as_deref() == Some(id.as_str()),
        })
        .collect()
}

/// What: Text filter for one project.
///
/// Inputs:
/// - `text`: Lower-cased searchable fields of the project
/// - `tokens`: Lower-cased keywords
///
/// Output:
/// - `true` when there are no keywords or any keyword occurs in any field.
#[must_use]
pub fn matches_text(text: &SearchableText, tokens: &[String]) -> bool {
    tokens.is_empty() || tokens.iter().any(|t| text.contains(t))
}

/// What: Exact type and tag filters for one project.
///
/// Inputs:
/// - `project`: Project to check
/// - `selected_type`: Required type, empty for no filter
/// - `selected_tags`: Tags of which one is required, empty for no filter
///
/// Output:
/// - `true` when every active exact filter is satisfied.
///
/// Details:
/// - Both comparisons are exact and case-sensitive.
#[must_use]
pub fn matches_exact_filters(
    project: &Project,
    selected_type: &str,
    selected_tags: &[String],
) -> bool {
    if !selected_type.is_empty() && project.kind != selected_type {
        return false;
    }
    selected_tags.is_empty() || selected_tags.iter().any(|t| project.tags.contains(t))
}
