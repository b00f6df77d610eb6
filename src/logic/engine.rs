//! Filter-sort-rank pipeline turning the loaded collections into the visible list.
//!
//! Every function here is a pure function of its arguments: the input slices are
//! never modified and the same inputs always give the same output. Callers invoke
//! it again from scratch whenever a control changes.

use serde::Serialize;

use crate::logic::facets::{category_tabs, derive_facets};
use crate::logic::filter::{
    SearchableText, filter_by_category, matches_exact_filters, matches_text,
};
use crate::logic::query::tokenize;
use crate::logic::relevance::relevance_score;
use crate::logic::sort::{sort_by_relevance, sort_visible};
use crate::state::{Category, CategoryTab, Facets, FilterInput, Project, VisibleProject};

/// What: Compute the ordered list of projects to display.
///
/// Inputs:
/// - `projects`: Full project collection
/// - `input`: Current filter and sort controls
///
/// Output:
/// - Visible projects in display order, borrowing from `projects`.
///
/// Details:
/// - Filters are conjunctive: category, then type/tags, then search text.
/// - With search keywords each result carries a relevance score and results are
///   ranked by it; otherwise the user's sort key and direction apply.
#[must_use]
pub fn compute_visible_projects<'a>(
    projects: &'a [Project],
    input: &FilterInput,
) -> Vec<VisibleProject<'a>> {
    let in_category = filter_by_category(projects, &input.category);
    visible_from(&in_category, input)
}

/// Filter, score and order an already category-filtered set.
fn visible_from<'a>(candidates: &[&'a Project], input: &FilterInput) -> Vec<VisibleProject<'a>> {
    let tokens = tokenize(&input.search_text);
    let searching = !tokens.is_empty();
    let mut visible: Vec<VisibleProject<'a>> = candidates
        .iter()
        .copied()
        .filter(|p| matches_exact_filters(p, &input.selected_type, &input.selected_tags))
        .filter_map(|project| {
            if !searching {
                return Some(VisibleProject {
                    project,
                    relevance_score: None,
                });
            }
            let text = SearchableText::from_project(project);
            matches_text(&text, &tokens).then(|| VisibleProject {
                project,
                relevance_score: Some(relevance_score(&text, &tokens)),
            })
        })
        .collect();

    if searching {
        sort_by_relevance(
            &mut visible,
            input.tie_break,
            input.sort_by,
            input.sort_order,
        );
    } else {
        sort_visible(&mut visible, input.sort_by, input.sort_order);
    }
    tracing::debug!(
        candidates = candidates.len(),
        visible = visible.len(),
        keywords = tokens.len(),
        "computed visible projects"
    );
    visible
}

/// Everything the listing view renders for one set of controls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectView<'a> {
    /// Visible projects in display order.
    pub visible: Vec<VisibleProject<'a>>,
    /// Type and tag values available within the selected category.
    pub facets: Facets,
    /// Category tabs over the full collection.
    pub tabs: Vec<CategoryTab>,
}

impl<'a> ProjectView<'a> {
    /// What: Build the complete listing view.
    ///
    /// Inputs:
    /// - `projects`: Full project collection
    /// - `categories`: Category collection, used for the tabs
    /// - `input`: Current filter and sort controls
    ///
    /// Output:
    /// - Visible list identical to [`compute_visible_projects`], plus facets of the
    ///   category-filtered set and the category tabs.
    #[must_use]
    pub fn build(projects: &'a [Project], categories: &[Category], input: &FilterInput) -> Self {
        let in_category = filter_by_category(projects, &input.category);
        Self {
            facets: derive_facets(&in_category),
            visible: visible_from(&in_category, input),
            tabs: category_tabs(projects, categories),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CategorySelection, SortBy, SortOrder};

    fn project(id: &str, title: &str, description: &str, category: Option<&str>) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            kind: "github".to_string(),
            project_category_id: category.map(str::to_string),
            ..Default::default()
        }
    }

    fn ids(visible: &[VisibleProject<'_>]) -> Vec<String> {
        visible.iter().map(|v| v.project.id.clone()).collect()
    }

    #[test]
    /// What: Search ranks title matches above description-only matches
    ///
    /// - Input: Three "bot" titles and one description-only mention
    /// - Output: Title matches first, description match last with score 1
    fn search_ranks_by_relevance() {
        let projects = vec![
            project("notes", "Notes", "a bot for notes", None),
            project("chat", "Chat Bot", "", None),
            project("weather", "Weather App", "", None),
            project("dash", "Bot Dashboard", "", None),
        ];
        let input = FilterInput {
            search_text: "bot".into(),
            ..Default::default()
        };
        let visible = compute_visible_projects(&projects, &input);
        assert_eq!(ids(&visible), vec!["chat", "dash", "notes"]);
        assert_eq!(visible[0].relevance_score, Some(5));
        assert_eq!(visible[2].relevance_score, Some(1));
    }

    #[test]
    /// What: Without search the user sort applies and no scores are attached
    ///
    /// - Input: Two dated projects, date ascending
    /// - Output: Older first, scores absent
    fn no_search_uses_user_sort() {
        let mut older = project("old", "B", "", None);
        older.created_at = Some("2023-01-01".into());
        let mut newer = project("new", "A", "", None);
        newer.created_at = Some("2024-01-01".into());
        let projects = vec![newer, older];
        let input = FilterInput {
            sort_by: SortBy::Date,
            sort_order: SortOrder::Asc,
            ..Default::default()
        };
        let visible = compute_visible_projects(&projects, &input);
        assert_eq!(ids(&visible), vec!["old", "new"]);
        assert!(visible.iter().all(|v| v.relevance_score.is_none()));
    }

    #[test]
    /// What: View facets follow the category selection while tabs cover everything
    ///
    /// - Input: Projects in two categories with distinct tags
    /// - Output: Facets only from the selected category; tabs include both
    fn view_facets_follow_category() {
        let mut web = project("w", "Site", "", Some("web"));
        web.tags = vec!["React".into()];
        let mut tool = project("t", "Tool", "", Some("tools"));
        tool.tags = vec!["Rust".into()];
        let projects = vec![web, tool];
        let categories = vec![
            Category {
                id: "web".into(),
                name: "Web".into(),
                is_visible: true,
            },
            Category {
                id: "tools".into(),
                name: "Tools".into(),
                is_visible: true,
            },
        ];
        let input = FilterInput {
            category: CategorySelection::Id("tools".into()),
            ..Default::default()
        };
        let view = ProjectView::build(&projects, &categories, &input);
        assert_eq!(ids(&view.visible), vec!["t"]);
        assert_eq!(view.facets.tags, vec!["Rust"]);
        assert_eq!(view.tabs.len(), 3);
        assert_eq!(view.visible, compute_visible_projects(&projects, &input));
    }

    #[test]
    /// What: Visible projects serialize with a camelCase relevance score
    ///
    /// - Input: One scored project
    /// - Output: JSON object with `type` and `relevanceScore` keys
    fn visible_project_json_shape() {
        let p = project("1", "Bot", "", None);
        let v = VisibleProject {
            project: &p,
            relevance_score: Some(10),
        };
        let json = serde_json::to_value(&v).expect("serialize");
        assert_eq!(json["relevanceScore"], 10);
        assert_eq!(json["type"], "github");
        assert_eq!(json["id"], "1");
    }
}
