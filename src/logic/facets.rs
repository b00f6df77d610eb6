//! Filter facets and category tabs derived from the loaded collections.

use std::collections::BTreeSet;

use crate::state::{Category, CategorySelection, CategoryTab, Facets, Project};

/// What: Collect the distinct types and tags of a project set.
///
/// Inputs:
/// - `projects`: Usually the category-filtered set
///
/// Output:
/// - `Facets` with sorted, de-duplicated, non-empty values.
///
/// Details:
/// - Recompute whenever the category selection changes so the type/tag pickers
///   only offer values that can still match.
#[must_use]
pub fn derive_facets(projects: &[&Project]) -> Facets {
    let mut types = BTreeSet::new();
    let mut tags = BTreeSet::new();
    for p in projects {
        if !p.kind.is_empty() {
            types.insert(p.kind.clone());
        }
        tags.extend(p.tags.iter().filter(|t| !t.is_empty()).cloned());
    }
    Facets {
        types: types.into_iter().collect(),
        tags: tags.into_iter().collect(),
    }
}

/// What: Build the category tabs of the listing view.
///
/// Inputs:
/// - `projects`: Full project collection
/// - `categories`: Categories in display order
///
/// Output:
/// - "All" first, then one tab per visible category, then "Uncategorized" when needed.
///
/// Details:
/// - Hidden categories get no tab; their projects still count towards "All".
/// - The "Uncategorized" tab only appears when at least one project has no category.
#[must_use]
pub fn category_tabs(projects: &[Project], categories: &[Category]) -> Vec<CategoryTab> {
    let mut tabs = Vec::with_capacity(categories.len() + 2);
    tabs.push(CategoryTab {
        selection: CategorySelection::All,
        label: "All".to_string(),
        count: projects.len(),
    });
    for category in categories.iter().filter(|c| c.is_visible) {
        let count = projects
            .iter()
            .filter(|p| p.project_category_id.as_deref() == Some(category.id.as_str()))
            .count();
        tabs.push(CategoryTab {
            selection: CategorySelection::Id(category.id.clone()),
            label: category.name.clone(),
            count,
        });
    }
    let uncategorized = projects
        .iter()
        .filter(|p| p.project_category_id.is_none())
        .count();
    if uncategorized > 0 {
        tabs.push(CategoryTab {
            selection: CategorySelection::Uncategorized,
            label: "Uncategorized".to_string(),
            count: uncategorized,
        });
    }
    tabs
}
